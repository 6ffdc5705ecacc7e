//! Content plugin for the UNCSS Solovetsky Island's DA/UT/UR 2200 computer,
//! part of the Great Mother Mission.

pub mod annotations;
pub mod intro;
pub mod reactions;
pub mod replies;

use crate::assets::{AssetKey, PathResolver, load_text};
use crate::config::ConfigSource;
use crate::error::PluginError;
use crate::plugin::Plugin;
use crate::terminal::Terminal;

#[derive(Debug, Clone)]
pub struct SolovetskyPlugin {
    logo: String,
    boot_text: String,
}

impl SolovetskyPlugin {
    pub const NAME: &'static str = "solovetsky";

    // Both assets are required; a missing one fails construction.
    pub fn new(resolver: &dyn PathResolver) -> Result<Self, PluginError> {
        let logo = load_text(resolver, AssetKey::UnLogo.as_ref())?;
        let boot_text = load_text(resolver, AssetKey::BootText.as_ref())?;
        log::info!("Loaded {} plugin assets", Self::NAME);
        Ok(Self { logo, boot_text })
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }
}

impl Plugin for SolovetskyPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn filter_bot_reply(&self, bot_reply: String, terminal: &mut dyn Terminal) -> String {
        for reaction in reactions::triggered(&bot_reply) {
            log::info!("Reacting to {}", reaction.name);
            reaction.play(terminal);
        }
        bot_reply
    }

    fn filter_plugin_prompt(&self, prompt: String, config: &dyn ConfigSource) -> String {
        annotations::augment(prompt, config)
    }

    fn play_intro(
        &self,
        terminal: &mut dyn Terminal,
        config: &dyn ConfigSource,
    ) -> Result<(), PluginError> {
        let rejected = intro::await_confirmation(terminal)?;
        log::info!("Boot confirmed after {rejected} rejected inputs");
        intro::boot(terminal, config, &self.logo, &self.boot_text)?;
        Ok(())
    }

    fn get_test_reply(&self, user_input: &str) -> String {
        match replies::lookup(user_input) {
            Some(reply) => reply.to_string(),
            None => {
                log::debug!("No canned reply for: {user_input:?}");
                String::new()
            }
        }
    }
}
