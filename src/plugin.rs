// plugin.rs

use enum_dispatch::enum_dispatch;

use crate::assets::PathResolver;
use crate::config::ConfigSource;
use crate::error::PluginError;
use crate::solovetsky::SolovetskyPlugin;
use crate::terminal::Terminal;

/// What a host can ask of a content plugin.
#[enum_dispatch]
pub trait Plugin {
    fn name(&self) -> &'static str;

    /// Fires side effects for triggers in `bot_reply` and hands it back unchanged.
    fn filter_bot_reply(&self, bot_reply: String, terminal: &mut dyn Terminal) -> String;

    /// Appends game-state annotations to `prompt`.
    fn filter_plugin_prompt(&self, prompt: String, config: &dyn ConfigSource) -> String;

    /// Blocks until the operator confirms, then plays the boot sequence.
    fn play_intro(
        &self,
        terminal: &mut dyn Terminal,
        config: &dyn ConfigSource,
    ) -> Result<(), PluginError>;

    /// Canned debug reply for `user_input`; empty when there is none.
    fn get_test_reply(&self, user_input: &str) -> String;
}

#[enum_dispatch(Plugin)]
#[derive(Debug, Clone)]
pub enum Plugins {
    SolovetskyPlugin,
}

pub type PluginConstructor = fn(&dyn PathResolver) -> Result<Plugins, PluginError>;

pub struct PluginEntry {
    pub name: &'static str,
    pub build: PluginConstructor,
}

pub const REGISTRY: &[PluginEntry] = &[PluginEntry {
    name: SolovetskyPlugin::NAME,
    build: build_solovetsky,
}];

fn build_solovetsky(resolver: &dyn PathResolver) -> Result<Plugins, PluginError> {
    Ok(SolovetskyPlugin::new(resolver)?.into())
}

pub fn plugin_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|entry| entry.name)
}

/// Build the plugin registered under `name`.
pub fn load_plugin(name: &str, resolver: &dyn PathResolver) -> Result<Plugins, PluginError> {
    let entry = REGISTRY
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| PluginError::UnknownPlugin(name.to_string()))?;
    log::info!("Loading plugin: {}", entry.name);
    (entry.build)(resolver)
}
