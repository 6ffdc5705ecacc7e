// Host settings for a terminal session, stored as JSON in the data directory.
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::PluginError;
use crate::solovetsky::SolovetskyPlugin;
use crate::terminal::DEFAULT_TEXT_SPEED;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub plugin: String,              // Registry name of the plugin to load.
    pub assets_dir: Option<PathBuf>, // Text assets; defaults to <data>/assets.
    pub sounds_dir: Option<PathBuf>, // Sound cues; defaults to <data>/sounds.
    pub config_path: Option<PathBuf>, // Game-state flags; defaults to <data>/game_state.json.
    pub audio_output_enabled: bool,
    pub debug_mode: bool,
    pub skip_intro: bool,
    pub text_speed: f64, // Seconds per character for slow prints.
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            plugin: SolovetskyPlugin::NAME.to_string(),
            assets_dir: None,
            sounds_dir: None,
            config_path: None,
            audio_output_enabled: true,
            debug_mode: false,
            skip_intro: false,
            text_speed: DEFAULT_TEXT_SPEED,
        }
    }
}

impl Settings {
    /// `~/solovetsky/data`.
    pub fn data_dir() -> Result<PathBuf, PluginError> {
        let home = dir::home_dir().ok_or(PluginError::NoHomeDir)?;
        Ok(home.join("solovetsky").join("data"))
    }

    // Missing file means defaults; a malformed one is an error.
    pub fn load(data_dir: &Path) -> Result<Self, PluginError> {
        let path = data_dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_settings_from_file(&path)
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), PluginError> {
        self.save_to_file(&data_dir.join(SETTINGS_FILE))
    }

    pub fn load_settings_from_file(path: &Path) -> Result<Self, PluginError> {
        let data = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), PluginError> {
        let data = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    pub fn assets_dir(&self, data_dir: &Path) -> PathBuf {
        self.assets_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("assets"))
    }

    pub fn sounds_dir(&self, data_dir: &Path) -> PathBuf {
        self.sounds_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("sounds"))
    }

    pub fn config_path(&self, data_dir: &Path) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| data_dir.join("game_state.json"))
    }
}
