pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod logging;
pub mod plugin;
pub mod settings;
pub mod solovetsky;
pub mod terminal;

// Re-export commonly used items for easier access
pub use assets::{AssetDir, AssetKey, PathResolver};
pub use config::{ConfigSource, ConfigStore};
pub use error::{AudioError, PluginError, TerminalError};
pub use plugin::{Plugin, Plugins, load_plugin};
pub use settings::Settings;
pub use solovetsky::SolovetskyPlugin;
pub use terminal::{CrosstermTerminal, Terminal};
