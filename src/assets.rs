// assets.rs

use include_dir::{Dir, include_dir};
use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::PluginError;

static BUNDLED: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Symbolic names of the text assets a plugin can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetKey {
    UnLogo,
    BootText,
    Prompt,
}

impl AssetKey {
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.as_ref().to_lowercase())
    }
}

/// Maps asset keys to the files that hold them.
pub trait PathResolver {
    fn ascii_path(&self, key: &str) -> Result<PathBuf, PluginError>;
}

/// Resolves `KEY` to `<root>/<key>.txt`.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathResolver for AssetDir {
    fn ascii_path(&self, key: &str) -> Result<PathBuf, PluginError> {
        let key = AssetKey::from_str(key).map_err(|_| PluginError::UnknownAsset(key.to_string()))?;
        Ok(self.root.join(key.file_name()))
    }
}

/// Resolve `key` and read the whole file. Any failure is fatal to the caller.
pub fn load_text(resolver: &dyn PathResolver, key: &str) -> Result<String, PluginError> {
    let path = resolver.ascii_path(key)?;
    fs::read_to_string(&path).map_err(|source| PluginError::AssetRead {
        key: key.to_string(),
        path,
        source,
    })
}

/// Write the bundled text assets into `target`, leaving existing files alone.
/// Returns the files that were written.
pub fn install_bundled(target: &Path) -> Result<Vec<PathBuf>, PluginError> {
    create_dir_all(target)?;
    let mut installed = Vec::new();
    for file in BUNDLED.files() {
        let Some(name) = file.path().file_name() else {
            continue;
        };
        let destination = target.join(name);
        if destination.exists() {
            continue;
        }
        fs::write(&destination, file.contents())?;
        log::info!("Installed bundled asset: {}", destination.display());
        installed.push(destination);
    }
    Ok(installed)
}
