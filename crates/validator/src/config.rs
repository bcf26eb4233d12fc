//! Validator configuration.

use packcheck_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File names and limits the checks are run against.
///
/// Every field has a default, so a config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Manifest file name at the top of each pack
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,
    /// Pack icon file name at the top of each pack
    #[serde(default = "default_icon_file")]
    pub icon_file: String,
    /// Required icon width in pixels
    #[serde(default = "default_icon_size")]
    pub icon_width: u32,
    /// Required icon height in pixels
    #[serde(default = "default_icon_size")]
    pub icon_height: u32,
    /// Sound definitions file, relative to the pack root
    #[serde(default = "default_sound_definitions_file")]
    pub sound_definitions_file: String,
    /// Deprecated sounds file at the pack root
    #[serde(default = "default_legacy_sounds_file")]
    pub legacy_sounds_file: String,
    /// Directories whose name starts with this are never packs
    #[serde(default = "default_hidden_prefix")]
    pub hidden_prefix: String,
}

fn default_manifest_file() -> String {
    "manifest.json".to_string()
}
fn default_icon_file() -> String {
    "pack_icon.png".to_string()
}
fn default_icon_size() -> u32 {
    256
}
fn default_sound_definitions_file() -> String {
    "sounds/sound_definitions.json".to_string()
}
fn default_legacy_sounds_file() -> String {
    "sounds.json".to_string()
}
fn default_hidden_prefix() -> String {
    ".".to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            manifest_file: default_manifest_file(),
            icon_file: default_icon_file(),
            icon_width: default_icon_size(),
            icon_height: default_icon_size(),
            sound_definitions_file: default_sound_definitions_file(),
            legacy_sounds_file: default_legacy_sounds_file(),
            hidden_prefix: default_hidden_prefix(),
        }
    }
}

impl ValidatorConfig {
    /// Reject settings that would make every pack unverifiable.
    pub fn check(&self) -> Result<()> {
        if self.manifest_file.trim().is_empty() {
            return Err(Error::Config("manifest_file must not be empty".to_string()));
        }
        if self.icon_width == 0 || self.icon_height == 0 {
            return Err(Error::Config(format!(
                "icon size must be non-zero, got {}x{}",
                self.icon_width, self.icon_height
            )));
        }
        Ok(())
    }
}

/// Load configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<ValidatorConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ValidatorConfig = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    config.check()?;
    Ok(config)
}
