//! Sound definition file checks.

use crate::config::ValidatorConfig;
use packcheck_pack_schema::{check_json_file, ValidationResult};
use std::path::Path;

/// `sounds/sound_definitions.json` must be valid JSON when present.
pub fn validate_sound_definitions(pack_root: &Path, config: &ValidatorConfig) -> ValidationResult {
    let mut result = ValidationResult::new();
    let path = pack_root.join(&config.sound_definitions_file);

    if path.exists() {
        if let Err(e) = check_json_file(&path) {
            result.add_error(format!("Invalid JSON in {} - {}", file_name(&path), e));
        }
    }

    result
}

/// A root-level `sounds.json` is deprecated; it is still syntax-checked.
pub fn validate_legacy_sounds(pack_root: &Path, config: &ValidatorConfig) -> ValidationResult {
    let mut result = ValidationResult::new();
    let path = pack_root.join(&config.legacy_sounds_file);

    if !path.exists() {
        return result;
    }

    result.add_info(format!(
        "{} found in root - this file is deprecated, use {} instead",
        config.legacy_sounds_file, config.sound_definitions_file
    ));
    if let Err(e) = check_json_file(&path) {
        result.add_error(format!("Invalid JSON in {} - {}", file_name(&path), e));
    }

    result
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
