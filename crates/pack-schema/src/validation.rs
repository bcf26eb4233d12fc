//! Manifest validation rules.

use crate::finding::ValidationResult;
use crate::json::check_json_file;
use crate::manifest::{display_value, ModulesSection, PackManifest};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Whether a value is a string in standard UUID syntax.
///
/// Hyphenated, simple, braced and `urn:uuid:` forms are accepted.
pub fn is_well_formed_uuid(value: &Value) -> bool {
    value
        .as_str()
        .map(|s| Uuid::parse_str(s).is_ok())
        .unwrap_or(false)
}

/// Validate the manifest file at `path`.
///
/// A missing or unparseable manifest yields a single error and nothing else.
pub fn validate_manifest_file(path: &Path) -> ValidationResult {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "manifest".to_string());

    let mut result = ValidationResult::new();

    if !path.exists() {
        result.add_error(format!("{} not found at {}", file_name, path.display()));
        return result;
    }

    let document = match check_json_file(path) {
        Ok(document) => document,
        Err(e) => {
            result.add_error(format!("Invalid JSON in {} - {}", file_name, e));
            return result;
        }
    };

    debug!("Parsed {:?}", path);
    validate_manifest(&PackManifest::from_value(&document))
}

/// Validate a parsed manifest.
pub fn validate_manifest(manifest: &PackManifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    if manifest.format_version.is_none() {
        result.add_warning("Missing format_version");
    }

    let Some(header) = &manifest.header else {
        result.add_error("Missing header section");
        return result;
    };

    for field in header.missing_fields() {
        result.add_error(format!("Missing required header field: {}", field));
    }

    if let Some(uuid) = &header.uuid {
        if !is_well_formed_uuid(uuid) {
            result.add_error(format!("Invalid header UUID: {}", display_value(uuid)));
        }
    }

    match &manifest.modules {
        None => result.add_error("Missing modules section"),
        Some(ModulesSection::NotAnArray(_)) => {
            result.add_error("Invalid modules section: expected an array")
        }
        Some(ModulesSection::Array(modules)) => {
            for (i, module) in modules.iter().enumerate() {
                match &module.uuid {
                    None => result.add_error(format!("Module {} missing UUID", i)),
                    Some(uuid) if !is_well_formed_uuid(uuid) => result.add_error(format!(
                        "Invalid UUID in module {}: {}",
                        i,
                        display_value(uuid)
                    )),
                    Some(_) => {}
                }

                if module.module_type.is_none() {
                    result.add_error(format!("Module {} missing type", i));
                }

                if module.version.is_none() {
                    result.add_error(format!("Module {} missing version", i));
                }
            }
        }
    }

    if has_duplicates(&manifest.declared_uuids()) {
        result.add_error("Duplicate UUIDs found in manifest");
    }

    result
}

fn has_duplicates(values: &[&Value]) -> bool {
    let mut seen = HashSet::new();
    // Keyed by JSON text so "1" and 1 stay distinct.
    values.iter().any(|v| !seen.insert(v.to_string()))
}
