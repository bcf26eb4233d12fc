//! Pack schema definitions for packcheck.
//!
//! This crate defines the findings model, the typed view of a pack
//! manifest, and the manifest-level validation rules.

pub mod finding;
pub mod json;
pub mod manifest;
pub mod validation;

pub use finding::{Finding, Severity, ValidationResult};
pub use json::{check_json_file, check_json_str, JsonCheckError};
pub use manifest::{Header, Module, ModulesSection, PackManifest, REQUIRED_HEADER_FIELDS};
pub use validation::{is_well_formed_uuid, validate_manifest, validate_manifest_file};
