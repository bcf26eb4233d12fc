//! Validation of a single pack directory.

use crate::config::ValidatorConfig;
use crate::icon::{validate_icon, IconProbe};
use crate::sounds::{validate_legacy_sounds, validate_sound_definitions};
use packcheck_pack_schema::{validate_manifest_file, Severity, ValidationResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Findings for one pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackReport {
    pub name: String,
    pub path: PathBuf,
    pub passed: bool,
    pub findings: ValidationResult,
}

impl PackReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.findings.count(severity)
    }

    /// Process exit status for a single-pack run.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

/// Run every check against one pack.
///
/// Findings are ordered manifest, icon, sound definitions, then the
/// legacy sounds file.
pub fn validate_pack(
    pack_root: &Path,
    config: &ValidatorConfig,
    probe: &dyn IconProbe,
) -> PackReport {
    let name = pack_root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| pack_root.display().to_string());

    info!("Validating pack: {}", name);

    let mut findings = validate_manifest_file(&pack_root.join(&config.manifest_file));
    findings.merge(validate_icon(pack_root, config, probe));
    findings.merge(validate_sound_definitions(pack_root, config));
    findings.merge(validate_legacy_sounds(pack_root, config));

    let passed = findings.passed();
    info!(
        "Pack {}: {} ({} errors, {} warnings, {} info)",
        name,
        if passed { "passed" } else { "failed" },
        findings.count(Severity::Error),
        findings.count(Severity::Warning),
        findings.count(Severity::Info)
    );

    PackReport {
        name,
        path: pack_root.to_path_buf(),
        passed,
        findings,
    }
}
