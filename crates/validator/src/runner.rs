//! Run driver: validate every pack under a root.

use crate::config::ValidatorConfig;
use crate::discovery::discover_packs;
use crate::icon::{default_probe, IconProbe};
use crate::pack::{validate_pack, PackReport};
use packcheck_common::{Result, Timestamp};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: Timestamp,
    pub root: PathBuf,
    pub passed: bool,
    pub packs: Vec<PackReport>,
}

impl RunReport {
    /// Process exit status: 0 when every pack passed or none were found.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

/// Runs the pack checks with a fixed configuration and icon probe.
pub struct Validator {
    config: ValidatorConfig,
    probe: Box<dyn IconProbe>,
}

impl Validator {
    /// Create a validator using the best icon probe this build supports.
    pub fn new(config: ValidatorConfig) -> Self {
        Self::with_probe(config, default_probe())
    }

    pub fn with_probe(config: ValidatorConfig, probe: Box<dyn IconProbe>) -> Self {
        Self { config, probe }
    }

    /// Validate one pack directory.
    pub fn validate_pack(&self, pack_root: &Path) -> PackReport {
        validate_pack(pack_root, &self.config, self.probe.as_ref())
    }

    /// Discover and validate every pack under `root`, in sorted order.
    pub fn run(&self, root: &Path) -> Result<RunReport> {
        info!("Validating packs under {:?}", root);

        let packs: Vec<PackReport> = discover_packs(root, &self.config)?
            .iter()
            .map(|path| self.validate_pack(path))
            .collect();

        if packs.is_empty() {
            info!("No packs found under {:?}", root);
        }

        let passed = packs.iter().all(|p| p.passed);
        info!(
            "Validated {} pack(s): {}/{} passed",
            packs.len(),
            packs.iter().filter(|p| p.passed).count(),
            packs.len()
        );

        Ok(RunReport {
            generated_at: Timestamp::now(),
            root: root.to_path_buf(),
            passed,
            packs,
        })
    }
}
