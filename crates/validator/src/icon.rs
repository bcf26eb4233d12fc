//! Pack icon checks.
//!
//! Reading pixel dimensions is delegated to an [`IconProbe`]. Builds
//! without the `icon-dimensions` feature use [`UnavailableProbe`], which
//! turns the dimension check into an advisory finding.

use crate::config::ValidatorConfig;
use packcheck_pack_schema::ValidationResult;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Why an icon's dimensions could not be read.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("image decoding support is not available")]
    Unavailable,

    #[error("{0}")]
    Decode(String),
}

/// Capability to read an image's pixel size.
pub trait IconProbe {
    /// Return `(width, height)` of the image at `path`.
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError>;
}

/// Probe used when no image decoder is compiled in.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableProbe;

impl IconProbe for UnavailableProbe {
    fn dimensions(&self, _path: &Path) -> Result<(u32, u32), ProbeError> {
        Err(ProbeError::Unavailable)
    }
}

/// Probe backed by the `image` crate.
#[cfg(feature = "icon-dimensions")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageProbe;

#[cfg(feature = "icon-dimensions")]
impl IconProbe for ImageProbe {
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
        image::image_dimensions(path).map_err(|e| ProbeError::Decode(e.to_string()))
    }
}

/// The best probe this build supports.
#[cfg(feature = "icon-dimensions")]
pub fn default_probe() -> Box<dyn IconProbe> {
    Box::new(ImageProbe)
}

/// The best probe this build supports.
#[cfg(not(feature = "icon-dimensions"))]
pub fn default_probe() -> Box<dyn IconProbe> {
    Box::new(UnavailableProbe)
}

/// Check that the pack icon exists and has the configured size.
pub fn validate_icon(
    pack_root: &Path,
    config: &ValidatorConfig,
    probe: &dyn IconProbe,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    let icon_path = pack_root.join(&config.icon_file);

    if !icon_path.exists() {
        result.add_warning(format!("{} not found", config.icon_file));
        return result;
    }

    match probe.dimensions(&icon_path) {
        Ok((width, height)) => {
            debug!("{:?} is {}x{}", icon_path, width, height);
            if (width, height) != (config.icon_width, config.icon_height) {
                result.add_warning(format!(
                    "{} should be {}x{}, found {}x{}",
                    config.icon_file, config.icon_width, config.icon_height, width, height
                ));
            }
        }
        Err(ProbeError::Unavailable) => {
            result.add_info(
                "Build with the `icon-dimensions` feature to validate icon dimensions",
            );
        }
        Err(e) => {
            result.add_warning(format!("Could not validate icon dimensions: {}", e));
        }
    }

    result
}
