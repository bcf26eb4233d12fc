//! Pack discovery under a root directory.

use crate::config::ValidatorConfig;
use packcheck_common::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Find pack directories directly under `root`.
///
/// A pack is a non-hidden subdirectory with a manifest file at its top
/// level. Only one level is searched. The result is sorted by path.
pub fn discover_packs(root: &Path, config: &ValidatorConfig) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(root).map_err(|source| Error::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut packs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", root, e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if is_hidden(&entry.file_name().to_string_lossy(), config) {
            debug!("Skipping hidden directory {:?}", path);
            continue;
        }
        if path.join(&config.manifest_file).exists() {
            debug!("Found pack {:?}", path);
            packs.push(path);
        }
    }

    packs.sort();
    Ok(packs)
}

fn is_hidden(name: &str, config: &ValidatorConfig) -> bool {
    !config.hidden_prefix.is_empty() && name.starts_with(&config.hidden_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pack(root: &Path, name: &str) {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("manifest.json"), "{}").unwrap();
    }

    #[test]
    fn test_discovers_sorted_packs() {
        let root = tempfile::tempdir().unwrap();
        make_pack(root.path(), "zeta_rp");
        make_pack(root.path(), "alpha_bp");
        make_pack(root.path(), "mid");

        let names: Vec<_> = discover_packs(root.path(), &ValidatorConfig::default())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["alpha_bp", "mid", "zeta_rp"]);
    }

    #[test]
    fn test_skips_hidden_plain_and_nested() {
        let root = tempfile::tempdir().unwrap();
        make_pack(root.path(), ".git");
        make_pack(root.path(), "outer/inner");
        std::fs::create_dir(root.path().join("docs")).unwrap();
        std::fs::write(root.path().join("manifest.json"), "{}").unwrap();

        let packs = discover_packs(root.path(), &ValidatorConfig::default()).unwrap();
        assert!(packs.is_empty(), "{:?}", packs);
    }

    #[test]
    fn test_empty_hidden_prefix_hides_nothing() {
        let root = tempfile::tempdir().unwrap();
        make_pack(root.path(), ".dotpack");

        let config = ValidatorConfig {
            hidden_prefix: String::new(),
            ..ValidatorConfig::default()
        };
        assert_eq!(discover_packs(root.path(), &config).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let err = discover_packs(&root.path().join("missing"), &ValidatorConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::RootUnreadable { .. }));
    }
}
