//! Engine configuration
//!
//! Handles configuration loading and defaults: framework name prefixes
//! for the baseline carve-out rule, and shared-store locations for
//! fallback probing.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::EngineError;
use crate::resolve::SharedStoreProbe;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Name prefixes recognized as always-relevant framework modules
    #[serde(default)]
    pub framework_prefixes: Vec<String>,

    /// Shared module store locations probed when direct resolution misses
    #[serde(default = "default_share_dirs")]
    pub share_dirs: Vec<PathBuf>,
}

fn default_share_dirs() -> Vec<PathBuf> {
    SharedStoreProbe::platform_default_dirs()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            framework_prefixes: Vec::new(),
            share_dirs: default_share_dirs(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields the defaults; a malformed file is a fatal
    /// configuration defect.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        if !path.as_ref().exists() {
            debug!("No config file at {:?}, using defaults", path.as_ref());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::InvalidConfiguration(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            EngineError::InvalidConfiguration(format!("Failed to parse config TOML: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap();
        assert!(config.framework_prefixes.is_empty());
        assert_eq!(config.share_dirs, SharedStoreProbe::platform_default_dirs());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            framework_prefixes = ["acme."]
            share_dirs = ["/opt/acme/shared"]
            "#,
        )
        .unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.framework_prefixes, vec!["acme.".to_string()]);
        assert_eq!(config.share_dirs, vec![PathBuf::from("/opt/acme/shared")]);
    }

    #[test]
    fn malformed_file_is_a_configuration_defect() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "framework_prefixes = 7").unwrap();

        let err = EngineConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }
}
