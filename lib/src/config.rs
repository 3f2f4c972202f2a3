// lib/src/config.rs

use std::path::Path;

use serde::{Deserialize, Serialize};

use models::errors::{ClinicError, ClinicResult};

use crate::store::StoreLatency;

/// Runtime configuration, loadable from TOML. Everything defaults, so an
/// empty file (or no file at all) is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    pub latency: StoreLatency,
}

impl ClinicConfig {
    pub fn from_toml_str(raw: &str) -> ClinicResult<Self> {
        toml::from_str(raw).map_err(|e| ClinicError::Internal(format!("invalid config: {}", e)))
    }

    pub fn load(path: &Path) -> ClinicResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ClinicError::Internal(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn should_default_every_field_on_an_empty_config() {
        let config = ClinicConfig::from_toml_str("").unwrap();
        assert_eq!(config.latency, StoreLatency::default());
    }

    #[test]
    fn should_load_a_partial_latency_table_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[latency]\nget_all_ms = 0\ncreate_ms = 50").unwrap();

        let config = ClinicConfig::load(file.path()).unwrap();
        assert_eq!(config.latency.get_all_ms, 0);
        assert_eq!(config.latency.create_ms, 50);
        // Unspecified fields keep their defaults.
        assert_eq!(config.latency.update_ms, StoreLatency::default().update_ms);
    }

    #[test]
    fn should_reject_malformed_toml() {
        assert!(ClinicConfig::from_toml_str("latency = \"fast\"").is_err());
    }
}
