//! Run configuration loaded from JSON.

use crate::error::ConfigError;
use crate::qbf::{Qbf, DEFAULT_SOUNDNESS_BITS};
use crate::verifier::VERIFIER_DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parameters for a protocol run.  Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProtocolConfig {
    /// Seed for the verifier's challenges.
    pub seed: u64,
    /// Target soundness, in bits, used to size the field.
    pub soundness_bits: u32,
    /// Explicit prime lower bound, overriding the soundness-derived one.
    pub prime_lower_bound: Option<u64>,
    /// Directory transcripts are written to, if any.
    pub transcript_dir: Option<PathBuf>,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            seed: VERIFIER_DEFAULT_SEED,
            soundness_bits: DEFAULT_SOUNDNESS_BITS,
            prime_lower_bound: None,
            transcript_dir: None,
        }
    }
}

impl ProtocolConfig {
    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Prime lower bound for `qbf` under this configuration.
    pub fn prime_lower_bound_for(&self, qbf: &Qbf) -> u64 {
        self.prime_lower_bound
            .unwrap_or_else(|| qbf.field_prime_lower_bound_with(self.soundness_bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = ProtocolConfig::from_json_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.soundness_bits, DEFAULT_SOUNDNESS_BITS);
        assert_eq!(config.prime_lower_bound, None);
        assert_eq!(ProtocolConfig::from_json_str("{}").unwrap(), ProtocolConfig::default());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = ProtocolConfig::from_json_str(r#"{"sead": 7}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ProtocolConfig::load("/nonexistent/qbf_ip.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_prime_lower_bound_override() {
        let qbf = formulas::simple_equality();
        let mut config = ProtocolConfig::default();
        assert_eq!(config.prime_lower_bound_for(&qbf), qbf.field_prime_lower_bound());
        config.prime_lower_bound = Some(101);
        assert_eq!(config.prime_lower_bound_for(&qbf), 101);
    }
}
