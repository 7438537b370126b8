//! YAML configuration file support.
//!
//! The surrounding book pipeline drives many chapters through the same
//! verification settings; this module lets it define both stage
//! configurations in a single YAML file and load them at runtime.
//!
//! ## Example
//!
//! ```yaml
//! version: "1.0"
//! name: "vth-n4"
//!
//! canonical:
//!   version: 1
//!   long_prefix_len: 80
//!   long_prefix_min: 30
//!   short_prefix_len: 30
//!   short_prefix_min: 20
//!
//! report:
//!   version: 1
//!   sample_cap: 25
//!   snippet_chars: 160
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CanonicalConfig, ReportConfig, VerifyConfig};

/// Errors that can occur when loading a YAML configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for a verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParafpConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name, e.g. the book series it belongs to.
    #[serde(default)]
    pub name: Option<String>,

    /// Canonical layer configuration.
    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    /// Coverage report configuration.
    #[serde(default)]
    pub report: ReportYamlConfig,
}

impl ParafpConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ParafpConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Convert into the runtime configuration used by the pipeline.
    pub fn to_verify_config(&self) -> VerifyConfig {
        VerifyConfig {
            canonical: self.canonical.to_config(),
            report: self.report.to_config(),
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;
        self.canonical.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

impl Default for ParafpConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalYamlConfig::default(),
            report: ReportYamlConfig::default(),
        }
    }
}

/// Canonical layer YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_long_prefix_len")]
    pub long_prefix_len: usize,

    #[serde(default = "default_long_prefix_min")]
    pub long_prefix_min: usize,

    #[serde(default = "default_short_prefix_len")]
    pub short_prefix_len: usize,

    #[serde(default = "default_short_prefix_min")]
    pub short_prefix_min: usize,
}

impl CanonicalYamlConfig {
    fn to_config(&self) -> CanonicalConfig {
        CanonicalConfig {
            version: self.version,
            long_prefix_len: self.long_prefix_len,
            long_prefix_min: self.long_prefix_min,
            short_prefix_len: self.short_prefix_len,
            short_prefix_min: self.short_prefix_min,
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        let cfg = CanonicalConfig::default();
        Self {
            version: cfg.version,
            long_prefix_len: cfg.long_prefix_len,
            long_prefix_min: cfg.long_prefix_min,
            short_prefix_len: cfg.short_prefix_len,
            short_prefix_min: cfg.short_prefix_min,
        }
    }
}

/// Coverage report YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_sample_cap")]
    pub sample_cap: usize,

    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
}

impl ReportYamlConfig {
    fn to_config(&self) -> ReportConfig {
        ReportConfig {
            version: self.version,
            sample_cap: self.sample_cap,
            snippet_chars: self.snippet_chars,
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }
}

impl Default for ReportYamlConfig {
    fn default() -> Self {
        let cfg = ReportConfig::default();
        Self {
            version: cfg.version,
            sample_cap: cfg.sample_cap,
            snippet_chars: cfg.snippet_chars,
        }
    }
}

// Helper functions for serde defaults
fn default_version() -> u32 {
    1
}
fn default_long_prefix_len() -> usize {
    80
}
fn default_long_prefix_min() -> usize {
    30
}
fn default_short_prefix_len() -> usize {
    30
}
fn default_short_prefix_min() -> usize {
    20
}
fn default_sample_cap() -> usize {
    25
}
fn default_snippet_chars() -> usize {
    160
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
canonical:
  version: 1
  long_prefix_len: 60
report:
  sample_cap: 10
"#;
        let config = ParafpConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.canonical.long_prefix_len, 60);
        assert_eq!(config.report.sample_cap, 10);

        let verify = config.to_verify_config();
        assert_eq!(verify.canonical.long_prefix_len, 60);
        assert_eq!(verify.report.snippet_chars, 160);
    }

    #[test]
    fn default_config_matches_runtime_defaults() {
        let config = ParafpConfig::default();
        assert_eq!(config.to_verify_config(), VerifyConfig::default());
    }

    #[test]
    fn unsupported_version_rejected() {
        let result = ParafpConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(_))));
    }

    #[test]
    fn invalid_stage_config_rejected() {
        let yaml = r#"
version: "1.0"
canonical:
  version: 1
  long_prefix_len: 10
  long_prefix_min: 30
"#;
        let result = ParafpConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::Validation(_))));
    }
}
