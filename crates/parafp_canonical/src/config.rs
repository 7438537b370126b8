use serde::{Deserialize, Serialize};

use crate::CanonicalError;

/// Configuration for the canonical text layer.
///
/// `version` is a monotonically increasing schema version; any behavior
/// change that can affect canonical text or fingerprint keys must be
/// accompanied by a new version.
///
/// The four prefix boundaries control the legacy fallback keys. The
/// defaults (80/30 prefix lengths, 30/20 minimum lengths) reproduce the
/// historical verification behavior; they are policy values and may be
/// tuned per book series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalConfig {
    /// Semantic version of the canonical configuration.
    pub version: u32,
    /// Character length of the long legacy prefix key.
    pub long_prefix_len: usize,
    /// Minimum canonical length before a long prefix key is emitted.
    pub long_prefix_min: usize,
    /// Character length of the short legacy prefix key.
    pub short_prefix_len: usize,
    /// Minimum canonical length before a short prefix key is emitted.
    pub short_prefix_min: usize,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            version: 1,
            long_prefix_len: 80,
            long_prefix_min: 30,
            short_prefix_len: 30,
            short_prefix_min: 20,
        }
    }
}

impl CanonicalConfig {
    /// Validate the configuration before a run.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.long_prefix_len == 0 || self.short_prefix_len == 0 {
            return Err(CanonicalError::InvalidConfig(
                "prefix lengths must be >= 1".into(),
            ));
        }
        if self.long_prefix_min > self.long_prefix_len {
            return Err(CanonicalError::InvalidConfig(
                "long_prefix_min must not exceed long_prefix_len".into(),
            ));
        }
        if self.short_prefix_min > self.short_prefix_len {
            return Err(CanonicalError::InvalidConfig(
                "short_prefix_min must not exceed short_prefix_len".into(),
            ));
        }
        Ok(())
    }
}
