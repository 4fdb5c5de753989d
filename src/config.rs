//! Engine configuration
//!
//! All fields have defaults, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! search_radius = 2
//! seed = 42
//! ```

use std::path::Path;

use derive_more::{Display, Error, From};
use serde::Deserialize;

/// Error loading an [`EngineConfig`]
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("failed to read config: {_0}")]
    Io(std::io::Error),
    #[display("invalid config: {_0}")]
    Parse(toml::de::Error),
}

/// Tuning knobs for [`crate::AIEngine`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Half-width of the square around each stone that candidates come from
    pub search_radius: i32,
    /// Candidates kept for the maximin lookahead
    pub maximin_width: usize,
    /// Exclusive upper bound of the random tiebreak in the fast fallback
    pub tiebreak_range: i32,
    /// Use the maximin fallback instead of the fast one by default
    pub deep_search: bool,
    /// Fixed RNG seed; entropy when unset
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_radius: 3,
            maximin_width: 10,
            tiebreak_range: 4,
            deep_search: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Same config with a fixed seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.search_radius, 3);
        assert_eq!(config.maximin_width, 10);
        assert_eq!(config.tiebreak_range, 4);
        assert!(config.deep_search);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str("search_radius = 2\nseed = 42\n").unwrap();
        assert_eq!(config.search_radius, 2);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.maximin_width, 10);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = EngineConfig::from_toml_str("depth = 4").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/omok.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_with_seed() {
        assert_eq!(EngineConfig::default().with_seed(7).seed, Some(7));
    }
}
