//! Widget configuration and configuration errors.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default blur grace delay before an unconfirmed edit is discarded.
pub const DEFAULT_BLUR_GRACE_MS: u64 = 120;
/// Upper bound for the blur grace delay; longer delays read as UI lag.
pub const MAX_BLUR_GRACE_MS: u64 = 1_000;
/// Row text shown when no option matches the query.
pub const DEFAULT_EMPTY_TEXT: &str = "No matches";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Configuration or catalog loading failure.
pub enum ConfigError {
    /// The JSON payload could not be decoded.
    #[error("config parse failed: {0}")]
    Parse(String),
    /// The blur grace delay is zero or above [`MAX_BLUR_GRACE_MS`].
    #[error("blur grace delay must be within 1..={MAX_BLUR_GRACE_MS} ms, got {0} ms")]
    InvalidBlurDelay(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables for one searchable combobox.
pub struct ComboboxConfig {
    /// Delay between losing focus and discarding unconfirmed edits, in milliseconds.
    pub blur_grace_ms: u64,
    /// Input placeholder shown while the query is empty.
    pub placeholder: Option<String>,
    /// Row text shown when nothing matches.
    pub empty_text: String,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            placeholder: None,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
        }
    }
}

impl ComboboxConfig {
    /// Parses and validates a config from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidBlurDelay`] for an out-of-range delay.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBlurDelay`] when the delay is zero or too long.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blur_grace_ms == 0 || self.blur_grace_ms > MAX_BLUR_GRACE_MS {
            return Err(ConfigError::InvalidBlurDelay(self.blur_grace_ms));
        }
        Ok(())
    }

    /// Blur grace delay as a [`Duration`].
    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(
            ComboboxConfig::from_json("{}").expect("config"),
            ComboboxConfig::default()
        );
        assert_eq!(
            ComboboxConfig::default().blur_grace(),
            Duration::from_millis(120)
        );
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config =
            ComboboxConfig::from_json(r#"{ "blur_grace_ms": 200, "placeholder": "Pick an item" }"#)
                .expect("config");
        assert_eq!(config.blur_grace_ms, 200);
        assert_eq!(config.placeholder.as_deref(), Some("Pick an item"));
        assert_eq!(config.empty_text, DEFAULT_EMPTY_TEXT);
    }

    #[test]
    fn out_of_range_delays_are_rejected() {
        assert_eq!(
            ComboboxConfig::from_json(r#"{ "blur_grace_ms": 0 }"#),
            Err(ConfigError::InvalidBlurDelay(0))
        );
        assert_eq!(
            ComboboxConfig::from_json(r#"{ "blur_grace_ms": 5000 }"#),
            Err(ConfigError::InvalidBlurDelay(5000))
        );
        assert!(matches!(
            ComboboxConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
