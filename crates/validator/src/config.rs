//! Validator configuration

use serde::{Deserialize, Serialize};

use crate::validators::LengthMode;

/// Validator configuration
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use nullable_validator::{LengthMode, ValidatorConfig};
///
/// let config = ValidatorConfig::from_json(r#"{ "length_mode": "bytes" }"#).unwrap();
/// assert!(config.required_struct);
/// assert_eq!(config.length_mode, LengthMode::Bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Apply `required` to struct-typed fields (fails when the struct is zero)
    pub required_struct: bool,

    /// How `len`/`min`/`gt`/... measure strings
    pub length_mode: LengthMode,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            required_struct: true,
            length_mode: LengthMode::Chars,
        }
    }
}

impl ValidatorConfig {
    /// Parses a configuration from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets whether `required` applies to struct-typed fields.
    #[must_use]
    pub fn with_required_struct(mut self, enabled: bool) -> Self {
        self.required_struct = enabled;
        self
    }

    /// Sets the string length measure.
    #[must_use]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }
}
