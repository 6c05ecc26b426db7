//! Settings for the model layer.
//!
//! These control how the JSON codec treats advisory constraints and how it
//! formats output. All fields are optional to support partial updates and
//! graceful defaults.

use serde::{Deserialize, Serialize};

/// Default `maxResults` applied to list requests that leave it absent.
pub const DEFAULT_PAGE_SIZE: i32 = 50;

/// Largest page size the service accepts.
pub const MAX_PAGE_SIZE: i32 = 100;

/// How constraint violations are treated when shapes cross the codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Violations are logged and the value proceeds unchanged.
    #[default]
    Advisory,
    /// Violations fail encoding and decoding.
    Strict,
}

impl ValidationMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Strict => "strict",
        }
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ValidationMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advisory" => Ok(Self::Advisory),
            "strict" => Ok(Self::Strict),
            other => Err(SettingsError::InvalidValidationMode(other.to_string())),
        }
    }
}

/// Model layer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Constraint handling at the codec boundary.
    pub validation_mode: Option<ValidationMode>,

    /// Whether encoded JSON is pretty-printed.
    pub pretty_json: Option<bool>,

    /// `maxResults` for list requests that do not set one (1-100).
    pub default_page_size: Option<i32>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            validation_mode: Some(ValidationMode::Advisory),
            pretty_json: Some(false),
            default_page_size: Some(DEFAULT_PAGE_SIZE),
        }
    }

    #[must_use]
    pub const fn effective_validation_mode(&self) -> ValidationMode {
        match self.validation_mode {
            Some(mode) => mode,
            None => ValidationMode::Advisory,
        }
    }

    #[must_use]
    pub const fn effective_pretty_json(&self) -> bool {
        matches!(self.pretty_json, Some(true))
    }

    #[must_use]
    pub const fn effective_page_size(&self) -> i32 {
        match self.default_page_size {
            Some(size) => size,
            None => DEFAULT_PAGE_SIZE,
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Default page size must be between 1 and 100, got {0}")]
    InvalidPageSize(i32),

    #[error("Validation mode must be 'advisory' or 'strict', got '{0}'")]
    InvalidValidationMode(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(size) = settings.default_page_size {
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(SettingsError::InvalidPageSize(size));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.validation_mode, Some(ValidationMode::Advisory));
        assert_eq!(settings.pretty_json, Some(false));
        assert_eq!(settings.default_page_size, Some(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_effective_values_fall_back() {
        let settings = Settings::default();
        assert_eq!(settings.effective_validation_mode(), ValidationMode::Advisory);
        assert!(!settings.effective_pretty_json());
        assert_eq!(settings.effective_page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_validate_settings_valid() {
        assert!(validate_settings(&Settings::with_defaults()).is_ok());
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_validate_page_size_out_of_range() {
        let settings = Settings {
            default_page_size: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidPageSize(0))
        ));

        let settings = Settings {
            default_page_size: Some(101),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidPageSize(101))
        ));
    }

    #[test]
    fn test_validation_mode_parse() {
        assert_eq!("Strict".parse::<ValidationMode>().ok(), Some(ValidationMode::Strict));
        assert_eq!(" advisory ".parse::<ValidationMode>().ok(), Some(ValidationMode::Advisory));
        assert!(matches!(
            "loose".parse::<ValidationMode>(),
            Err(SettingsError::InvalidValidationMode(ref s)) if s == "loose"
        ));
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: Settings = serde_json::from_str(r#"{"validation_mode":"strict"}"#).unwrap();
        assert_eq!(settings.validation_mode, Some(ValidationMode::Strict));
        assert_eq!(settings.pretty_json, None);
    }
}
