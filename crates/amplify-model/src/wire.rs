//! JSON wire format.
//!
//! Shapes serialize with `serde`: wire names are the field names, absent
//! fields are omitted, and present-but-empty values are kept. Timestamps travel
//! as epoch seconds. [`JsonCodec`] adds constraint handling per
//! [`ValidationMode`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constraints::log_violations;
use crate::error::{ModelError, ModelResult};
use crate::model::Shape;
use crate::settings::{Settings, ValidationMode};

/// Serde adapter for optional timestamps as epoch seconds.
///
/// Whole seconds are written as integers, sub-second precision as a fractional
/// number. Both forms are accepted on input.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) if time.timestamp_subsec_millis() == 0 => {
                serializer.serialize_i64(time.timestamp())
            }
            #[allow(clippy::cast_precision_loss)]
            Some(time) => serializer.serialize_f64(time.timestamp_millis() as f64 / 1000.0),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if !seconds.is_finite() {
            return Err(D::Error::custom(format!("invalid epoch seconds: {seconds}")));
        }
        #[allow(clippy::cast_possible_truncation)]
        let millis = (seconds * 1000.0).round() as i64;
        DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("epoch seconds out of range: {seconds}")))
    }
}

/// Encodes and decodes shapes as JSON, applying the configured validation mode.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    settings: Settings,
}

impl JsonCodec {
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn encode<S: Shape + Serialize>(&self, shape: &S) -> ModelResult<String> {
        self.enforce(shape)?;
        let json = if self.settings.effective_pretty_json() {
            serde_json::to_string_pretty(shape)?
        } else {
            serde_json::to_string(shape)?
        };
        Ok(json)
    }

    pub fn to_value<S: Shape + Serialize>(&self, shape: &S) -> ModelResult<serde_json::Value> {
        self.enforce(shape)?;
        Ok(serde_json::to_value(shape)?)
    }

    pub fn decode<S: Shape + DeserializeOwned>(&self, json: &str) -> ModelResult<S> {
        let shape: S = serde_json::from_str(json)?;
        tracing::debug!(shape = shape.shape_name(), "Decoded shape");
        self.enforce(&shape)?;
        Ok(shape)
    }

    pub fn from_value<S: Shape + DeserializeOwned>(&self, value: serde_json::Value) -> ModelResult<S> {
        let shape: S = serde_json::from_value(value)?;
        self.enforce(&shape)?;
        Ok(shape)
    }

    /// Run the constraint check. Strict mode fails on any violation; advisory
    /// mode logs them and succeeds.
    pub fn enforce<S: Shape + ?Sized>(&self, shape: &S) -> ModelResult<()> {
        let violations = shape.constraint_violations();
        if violations.is_empty() {
            return Ok(());
        }
        match self.settings.effective_validation_mode() {
            ValidationMode::Strict => Err(ModelError::ConstraintViolations {
                shape: shape.shape_name(),
                violations,
            }),
            ValidationMode::Advisory => {
                log_violations(&violations);
                Ok(())
            }
        }
    }
}
