//! Schema validation
//!
//! Checks that a parsed configuration carries every field its [`Schema`]
//! requires, with the required type. Validation stops at the first
//! violation found in schema order. It never fills defaults and never
//! strips keys the schema does not mention.

use serde_json::Value;

use crate::config::schema::{ConfigObject, Schema, ValueType};
use crate::error::SchemaError;

/// Stateless schema validator.
///
/// Usable on its own; the loader runs it once per cache miss.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    /// Validates a parsed JSON value and returns it as a configuration object.
    ///
    /// The object is passed through unchanged on success, and an info event
    /// naming the schema is emitted. Failures are returned, not logged.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotAnObject`] if `config` is not a JSON object,
    /// or the first violation reported by [`SchemaValidator::check`].
    pub fn validate(schema: &Schema, config: Value) -> Result<ConfigObject, SchemaError> {
        let Value::Object(map) = config else {
            return Err(SchemaError::NotAnObject {
                actual: ValueType::of(&config),
            });
        };

        Self::check(schema, &map)?;
        tracing::info!(%schema, "configuration validated successfully against schema");
        Ok(map)
    }

    /// Checks a configuration object against a schema without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptySchema`] for a schema with no fields,
    /// [`SchemaError::MissingKey`] for the first absent field, or
    /// [`SchemaError::TypeMismatch`] for the first field of the wrong type.
    pub fn check(schema: &Schema, config: &ConfigObject) -> Result<(), SchemaError> {
        if schema.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        for (key, expected) in schema.iter() {
            let Some(value) = config.get(key) else {
                return Err(SchemaError::MissingKey {
                    key: key.to_string(),
                });
            };
            if !expected.matches(value) {
                return Err(SchemaError::TypeMismatch {
                    key: key.to_string(),
                    expected,
                    actual: ValueType::of(value),
                });
            }
        }

        Ok(())
    }
}
