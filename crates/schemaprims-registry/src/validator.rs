use schemaprims_engine::{parse, validate, ValidationErrors};
use schemaprims_schema::Schema;
use schemaprims_value::Value;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};

pub(crate) fn decode_payload(payload: &[u8]) -> Result<Value> {
    let value: serde_json::Value = serde_json::from_slice(payload)?;
    Ok(Value::from(value))
}

pub(crate) fn validate_value(
    name: &str,
    subject: &Value,
    schema: &Schema,
    config: &RegistryConfig,
) -> Result<()> {
    validate(schema, subject)
        .map(|_| ())
        .map_err(|errors| validation_failed(name, &errors, config))
}

pub(crate) fn parse_value(
    name: &str,
    subject: &Value,
    schema: &Schema,
    config: &RegistryConfig,
) -> Result<Value> {
    parse(schema, subject).map_err(|errors| validation_failed(name, &errors, config))
}

fn validation_failed(
    name: &str,
    errors: &ValidationErrors<'_, '_>,
    config: &RegistryConfig,
) -> RegistryError {
    let mut rendered = errors.iter().take(config.max_reported_errors.max(1));
    let mut message = rendered
        .next()
        .map(ToString::to_string)
        .unwrap_or_default();
    for err in rendered {
        message.push_str("; ");
        message.push_str(&err.to_string());
    }

    RegistryError::ValidationFailed {
        name: name.to_string(),
        count: errors.len(),
        message,
    }
}
