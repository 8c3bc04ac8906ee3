//! Leaf checks for one primitive value against one primitive schema kind.
//!
//! The type check always runs first; a range check only runs once the type
//! is known to be right. Brands and descriptions are never looked at.

use schemaprims_schema::{LiteralValue, NumberSchema, SchemaKind, StringSchema};
use schemaprims_value::Value;

use crate::error::ErrorCode;

/// Check a subject against a primitive or literal schema kind.
///
/// Compound kinds are dispatched by the engine and never verify as leaves;
/// passing one here yields `InvalidType`.
pub fn verify(kind: &SchemaKind, subject: &Value) -> Result<(), ErrorCode> {
    match (kind, subject) {
        (SchemaKind::String(schema), Value::String(text)) => verify_string(schema, text),
        (SchemaKind::Number(schema), Value::Number(n)) if n.is_finite() => {
            verify_number(schema, *n)
        }
        (SchemaKind::Bigint(_), Value::BigInt(_)) => Ok(()),
        (SchemaKind::Boolean(_), Value::Bool(_)) => Ok(()),
        (SchemaKind::Literal(schema), subject) if literal_matches(schema.value(), subject) => Ok(()),
        _ => Err(ErrorCode::InvalidType),
    }
}

fn verify_string(schema: &StringSchema, text: &str) -> Result<(), ErrorCode> {
    let length = text.chars().count();
    if within(length, schema.min_length(), schema.max_length()) {
        Ok(())
    } else {
        Err(ErrorCode::InvalidRange)
    }
}

fn verify_number(schema: &NumberSchema, n: f64) -> Result<(), ErrorCode> {
    let above_min = schema.min().is_none_or(|min| n >= min);
    let below_max = schema.max().is_none_or(|max| n <= max);
    if above_min && below_max {
        Ok(())
    } else {
        Err(ErrorCode::InvalidRange)
    }
}

fn literal_matches(expected: &LiteralValue, subject: &Value) -> bool {
    match (expected, subject) {
        (LiteralValue::String(expected), Value::String(actual)) => expected == actual,
        (LiteralValue::Number(expected), Value::Number(actual)) => expected == actual,
        _ => false,
    }
}

/// Check a record key against its key schema kind without allocating a value
/// for it.
pub(crate) fn verify_key(kind: &SchemaKind, key: &str) -> Result<(), ErrorCode> {
    match kind {
        SchemaKind::String(schema) => verify_string(schema, key),
        _ => Err(ErrorCode::InvalidType),
    }
}

/// Inclusive length bounds, shared with array checks.
pub(crate) fn within(length: usize, min: Option<usize>, max: Option<usize>) -> bool {
    min.is_none_or(|min| length >= min) && max.is_none_or(|max| length <= max)
}
