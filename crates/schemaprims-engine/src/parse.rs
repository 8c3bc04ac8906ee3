use schemaprims_schema::Schema;
use schemaprims_value::Value;
use tracing::debug;

use crate::engine::visit;
use crate::error::{ErrorPath, Outcome, ValidationErrors};
use crate::policy::Rebuild;

/// Check `subject` against `schema` and rebuild it.
///
/// Runs the same checks as [`validate`](crate::validate) but returns a fresh
/// value: every sequence and mapping is newly allocated. Objects keep exactly
/// the declared fields whose key was present in the input, absent-valued ones
/// included. Records drop entries whose parsed value is absent.
pub fn parse<'s, 'v>(schema: &'s Schema, subject: &'v Value) -> Outcome<'s, 'v, Value> {
    parse_at(schema, subject, ErrorPath::root())
}

/// Like [`parse`], with error paths prefixed by `path`.
pub fn parse_at<'s, 'v>(
    schema: &'s Schema,
    subject: &'v Value,
    mut path: ErrorPath,
) -> Outcome<'s, 'v, Value> {
    visit::<Rebuild>(schema, subject, &mut path).map_err(|errors| {
        debug!(
            schema = schema.kind().name(),
            errors = errors.len(),
            "subject failed parsing"
        );
        ValidationErrors::new(errors)
    })
}

#[cfg(test)]
mod tests {
    use schemaprims_value::Map;
    use serde_json::json;

    use super::*;

    fn schema(literal: serde_json::Value) -> Schema {
        Schema::from_json(literal).unwrap()
    }

    #[test]
    fn leaves_parse_to_equal_values() {
        let schema = schema(json!({ "type": "string", "minLength": 1 }));
        assert_eq!(parse(&schema, &Value::from("x")).unwrap(), Value::from("x"));
        assert!(parse(&schema, &Value::from("")).is_err());
    }

    #[test]
    fn object_drops_nothing_declared_but_adds_nothing_missing() {
        let schema = schema(json!({
            "type": "object",
            "of": {
                "a": { "type": "string", "optional": true },
                "b": { "type": "string", "optional": true }
            }
        }));
        let mut input = Map::new();
        input.insert("a".to_string(), Value::Absent);
        let subject = Value::Mapping(input);

        let parsed = parse(&schema, &subject).unwrap();
        let map = parsed.as_mapping().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&Value::Absent));
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn optional_absent_root_parses_to_absent() {
        let schema = schema(json!({ "type": "array", "of": { "type": "string" }, "optional": true }));
        assert_eq!(parse(&schema, &Value::Absent).unwrap(), Value::Absent);
    }
}
