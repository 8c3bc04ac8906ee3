use proptest::prelude::*;
use schemaprims_engine::{guard, parse, validate};
use schemaprims_schema::Schema;
use schemaprims_value::Value;
use serde_json::json;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Absent),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-100.0f64..100.0).prop_map(Value::Number),
        "[a-c]{0,3}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(("[a-d]", inner), 0..4)
                .prop_map(|entries| entries.into_iter().collect::<Value>()),
        ]
    })
}

fn fixtures() -> Vec<Schema> {
    [
        json!({ "type": "string", "maxLength": 2, "optional": true }),
        json!({ "type": "number", "min": 0, "nullable": true }),
        json!({ "type": "array", "of": { "type": "boolean" }, "maxLength": 2 }),
        json!({ "type": "tuple", "of": [{ "type": "string" }, { "type": "number", "optional": true }] }),
        json!({
            "type": "object",
            "of": {
                "a": { "type": "string", "optional": true },
                "b": { "type": "union", "of": [{ "type": "number" }, { "type": "boolean" }] }
            }
        }),
        json!({ "type": "record", "of": { "type": "union", "of": [
            { "type": "number" },
            { "type": "array", "of": { "type": "string", "optional": true } },
            { "type": "string", "optional": true }
        ] } }),
        json!({
            "type": "union",
            "of": [
                { "type": "record", "of": { "type": "boolean", "optional": true }, "key": { "type": "string", "maxLength": 1 } },
                { "type": "array", "of": { "type": "record", "of": { "type": "string", "optional": true } } }
            ]
        }),
    ]
    .into_iter()
    .map(|literal| Schema::from_json(literal).unwrap())
    .collect()
}

proptest! {
    #[test]
    fn validate_parse_and_guard_agree(value in arb_value()) {
        for schema in fixtures() {
            let validated = validate(&schema, &value);
            let parsed = parse(&schema, &value);

            prop_assert_eq!(validated.is_ok(), parsed.is_ok());
            prop_assert_eq!(guard(&schema, &value), validated.is_ok());
            if let (Err(v), Err(p)) = (&validated, &parsed) {
                prop_assert_eq!(v, p);
            }
        }
    }

    #[test]
    fn validate_returns_the_subject_itself(value in arb_value()) {
        for schema in fixtures() {
            if let Ok(data) = validate(&schema, &value) {
                prop_assert!(std::ptr::eq(data, &value));
                prop_assert!(validate(&schema, data).is_ok());
            }
        }
    }

    #[test]
    fn parse_is_a_fixed_point(value in arb_value()) {
        for schema in fixtures() {
            if let Ok(parsed) = parse(&schema, &value) {
                let reparsed = parse(&schema, &parsed);
                prop_assert_eq!(reparsed.as_ref().ok(), Some(&parsed));
            }
        }
    }

    #[test]
    fn errors_are_never_empty(value in arb_value()) {
        for schema in fixtures() {
            if let Err(errors) = validate(&schema, &value) {
                prop_assert!(!errors.is_empty());
            }
        }
    }
}
