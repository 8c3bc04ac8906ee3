//! Validate JSON payloads against named schemas.
//!
//! Run with:
//!   cargo run --example validate-payload -- order '{"id":"A-1","qty":2}'
//!
//! With no arguments a few built-in payloads are checked.

use schemaprims::registry::{RegistryError, SchemaRegistry};

const ORDER_SCHEMA: &str = r#"{
    "type": "object",
    "of": {
        "id": { "type": "string", "minLength": 1 },
        "qty": { "type": "number", "min": 1 },
        "note": { "type": "string", "optional": true, "nullable": true }
    }
}"#;

const TAGS_SCHEMA: &str = r#"{
    "type": "record",
    "of": { "type": "union", "of": [{ "type": "string" }, { "type": "boolean" }] },
    "key": { "type": "string", "maxLength": 16 }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry =
        SchemaRegistry::from_embedded(&[("order", ORDER_SCHEMA), ("tags", TAGS_SCHEMA)])?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let checks: Vec<(String, String)> = match args.as_slice() {
        [name, payload] => vec![(name.clone(), payload.clone())],
        _ => vec![
            ("order".into(), r#"{"id":"A-1","qty":2}"#.into()),
            ("order".into(), r#"{"id":"","qty":0,"extra":1}"#.into()),
            ("tags".into(), r#"{"env":"prod","canary":true}"#.into()),
            ("tags".into(), r#"{"env":3}"#.into()),
        ],
    };

    for (name, payload) in checks {
        match registry.parse(&name, payload.as_bytes()) {
            Ok(parsed) => println!("{name}: ok {parsed}"),
            Err(RegistryError::ValidationFailed { count, message, .. }) => {
                println!("{name}: {count} error(s): {message}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
