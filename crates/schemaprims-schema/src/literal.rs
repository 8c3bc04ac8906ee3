//! Schema literals: the serde form of a [`Schema`].
//!
//! ```text
//! {
//!   "type": "object",
//!   "of": {
//!     "id":   { "type": "string", "minLength": 1, "brand": ["id", "user"] },
//!     "tags": { "type": "array", "of": { "type": "string" }, "optional": true }
//!   },
//!   "nullable": true,
//!   "description": "a user"
//! }
//! ```
//!
//! Every nested literal goes through the same structural checks as the
//! builder, so an empty union or a non-string record key is rejected no
//! matter how deep it sits. Keys a kind does not define are rejected too.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::model::{Schema, SchemaKind};

#[derive(Serialize, Deserialize)]
pub(crate) struct SchemaLiteral {
    #[serde(flatten)]
    kind: SchemaKind,
    #[serde(default, skip_serializing_if = "is_false")]
    optional: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl TryFrom<SchemaLiteral> for Schema {
    type Error = SchemaError;

    fn try_from(literal: SchemaLiteral) -> Result<Self> {
        Schema::from_parts(
            literal.kind,
            literal.optional,
            literal.nullable,
            literal.description,
        )
    }
}

impl From<Schema> for SchemaLiteral {
    fn from(schema: Schema) -> Self {
        Self {
            kind: schema.kind,
            optional: schema.optional,
            nullable: schema.nullable,
            description: schema.description,
        }
    }
}

impl Schema {
    /// Build a schema from literal JSON text.
    pub fn from_json_str(literal: &str) -> Result<Self> {
        Ok(serde_json::from_str(literal)?)
    }

    /// Build a schema from a literal JSON value.
    pub fn from_json(literal: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(literal)?)
    }

    /// Render this schema back to its literal form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
