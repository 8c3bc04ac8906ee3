/// Errors that can occur while constructing a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A modifier, bound, brand or record key was assigned twice.
    #[error("modifier `{modifier}` is already set on this schema")]
    ModifierReassigned { modifier: &'static str },

    /// An object schema declared the same field twice.
    #[error("object field `{0}` is declared more than once")]
    DuplicateField(String),

    /// A union schema has no alternatives.
    #[error("union schema must have at least one alternative")]
    EmptyUnion,

    /// A record key schema is not a string schema.
    #[error("record key schema must be a string schema, got {0}")]
    RecordKeyNotString(&'static str),

    /// The schema literal is not valid JSON or does not describe a schema.
    #[error("invalid schema literal: {0}")]
    Literal(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
