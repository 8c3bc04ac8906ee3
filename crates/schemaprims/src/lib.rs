//! Runtime schema validation and parsing for dynamic values.
//!
//! schemaprims checks untrusted, dynamically shaped data against a schema tree
//! and reports every mismatch with its path, the rejecting schema fragment and
//! the offending value.
//!
//! # Crate Structure
//!
//! - [`value`]: the dynamic value model being checked
//! - [`schema`]: immutable schema trees, their builders and JSON literal form
//! - [`engine`]: `validate`, `parse` and `guard`
//! - [`registry`]: named schemas for serialized payloads (behind `registry` feature)
//!
//! # Example
//!
//! ```
//! use schemaprims::{validate, Schema, Value};
//!
//! let schema = Schema::object()
//!     .field("name", Schema::string().min_length(1).build().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let good: Value = serde_json::json!({ "name": "ada" }).into();
//! assert!(validate(&schema, &good).is_ok());
//!
//! let bad: Value = serde_json::json!({ "name": "" }).into();
//! let errors = validate(&schema, &bad).unwrap_err();
//! assert_eq!(errors.errors()[0].path.to_string(), "/name");
//! ```

/// Re-export value types.
pub mod value {
    pub use schemaprims_value::*;
}

/// Re-export schema types.
pub mod schema {
    pub use schemaprims_schema::*;
}

/// Re-export engine entry points and error types.
pub mod engine {
    pub use schemaprims_engine::*;
}

/// Re-export registry types (requires `registry` feature).
#[cfg(feature = "registry")]
pub mod registry {
    pub use schemaprims_registry::*;
}

pub use schemaprims_engine::{guard, parse, validate, ErrorCode, ValidationError, ValidationErrors};
pub use schemaprims_schema::Schema;
pub use schemaprims_value::Value;
