//! Immutable schema trees for schemaprims.
//!
//! A [`Schema`] describes the accepted shape of a subject value: primitives,
//! literals, arrays, tuples, objects, records and unions. Every node carries
//! the shared `optional`, `nullable` and `description` modifiers.
//!
//! Schemas come from two places:
//! - schema literals, the serde form (`{"type": "string", "minLength": 1}`)
//! - the fluent builder (`Schema::string().min_length(1).build()`)
//!
//! Both validate the tree while constructing it. Once built, a schema is
//! never mutated.

pub mod brand;
pub mod builder;
pub mod error;
pub mod literal;
pub mod model;

pub use brand::Brand;
pub use builder::{
    ArrayBuilder, BigintBuilder, BooleanBuilder, LiteralBuilder, NumberBuilder, ObjectBuilder,
    RecordBuilder, StringBuilder, TupleBuilder, UnionBuilder,
};
pub use error::{Result, SchemaError};
pub use model::{
    ArraySchema, BigintSchema, BooleanSchema, LiteralSchema, LiteralValue, NumberSchema,
    ObjectSchema, RecordSchema, Schema, SchemaKind, StringSchema, TupleSchema, UnionSchema,
};
