//! Dynamic subject values for schemaprims.
//!
//! A [`Value`] is JSON plus two extras the engine needs:
//! - [`Value::Absent`], a sentinel distinct from `null` meaning "no value here"
//! - [`Value::BigInt`], an arbitrary-precision integer
//!
//! Mappings keep insertion order, so error reports and parsed output follow
//! the order keys were written in.

pub mod bigint;
pub mod error;
pub mod value;

pub use bigint::BigInt;
pub use error::{Result, ValueError};
pub use value::{Map, Value, ValueKind, ABSENT};
