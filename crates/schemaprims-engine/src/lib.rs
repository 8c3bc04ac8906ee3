//! Recursive validation and parsing of dynamic values against schema trees.
//!
//! Two entry points share one per-node dispatch core:
//! - [`validate`] checks a subject and hands back the very same reference on
//!   success. Nothing is allocated or copied.
//! - [`parse`] runs the same checks and rebuilds every container, dropping
//!   what the schema does not keep.
//!
//! Failures are never short-circuited across siblings: every field, element
//! and entry is checked and all errors come back together, each one carrying
//! the path to the failure site, the rejecting schema fragment and the
//! rejected value.
//!
//! [`guard`] is the boolean form of [`validate`].

mod engine;
mod policy;

pub mod error;
pub mod parse;
pub mod validate;
pub mod verifier;

pub use error::{ErrorCode, ErrorPath, Outcome, PathSegment, ValidationError, ValidationErrors};
pub use parse::{parse, parse_at};
pub use validate::{guard, validate, validate_at};
pub use verifier::verify;
