//! Named schema registry for validating serialized payloads at a boundary.
//!
//! Register schema literals (or built schemas) once under a name, then
//! validate or parse JSON payloads by that name. Engine rejections are
//! flattened into a [`RegistryError::ValidationFailed`] message.

pub mod config;
pub mod error;
pub mod registry;
pub mod validator;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::SchemaRegistry;
