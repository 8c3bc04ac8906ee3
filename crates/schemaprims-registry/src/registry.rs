use std::collections::HashMap;

use schemaprims_schema::Schema;
use schemaprims_value::Value;
use tracing::debug;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::validator::{decode_payload, parse_value, validate_value};

/// Name-keyed registry of compiled schemas.
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            schemas: HashMap::new(),
            config,
        }
    }

    /// Register a schema under `name` from its JSON literal form.
    ///
    /// Replaces any schema already registered under the same name.
    pub fn register(&mut self, name: &str, schema_json: &str) -> Result<()> {
        let schema = Schema::from_json_str(schema_json)
            .map_err(|err| RegistryError::CompileFailed(format!("{name}: {err}")))?;
        self.register_schema(name, schema);
        Ok(())
    }

    /// Register an already built schema under `name`.
    pub fn register_schema(&mut self, name: &str, schema: Schema) {
        debug!(name, kind = schema.kind().name(), "registered schema");
        self.schemas.insert(name.to_string(), schema);
    }

    /// Load from embedded `(name, literal)` pairs.
    pub fn from_embedded(schemas: &[(&str, &str)]) -> Result<Self> {
        let mut registry = Self::new();
        for (name, schema) in schemas {
            registry.register(name, schema)?;
        }
        Ok(registry)
    }

    /// Validate a JSON payload against the schema registered as `name`.
    pub fn validate(&self, name: &str, payload: &[u8]) -> Result<()> {
        match self.lookup(name)? {
            Some(schema) => {
                let subject = decode_payload(payload)?;
                validate_value(name, &subject, schema, &self.config)
            }
            None => Ok(()),
        }
    }

    /// Validate an in-memory value against the schema registered as `name`.
    pub fn validate_value(&self, name: &str, subject: &Value) -> Result<()> {
        match self.lookup(name)? {
            Some(schema) => validate_value(name, subject, schema, &self.config),
            None => Ok(()),
        }
    }

    /// Parse a JSON payload, returning the rebuilt value in JSON form.
    ///
    /// With no schema registered (and the permissive default) the decoded
    /// payload is returned as is.
    pub fn parse(&self, name: &str, payload: &[u8]) -> Result<serde_json::Value> {
        let subject = decode_payload(payload)?;
        match self.lookup(name)? {
            Some(schema) => Ok(parse_value(name, &subject, schema, &self.config)?.to_json()),
            None => Ok(subject.to_json()),
        }
    }

    /// Get the schema registered as `name`.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Check if a name has a registered schema.
    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Get registered schema names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn lookup(&self, name: &str) -> Result<Option<&Schema>> {
        match self.schemas.get(name) {
            Some(schema) => Ok(Some(schema)),
            None if self.config.fail_on_missing_schema => {
                Err(RegistryError::NoSchema(name.to_string()))
            }
            None => Ok(None),
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
