/// Controls registry lookup and reporting behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, unknown schema names return `RegistryError::NoSchema`.
    pub fail_on_missing_schema: bool,
    /// Maximum number of individual errors rendered into a failure message.
    pub max_reported_errors: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            fail_on_missing_schema: false,
            max_reported_errors: 4,
        }
    }
}
