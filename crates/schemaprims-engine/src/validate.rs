use schemaprims_schema::Schema;
use schemaprims_value::Value;
use tracing::debug;

use crate::engine::visit;
use crate::error::{ErrorPath, Outcome, ValidationErrors};
use crate::policy::Share;

/// Check `subject` against `schema`.
///
/// On success the returned reference is `subject` itself; nested values are
/// the input's own values. Nothing is copied and the subject is never
/// modified. On failure every error beneath the root is returned.
pub fn validate<'s, 'v>(schema: &'s Schema, subject: &'v Value) -> Outcome<'s, 'v, &'v Value> {
    validate_at(schema, subject, ErrorPath::root())
}

/// Like [`validate`], with error paths prefixed by `path`.
pub fn validate_at<'s, 'v>(
    schema: &'s Schema,
    subject: &'v Value,
    mut path: ErrorPath,
) -> Outcome<'s, 'v, &'v Value> {
    visit::<Share>(schema, subject, &mut path).map_err(|errors| {
        debug!(
            schema = schema.kind().name(),
            errors = errors.len(),
            "subject failed validation"
        );
        ValidationErrors::new(errors)
    })
}

/// Returns true iff `subject` validates against `schema`.
pub fn guard(schema: &Schema, subject: &Value) -> bool {
    validate(schema, subject).is_ok()
}
