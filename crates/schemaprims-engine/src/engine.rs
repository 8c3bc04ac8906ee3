use std::borrow::Cow;

use schemaprims_schema::{
    ArraySchema, ObjectSchema, RecordSchema, Schema, SchemaKind, TupleSchema, UnionSchema,
};
use schemaprims_value::{Value, ABSENT};
use tracing::trace;

use crate::error::{ErrorCode, ErrorPath, PathSegment, ValidationError};
use crate::policy::Materialize;
use crate::verifier::{verify, verify_key, within};

/// Result of visiting one node: the materialized value, or every error found
/// beneath it in traversal order.
pub(crate) type Visit<'s, 'v, T> = Result<T, Vec<ValidationError<'s, 'v>>>;

/// Visit `subject` against `schema`. `path` is the location of `subject`; it
/// is restored before returning.
pub(crate) fn visit<'s, 'v, M: Materialize<'v>>(
    schema: &'s Schema,
    subject: &'v Value,
    path: &mut ErrorPath,
) -> Visit<'s, 'v, M::Output> {
    if schema.is_optional() && subject.is_absent() {
        return Ok(M::leaf(subject));
    }
    if schema.is_nullable() && subject.is_null() {
        return Ok(M::leaf(subject));
    }

    match schema.kind() {
        SchemaKind::Array(array) => visit_array::<M>(schema, array, subject, path),
        SchemaKind::Tuple(tuple) => visit_tuple::<M>(schema, tuple, subject, path),
        SchemaKind::Object(object) => visit_object::<M>(schema, object, subject, path),
        SchemaKind::Record(record) => visit_record::<M>(schema, record, subject, path),
        SchemaKind::Union(union) => visit_union::<M>(schema, union, subject, path),
        leaf => match verify(leaf, subject) {
            Ok(()) => Ok(M::leaf(subject)),
            Err(code) => Err(vec![reject(code, path, schema, subject)]),
        },
    }
}

fn reject<'s, 'v>(
    code: ErrorCode,
    path: &ErrorPath,
    schema: &'s Schema,
    subject: &'v Value,
) -> ValidationError<'s, 'v> {
    ValidationError {
        code,
        path: path.clone(),
        schema,
        subject: Cow::Borrowed(subject),
    }
}

fn visit_array<'s, 'v, M: Materialize<'v>>(
    schema: &'s Schema,
    array: &'s ArraySchema,
    subject: &'v Value,
    path: &mut ErrorPath,
) -> Visit<'s, 'v, M::Output> {
    let Value::Sequence(elements) = subject else {
        return Err(vec![reject(ErrorCode::InvalidType, path, schema, subject)]);
    };

    let mut errors = Vec::new();
    let mut items = M::items(elements.len());
    for (index, element) in elements.iter().enumerate() {
        path.push(PathSegment::Index(index));
        let result = visit::<M>(array.element(), element, path);
        path.pop();

        match result {
            Ok(item) => M::push_item(&mut items, item),
            Err(mut nested) => errors.append(&mut nested),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    if !within(elements.len(), array.min_length(), array.max_length()) {
        return Err(vec![reject(ErrorCode::InvalidRange, path, schema, subject)]);
    }
    Ok(M::sequence(subject, items))
}

fn visit_tuple<'s, 'v, M: Materialize<'v>>(
    schema: &'s Schema,
    tuple: &'s TupleSchema,
    subject: &'v Value,
    path: &mut ErrorPath,
) -> Visit<'s, 'v, M::Output> {
    let positions = tuple.positions();
    let elements = match subject {
        Value::Sequence(elements) if elements.len() == positions.len() => elements,
        _ => return Err(vec![reject(ErrorCode::InvalidType, path, schema, subject)]),
    };

    let mut errors = Vec::new();
    let mut items = M::items(elements.len());
    for (index, (position, element)) in positions.iter().zip(elements).enumerate() {
        path.push(PathSegment::Index(index));
        let result = visit::<M>(position, element, path);
        path.pop();

        match result {
            Ok(item) => M::push_item(&mut items, item),
            Err(mut nested) => errors.append(&mut nested),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(M::sequence(subject, items))
}

fn visit_object<'s, 'v, M: Materialize<'v>>(
    schema: &'s Schema,
    object: &'s ObjectSchema,
    subject: &'v Value,
    path: &mut ErrorPath,
) -> Visit<'s, 'v, M::Output> {
    let Value::Mapping(map) = subject else {
        return Err(vec![reject(ErrorCode::InvalidType, path, schema, subject)]);
    };

    let mut errors = Vec::new();
    let mut entries = M::entries(object.fields().len());
    for (name, field) in object.fields() {
        let present = map.get(name);

        path.push(PathSegment::Key(name.clone()));
        let result = visit::<M>(field, present.unwrap_or(&ABSENT), path);
        path.pop();

        match result {
            Ok(value) if present.is_some() => M::field(&mut entries, name, value),
            Ok(_) => {}
            Err(mut nested) => errors.append(&mut nested),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    if map.keys().any(|key| !object.declares(key)) {
        return Err(vec![reject(ErrorCode::InvalidType, path, schema, subject)]);
    }
    Ok(M::mapping(subject, entries))
}

fn visit_record<'s, 'v, M: Materialize<'v>>(
    schema: &'s Schema,
    record: &'s RecordSchema,
    subject: &'v Value,
    path: &mut ErrorPath,
) -> Visit<'s, 'v, M::Output> {
    let Value::Mapping(map) = subject else {
        return Err(vec![reject(ErrorCode::InvalidType, path, schema, subject)]);
    };

    let mut errors = Vec::new();
    let mut entries = M::entries(map.len());
    for (key, value) in map {
        path.push(PathSegment::Key(key.clone()));

        if let Some(key_schema) = record.key() {
            if let Err(code) = verify_key(key_schema.kind(), key) {
                errors.push(ValidationError {
                    code,
                    path: path.clone(),
                    schema: key_schema,
                    subject: Cow::Owned(Value::String(key.clone())),
                });
            }
        }

        // Absent entries are accepted as is and never reach the output.
        if value.is_absent() {
            path.pop();
            continue;
        }

        let result = visit::<M>(record.value(), value, path);
        path.pop();

        match result {
            Ok(parsed) => M::entry(&mut entries, key, parsed),
            Err(mut nested) => errors.append(&mut nested),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(M::mapping(subject, entries))
}

fn visit_union<'s, 'v, M: Materialize<'v>>(
    schema: &'s Schema,
    union: &'s UnionSchema,
    subject: &'v Value,
    path: &mut ErrorPath,
) -> Visit<'s, 'v, M::Output> {
    for (index, alternative) in union.alternatives().iter().enumerate() {
        match visit::<M>(alternative, subject, path) {
            Ok(value) => return Ok(value),
            Err(discarded) => trace!(
                %path,
                alternative = index,
                errors = discarded.len(),
                "union alternative did not match"
            ),
        }
    }
    Err(vec![reject(ErrorCode::InvalidType, path, schema, subject)])
}
