//! What the dispatch core produces at container nodes.
//!
//! [`Share`] hands back the input reference untouched. [`Rebuild`] allocates a
//! fresh container from the children's results, applying the object and
//! record filtering rules.

use schemaprims_value::{Map, Value};

pub(crate) trait Materialize<'v> {
    type Output;
    type Items;
    type Entries;

    /// Result for a leaf, or for a node accepted by a short-circuit.
    fn leaf(subject: &'v Value) -> Self::Output;

    fn items(capacity: usize) -> Self::Items;
    fn push_item(items: &mut Self::Items, item: Self::Output);
    fn sequence(subject: &'v Value, items: Self::Items) -> Self::Output;

    fn entries(capacity: usize) -> Self::Entries;
    /// Object field whose key exists in the input. Kept even when absent.
    fn field(entries: &mut Self::Entries, key: &str, value: Self::Output);
    /// Record entry. Dropped when the parsed value is absent.
    fn entry(entries: &mut Self::Entries, key: &str, value: Self::Output);
    fn mapping(subject: &'v Value, entries: Self::Entries) -> Self::Output;
}

/// Structure-sharing policy used by `validate`.
pub(crate) struct Share;

impl<'v> Materialize<'v> for Share {
    type Output = &'v Value;
    type Items = ();
    type Entries = ();

    fn leaf(subject: &'v Value) -> &'v Value {
        subject
    }

    fn items(_: usize) {}

    fn push_item(_: &mut (), _: &'v Value) {}

    fn sequence(subject: &'v Value, _: ()) -> &'v Value {
        subject
    }

    fn entries(_: usize) {}

    fn field(_: &mut (), _: &str, _: &'v Value) {}

    fn entry(_: &mut (), _: &str, _: &'v Value) {}

    fn mapping(subject: &'v Value, _: ()) -> &'v Value {
        subject
    }
}

/// Rebuilding policy used by `parse`.
pub(crate) struct Rebuild;

impl<'v> Materialize<'v> for Rebuild {
    type Output = Value;
    type Items = Vec<Value>;
    type Entries = Map;

    fn leaf(subject: &'v Value) -> Value {
        subject.clone()
    }

    fn items(capacity: usize) -> Vec<Value> {
        Vec::with_capacity(capacity)
    }

    fn push_item(items: &mut Vec<Value>, item: Value) {
        items.push(item);
    }

    fn sequence(_: &'v Value, items: Vec<Value>) -> Value {
        Value::Sequence(items)
    }

    fn entries(capacity: usize) -> Map {
        Map::with_capacity(capacity)
    }

    fn field(entries: &mut Map, key: &str, value: Value) {
        entries.insert(key.to_string(), value);
    }

    fn entry(entries: &mut Map, key: &str, value: Value) {
        if !value.is_absent() {
            entries.insert(key.to_string(), value);
        }
    }

    fn mapping(_: &'v Value, entries: Map) -> Value {
        Value::Mapping(entries)
    }
}
