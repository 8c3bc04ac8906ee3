use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::brand::Brand;
use crate::error::{Result, SchemaError};
use crate::literal::SchemaLiteral;

/// An immutable schema node.
///
/// The kind decides what the node accepts; the shared modifiers decide the
/// short-circuits taken before the kind is looked at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SchemaLiteral", into = "SchemaLiteral")]
pub struct Schema {
    pub(crate) kind: SchemaKind,
    pub(crate) optional: bool,
    pub(crate) nullable: bool,
    pub(crate) description: Option<String>,
}

impl Schema {
    pub fn kind(&self) -> &SchemaKind {
        &self.kind
    }

    /// An absent subject is accepted without further checks.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// An explicit null subject is accepted without further checks.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Free-form description. No runtime effect.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Brand of a primitive or literal node.
    pub fn brand(&self) -> Option<&Brand> {
        match &self.kind {
            SchemaKind::String(s) => s.brand.as_ref(),
            SchemaKind::Number(s) => s.brand.as_ref(),
            SchemaKind::Bigint(s) => s.brand.as_ref(),
            SchemaKind::Boolean(s) => s.brand.as_ref(),
            SchemaKind::Literal(s) => s.brand.as_ref(),
            _ => None,
        }
    }

    pub(crate) fn from_parts(
        kind: SchemaKind,
        optional: bool,
        nullable: bool,
        description: Option<String>,
    ) -> Result<Self> {
        kind.check()?;
        Ok(Self {
            kind,
            optional,
            nullable,
            description,
        })
    }
}

/// Schema kinds, each carrying only its own fields.
///
/// Serialized with an internal `type` tag, e.g. `{"type": "array", "of": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaKind {
    String(StringSchema),
    Number(NumberSchema),
    Bigint(BigintSchema),
    Boolean(BooleanSchema),
    Literal(LiteralSchema),
    Array(ArraySchema),
    Tuple(TupleSchema),
    Object(ObjectSchema),
    Record(RecordSchema),
    Union(UnionSchema),
}

impl SchemaKind {
    /// The literal `type` tag of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::String(_) => "string",
            SchemaKind::Number(_) => "number",
            SchemaKind::Bigint(_) => "bigint",
            SchemaKind::Boolean(_) => "boolean",
            SchemaKind::Literal(_) => "literal",
            SchemaKind::Array(_) => "array",
            SchemaKind::Tuple(_) => "tuple",
            SchemaKind::Object(_) => "object",
            SchemaKind::Record(_) => "record",
            SchemaKind::Union(_) => "union",
        }
    }

    /// Returns true for kinds that hold nested schemas.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            SchemaKind::Array(_)
                | SchemaKind::Tuple(_)
                | SchemaKind::Object(_)
                | SchemaKind::Record(_)
                | SchemaKind::Union(_)
        )
    }

    /// Structural rules for this node. Children were checked when they were built.
    pub(crate) fn check(&self) -> Result<()> {
        match self {
            SchemaKind::Union(union) if union.of.is_empty() => Err(SchemaError::EmptyUnion),
            SchemaKind::Record(record) => match record.key.as_deref() {
                Some(key) if !matches!(key.kind, SchemaKind::String(_)) => {
                    Err(SchemaError::RecordKeyNotString(key.kind.name()))
                }
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StringSchema {
    #[serde(rename = "minLength", default, skip_serializing_if = "Option::is_none")]
    pub(crate) min_length: Option<usize>,
    #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
    pub(crate) max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) brand: Option<Brand>,
}

impl StringSchema {
    /// Inclusive lower bound on character count.
    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    /// Inclusive upper bound on character count.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn brand(&self) -> Option<&Brand> {
        self.brand.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) brand: Option<Brand>,
}

impl NumberSchema {
    /// Inclusive lower bound.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn brand(&self) -> Option<&Brand> {
        self.brand.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BigintSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) brand: Option<Brand>,
}

impl BigintSchema {
    pub fn brand(&self) -> Option<&Brand> {
        self.brand.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BooleanSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) brand: Option<Brand>,
}

impl BooleanSchema {
    pub fn brand(&self) -> Option<&Brand> {
        self.brand.as_ref()
    }
}

/// The constant accepted by a literal schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::String(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Number(value)
    }
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        LiteralValue::Number(f64::from(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiteralSchema {
    pub(crate) of: LiteralValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) brand: Option<Brand>,
}

impl LiteralSchema {
    pub fn value(&self) -> &LiteralValue {
        &self.of
    }

    pub fn brand(&self) -> Option<&Brand> {
        self.brand.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArraySchema {
    pub(crate) of: Box<Schema>,
    #[serde(rename = "minLength", default, skip_serializing_if = "Option::is_none")]
    pub(crate) min_length: Option<usize>,
    #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
    pub(crate) max_length: Option<usize>,
}

impl ArraySchema {
    /// Schema every element is checked against.
    pub fn element(&self) -> &Schema {
        &self.of
    }

    /// Inclusive lower bound on element count.
    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    /// Inclusive upper bound on element count.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TupleSchema {
    pub(crate) of: Vec<Schema>,
}

impl TupleSchema {
    /// Schemas by position.
    pub fn positions(&self) -> &[Schema] {
        &self.of
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectSchema {
    pub(crate) of: IndexMap<String, Schema>,
}

impl ObjectSchema {
    /// Declared fields in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Schema> {
        &self.of
    }

    pub fn field(&self, name: &str) -> Option<&Schema> {
        self.of.get(name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.of.contains_key(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordSchema {
    pub(crate) of: Box<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) key: Option<Box<Schema>>,
}

impl RecordSchema {
    /// Schema every entry value is checked against.
    pub fn value(&self) -> &Schema {
        &self.of
    }

    /// Schema every key is checked against. Always a string schema.
    pub fn key(&self) -> Option<&Schema> {
        self.key.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnionSchema {
    pub(crate) of: Vec<Schema>,
}

impl UnionSchema {
    /// Alternatives in the order they are tried. Never empty.
    pub fn alternatives(&self) -> &[Schema] {
        &self.of
    }
}
