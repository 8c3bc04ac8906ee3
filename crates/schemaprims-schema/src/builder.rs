//! Fluent schema builder.
//!
//! Each kind has its own builder exposing only the modifiers that make sense
//! for it. Assigning any modifier twice is recorded as a diagnostic and
//! reported by `build()`; the first diagnostic wins.
//!
//! ```
//! use schemaprims_schema::Schema;
//!
//! let user = Schema::object()
//!     .field("id", Schema::string().min_length(1).brand("id", "user").build()?)
//!     .field("age", Schema::number().min(0.0).optional().build()?)
//!     .build()?;
//! assert_eq!(user.kind().name(), "object");
//! # Ok::<(), schemaprims_schema::SchemaError>(())
//! ```

use indexmap::IndexMap;

use crate::brand::Brand;
use crate::error::{Result, SchemaError};
use crate::model::{
    ArraySchema, BigintSchema, BooleanSchema, LiteralSchema, LiteralValue, NumberSchema,
    ObjectSchema, RecordSchema, Schema, SchemaKind, StringSchema, TupleSchema, UnionSchema,
};

/// Shared modifier state plus the first construction diagnostic.
#[derive(Debug, Default)]
struct Draft {
    optional: Option<bool>,
    nullable: Option<bool>,
    description: Option<String>,
    diagnostic: Option<SchemaError>,
}

impl Draft {
    fn reject(&mut self, err: SchemaError) {
        if self.diagnostic.is_none() {
            self.diagnostic = Some(err);
        }
    }

    fn finish(self, kind: SchemaKind) -> Result<Schema> {
        if let Some(err) = self.diagnostic {
            return Err(err);
        }
        Schema::from_parts(
            kind,
            self.optional.unwrap_or(false),
            self.nullable.unwrap_or(false),
            self.description,
        )
    }
}

fn assign<T>(
    diagnostic: &mut Option<SchemaError>,
    slot: &mut Option<T>,
    value: T,
    modifier: &'static str,
) {
    if slot.is_some() {
        if diagnostic.is_none() {
            *diagnostic = Some(SchemaError::ModifierReassigned { modifier });
        }
        return;
    }
    *slot = Some(value);
}

macro_rules! shared_modifiers {
    () => {
        /// Accept an absent subject without further checks.
        pub fn optional(mut self) -> Self {
            let draft = &mut self.draft;
            assign(&mut draft.diagnostic, &mut draft.optional, true, "optional");
            self
        }

        /// Accept an explicit null subject without further checks.
        pub fn nullable(mut self) -> Self {
            let draft = &mut self.draft;
            assign(&mut draft.diagnostic, &mut draft.nullable, true, "nullable");
            self
        }

        /// Attach a description. No runtime effect.
        pub fn description(mut self, text: impl Into<String>) -> Self {
            let draft = &mut self.draft;
            assign(
                &mut draft.diagnostic,
                &mut draft.description,
                text.into(),
                "description",
            );
            self
        }
    };
}

macro_rules! brand_modifier {
    () => {
        /// Attach a nominal brand. No runtime effect.
        pub fn brand(
            mut self,
            category: impl Into<String>,
            subcategory: impl Into<String>,
        ) -> Self {
            assign(
                &mut self.draft.diagnostic,
                &mut self.brand,
                Brand::new(category, subcategory),
                "brand",
            );
            self
        }
    };
}

macro_rules! length_bounds {
    () => {
        /// Inclusive lower bound on length.
        pub fn min_length(mut self, n: usize) -> Self {
            assign(&mut self.draft.diagnostic, &mut self.min_length, n, "minLength");
            self
        }

        /// Inclusive upper bound on length.
        pub fn max_length(mut self, n: usize) -> Self {
            assign(&mut self.draft.diagnostic, &mut self.max_length, n, "maxLength");
            self
        }
    };
}

impl Schema {
    pub fn string() -> StringBuilder {
        StringBuilder::default()
    }

    pub fn number() -> NumberBuilder {
        NumberBuilder::default()
    }

    pub fn bigint() -> BigintBuilder {
        BigintBuilder::default()
    }

    pub fn boolean() -> BooleanBuilder {
        BooleanBuilder::default()
    }

    pub fn literal(value: impl Into<LiteralValue>) -> LiteralBuilder {
        LiteralBuilder {
            draft: Draft::default(),
            value: value.into(),
            brand: None,
        }
    }

    pub fn array(element: Schema) -> ArrayBuilder {
        ArrayBuilder {
            draft: Draft::default(),
            element,
            min_length: None,
            max_length: None,
        }
    }

    pub fn tuple(positions: impl IntoIterator<Item = Schema>) -> TupleBuilder {
        TupleBuilder {
            draft: Draft::default(),
            positions: positions.into_iter().collect(),
        }
    }

    pub fn object() -> ObjectBuilder {
        ObjectBuilder::default()
    }

    pub fn record(value: Schema) -> RecordBuilder {
        RecordBuilder {
            draft: Draft::default(),
            value,
            key: None,
        }
    }

    pub fn union(alternatives: impl IntoIterator<Item = Schema>) -> UnionBuilder {
        UnionBuilder {
            draft: Draft::default(),
            alternatives: alternatives.into_iter().collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct StringBuilder {
    draft: Draft,
    min_length: Option<usize>,
    max_length: Option<usize>,
    brand: Option<Brand>,
}

impl StringBuilder {
    shared_modifiers!();
    brand_modifier!();
    length_bounds!();

    pub fn build(self) -> Result<Schema> {
        self.draft.finish(SchemaKind::String(StringSchema {
            min_length: self.min_length,
            max_length: self.max_length,
            brand: self.brand,
        }))
    }
}

#[derive(Debug, Default)]
pub struct NumberBuilder {
    draft: Draft,
    min: Option<f64>,
    max: Option<f64>,
    brand: Option<Brand>,
}

impl NumberBuilder {
    shared_modifiers!();
    brand_modifier!();

    /// Inclusive lower bound.
    pub fn min(mut self, bound: f64) -> Self {
        assign(&mut self.draft.diagnostic, &mut self.min, bound, "min");
        self
    }

    /// Inclusive upper bound.
    pub fn max(mut self, bound: f64) -> Self {
        assign(&mut self.draft.diagnostic, &mut self.max, bound, "max");
        self
    }

    pub fn build(self) -> Result<Schema> {
        self.draft.finish(SchemaKind::Number(NumberSchema {
            min: self.min,
            max: self.max,
            brand: self.brand,
        }))
    }
}

#[derive(Debug, Default)]
pub struct BigintBuilder {
    draft: Draft,
    brand: Option<Brand>,
}

impl BigintBuilder {
    shared_modifiers!();
    brand_modifier!();

    pub fn build(self) -> Result<Schema> {
        self.draft
            .finish(SchemaKind::Bigint(BigintSchema { brand: self.brand }))
    }
}

#[derive(Debug, Default)]
pub struct BooleanBuilder {
    draft: Draft,
    brand: Option<Brand>,
}

impl BooleanBuilder {
    shared_modifiers!();
    brand_modifier!();

    pub fn build(self) -> Result<Schema> {
        self.draft
            .finish(SchemaKind::Boolean(BooleanSchema { brand: self.brand }))
    }
}

#[derive(Debug)]
pub struct LiteralBuilder {
    draft: Draft,
    value: LiteralValue,
    brand: Option<Brand>,
}

impl LiteralBuilder {
    shared_modifiers!();
    brand_modifier!();

    pub fn build(self) -> Result<Schema> {
        self.draft.finish(SchemaKind::Literal(LiteralSchema {
            of: self.value,
            brand: self.brand,
        }))
    }
}

#[derive(Debug)]
pub struct ArrayBuilder {
    draft: Draft,
    element: Schema,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl ArrayBuilder {
    shared_modifiers!();
    length_bounds!();

    pub fn build(self) -> Result<Schema> {
        self.draft.finish(SchemaKind::Array(ArraySchema {
            of: Box::new(self.element),
            min_length: self.min_length,
            max_length: self.max_length,
        }))
    }
}

#[derive(Debug)]
pub struct TupleBuilder {
    draft: Draft,
    positions: Vec<Schema>,
}

impl TupleBuilder {
    shared_modifiers!();

    pub fn build(self) -> Result<Schema> {
        self.draft
            .finish(SchemaKind::Tuple(TupleSchema { of: self.positions }))
    }
}

#[derive(Debug, Default)]
pub struct ObjectBuilder {
    draft: Draft,
    fields: IndexMap<String, Schema>,
}

impl ObjectBuilder {
    shared_modifiers!();

    /// Declare a field. Declaration order is the order fields are checked in.
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        if self.fields.contains_key(&name) {
            self.draft.reject(SchemaError::DuplicateField(name));
            return self;
        }
        self.fields.insert(name, schema);
        self
    }

    pub fn build(self) -> Result<Schema> {
        self.draft
            .finish(SchemaKind::Object(ObjectSchema { of: self.fields }))
    }
}

#[derive(Debug)]
pub struct RecordBuilder {
    draft: Draft,
    value: Schema,
    key: Option<Box<Schema>>,
}

impl RecordBuilder {
    shared_modifiers!();

    /// Check every key against a string schema.
    pub fn key(mut self, schema: Schema) -> Self {
        assign(
            &mut self.draft.diagnostic,
            &mut self.key,
            Box::new(schema),
            "key",
        );
        self
    }

    pub fn build(self) -> Result<Schema> {
        self.draft.finish(SchemaKind::Record(RecordSchema {
            of: Box::new(self.value),
            key: self.key,
        }))
    }
}

#[derive(Debug)]
pub struct UnionBuilder {
    draft: Draft,
    alternatives: Vec<Schema>,
}

impl UnionBuilder {
    shared_modifiers!();

    pub fn build(self) -> Result<Schema> {
        self.draft
            .finish(SchemaKind::Union(UnionSchema { of: self.alternatives }))
    }
}
