//! A deterministic JSON-Schema builder.
//!
//! [`Schema`] is a plain value describing a document shape in the
//! documented subset of the JSON-Schema draft vocabulary (`type`,
//! `properties`, `required`, `items`, `enum`, `anyOf`/`allOf`,
//! `$ref`/`definitions`). Builders compose schemas as ordinary
//! expressions; [`print`] emits the equivalent
//! [`serde_json::Value`]. Output is deterministic: properties are held
//! in a [`BTreeMap`] and the `required` list is emitted in sorted key
//! order, so two schemas built from the same entries in different
//! orders print identically.
//!
//! # Examples
//!
//! ```rust
//! use preludium::schema::{print, string, struct_of};
//! use serde_json::json;
//!
//! let user = struct_of([("foo", string())]);
//! assert_eq!(
//!     print(&user),
//!     json!({
//!         "type": "object",
//!         "properties": {"foo": {"type": "string"}},
//!         "required": ["foo"],
//!     })
//! );
//! ```

use std::collections::BTreeMap;

use serde_json::{json, Value};

/// A JSON-Schema document shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Schema {
    /// `{"type": "string"}`
    String,
    /// `{"type": "number"}`
    Number,
    /// `{"type": "integer"}`
    Integer,
    /// `{"type": "boolean"}`
    Boolean,
    /// `{"type": "null"}`
    Null,
    /// A fixed set of allowed values.
    Enum(Vec<Value>),
    /// A homogeneous array.
    Array(Box<Schema>),
    /// A fixed-length heterogeneous array.
    Tuple(Vec<Schema>),
    /// An object with named properties.
    Struct {
        /// Property name to schema, sorted by name.
        properties: BTreeMap<String, Schema>,
        /// Whether every property is required.
        required_all: bool,
    },
    /// A value matching at least one alternative.
    AnyOf(Vec<Schema>),
    /// A value matching every alternative.
    AllOf(Vec<Schema>),
    /// A reference to a named definition.
    Reference(String),
    /// A root schema bundled with its named definitions.
    WithDefinitions {
        /// Definition name to schema.
        definitions: BTreeMap<String, Schema>,
        /// The root schema referring into the definitions.
        root: Box<Schema>,
    },
}

/// A string schema.
#[must_use]
pub const fn string() -> Schema {
    Schema::String
}

/// A number schema.
#[must_use]
pub const fn number() -> Schema {
    Schema::Number
}

/// An integer schema.
#[must_use]
pub const fn integer() -> Schema {
    Schema::Integer
}

/// A boolean schema.
#[must_use]
pub const fn boolean() -> Schema {
    Schema::Boolean
}

/// A null schema.
#[must_use]
pub const fn null() -> Schema {
    Schema::Null
}

/// A schema accepting exactly the given values.
pub fn enum_of<I, V>(values: I) -> Schema
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Schema::Enum(values.into_iter().map(Into::into).collect())
}

/// A homogeneous array schema.
#[must_use]
pub fn array_of(items: Schema) -> Schema {
    Schema::Array(Box::new(items))
}

/// A fixed-length heterogeneous array schema.
pub fn tuple_of<I>(items: I) -> Schema
where
    I: IntoIterator<Item = Schema>,
{
    Schema::Tuple(items.into_iter().collect())
}

fn collect_properties<I, K>(properties: I) -> BTreeMap<String, Schema>
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<String>,
{
    properties
        .into_iter()
        .map(|(name, schema)| (name.into(), schema))
        .collect()
}

/// An object schema with every property required.
pub fn struct_of<I, K>(properties: I) -> Schema
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<String>,
{
    Schema::Struct {
        properties: collect_properties(properties),
        required_all: true,
    }
}

/// An object schema with every property optional.
pub fn partial_of<I, K>(properties: I) -> Schema
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<String>,
{
    Schema::Struct {
        properties: collect_properties(properties),
        required_all: false,
    }
}

/// A schema matching at least one of the alternatives.
pub fn any_of<I>(alternatives: I) -> Schema
where
    I: IntoIterator<Item = Schema>,
{
    Schema::AnyOf(alternatives.into_iter().collect())
}

/// A schema matching every one of the alternatives.
pub fn all_of<I>(alternatives: I) -> Schema
where
    I: IntoIterator<Item = Schema>,
{
    Schema::AllOf(alternatives.into_iter().collect())
}

/// A reference to a definition registered with [`with_definitions`].
pub fn reference(name: impl Into<String>) -> Schema {
    Schema::Reference(name.into())
}

/// Bundles a root schema with named definitions it may reference.
pub fn with_definitions<I, K>(definitions: I, root: Schema) -> Schema
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<String>,
{
    Schema::WithDefinitions {
        definitions: collect_properties(definitions),
        root: Box::new(root),
    }
}

/// Emits the schema as a JSON-compatible value.
///
/// The transformation is pure and deterministic; object keys and the
/// `required` list come out in sorted order.
#[must_use]
pub fn print(schema: &Schema) -> Value {
    match schema {
        Schema::String => json!({"type": "string"}),
        Schema::Number => json!({"type": "number"}),
        Schema::Integer => json!({"type": "integer"}),
        Schema::Boolean => json!({"type": "boolean"}),
        Schema::Null => json!({"type": "null"}),
        Schema::Enum(values) => json!({"enum": values}),
        Schema::Array(items) => json!({"type": "array", "items": print(items)}),
        Schema::Tuple(items) => {
            let printed: Vec<Value> = items.iter().map(print).collect();
            json!({"type": "array", "items": printed})
        }
        Schema::Struct {
            properties,
            required_all,
        } => {
            let printed: BTreeMap<&String, Value> = properties
                .iter()
                .map(|(name, property)| (name, print(property)))
                .collect();
            if *required_all && !properties.is_empty() {
                let required: Vec<&String> = properties.keys().collect();
                json!({"type": "object", "properties": printed, "required": required})
            } else {
                json!({"type": "object", "properties": printed})
            }
        }
        Schema::AnyOf(alternatives) => {
            let printed: Vec<Value> = alternatives.iter().map(print).collect();
            json!({"anyOf": printed})
        }
        Schema::AllOf(alternatives) => {
            let printed: Vec<Value> = alternatives.iter().map(print).collect();
            json!({"allOf": printed})
        }
        Schema::Reference(name) => json!({"$ref": format!("#/definitions/{name}")}),
        Schema::WithDefinitions { definitions, root } => {
            let printed: BTreeMap<&String, Value> = definitions
                .iter()
                .map(|(name, definition)| (name, print(definition)))
                .collect();
            let mut document = print(root);
            if let Value::Object(ref mut fields) = document {
                fields.insert("definitions".to_string(), json!(printed));
            }
            document
        }
    }
}
