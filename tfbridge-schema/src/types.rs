//! Schema type definitions.
//!
//! This module contains the data structures representing a provider's
//! resource schemas: the provider itself, resource blocks, fields and the
//! closed set of field kinds.

use std::collections::HashMap;

/// Complete provider schema definition.
///
/// Resources are keyed by their provider type key (for example
/// `aws_instance`). The map is unordered; everything downstream sorts.
#[derive(Debug, Clone, Default)]
pub struct ProviderSchema {
    /// Provider name.
    pub name: String,
    /// Resource schemas keyed by provider type key.
    pub resources: HashMap<String, ResourceSchema>,
}

impl ProviderSchema {
    /// Creates a new empty provider schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: HashMap::new(),
        }
    }

    /// Adds a resource schema under the given type key.
    #[must_use]
    pub fn with_resource(mut self, type_key: impl Into<String>, resource: ResourceSchema) -> Self {
        self.resources.insert(type_key.into(), resource);
        self
    }

    /// Looks up a resource by type key.
    #[must_use]
    pub fn get_resource(&self, type_key: &str) -> Option<&ResourceSchema> {
        self.resources.get(type_key)
    }

    /// Returns the resource type keys in ascending order.
    #[must_use]
    pub fn sorted_type_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// A block of named fields: a resource or a nested object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceSchema {
    /// Field schemas keyed by raw field name.
    pub fields: HashMap<String, FieldSchema>,
}

impl ResourceSchema {
    /// Creates a new empty block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the block.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field: FieldSchema) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Returns true if the block declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Field schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Field kind.
    pub kind: SchemaKind,
    /// Whether the field must be set.
    pub required: bool,
    /// Whether the field may be omitted.
    pub optional: bool,
    /// Whether the provider computes the value.
    pub computed: bool,
    /// Description.
    pub description: Option<String>,
}

impl FieldSchema {
    /// Creates an optional field of the given kind.
    #[must_use]
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            required: false,
            optional: true,
            computed: false,
            description: None,
        }
    }

    /// Creates a required field of the given kind.
    #[must_use]
    pub fn required(kind: SchemaKind) -> Self {
        Self {
            required: true,
            optional: false,
            ..Self::new(kind)
        }
    }

    /// Creates an optional field of the given kind.
    #[must_use]
    pub fn optional(kind: SchemaKind) -> Self {
        Self::new(kind)
    }

    /// Marks the field as provider-computed.
    #[must_use]
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }
}

/// Field kinds.
///
/// This is a closed set: every kind has a mapping rule in the walker, and
/// anything the input declares outside of it is rejected while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// Floating point.
    Float,
    /// String.
    String,
    /// Ordered list of elements.
    List(Element),
    /// Set of elements. Generated code treats sets as lists.
    Set(Element),
    /// String to string map.
    Map,
}

impl SchemaKind {
    /// Creates a list of the given primitive or collection kind.
    #[must_use]
    pub fn list_of(kind: SchemaKind) -> Self {
        Self::List(Element::Schema(Box::new(FieldSchema::required(kind))))
    }

    /// Creates a set of the given primitive or collection kind.
    #[must_use]
    pub fn set_of(kind: SchemaKind) -> Self {
        Self::Set(Element::Schema(Box::new(FieldSchema::required(kind))))
    }

    /// Creates a list of nested objects.
    #[must_use]
    pub fn list_of_block(block: ResourceSchema) -> Self {
        Self::List(Element::Resource(block))
    }

    /// Creates a set of nested objects.
    #[must_use]
    pub fn set_of_block(block: ResourceSchema) -> Self {
        Self::Set(Element::Resource(block))
    }

    /// Returns the canonical kind name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map => "map",
        }
    }

    /// Returns true if this is a list or set.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Set(_))
    }

    /// Returns the element of a list or set.
    #[must_use]
    pub fn element(&self) -> Option<&Element> {
        match self {
            Self::List(elem) | Self::Set(elem) => Some(elem),
            _ => None,
        }
    }
}

/// Element of a list or set.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Primitive or collection element.
    Schema(Box<FieldSchema>),
    /// Nested object element.
    Resource(ResourceSchema),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_schema_required() {
        let field = FieldSchema::required(SchemaKind::String);
        assert!(field.required);
        assert!(!field.optional);
        assert!(!field.computed);
    }

    #[test]
    fn test_field_schema_optional_computed() {
        let field = FieldSchema::optional(SchemaKind::Int).computed();
        assert!(!field.required);
        assert!(field.optional);
        assert!(field.computed);
    }

    #[test]
    fn test_schema_kind_name() {
        assert_eq!(SchemaKind::Bool.name(), "bool");
        assert_eq!(SchemaKind::Map.name(), "map");
        assert_eq!(SchemaKind::list_of(SchemaKind::String).name(), "list");
        assert_eq!(SchemaKind::set_of_block(ResourceSchema::new()).name(), "set");
    }

    #[test]
    fn test_schema_kind_element() {
        let kind = SchemaKind::list_of(SchemaKind::Int);
        assert!(kind.is_collection());
        match kind.element() {
            Some(Element::Schema(inner)) => assert_eq!(inner.kind, SchemaKind::Int),
            other => panic!("unexpected element: {:?}", other),
        }
        assert!(SchemaKind::Map.element().is_none());
    }

    #[test]
    fn test_provider_sorted_type_keys() {
        let provider = ProviderSchema::new("example")
            .with_resource("zeta", ResourceSchema::new())
            .with_resource("alpha", ResourceSchema::new())
            .with_resource("mid", ResourceSchema::new());

        assert_eq!(provider.sorted_type_keys(), vec!["alpha", "mid", "zeta"]);
        assert!(provider.get_resource("alpha").is_some());
        assert!(provider.get_resource("missing").is_none());
    }
}
