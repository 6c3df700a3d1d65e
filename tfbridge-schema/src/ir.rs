//! Intermediate representation for code generation.
//!
//! This module provides the typed, resolved view of a provider schema:
//! every resource becomes a [`GeneratedType`] plus a [`GeneratedHandler`],
//! and every anonymous nested object becomes a synthetic [`GeneratedType`].

use crate::error::SchemaError;
use crate::naming::{NameContext, rust_ident, to_pascal_case, to_snake_case};
use crate::types::ProviderSchema;
use crate::validation::validate_schema;
use crate::walker::walk_fields;

/// Intermediate representation of a provider schema for code generation.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Provider name.
    pub provider: String,
    /// Resolved resources in ascending type key order.
    pub resources: Vec<ResolvedResource>,
    /// Naming state after the walk.
    pub names: NameContext,
}

impl SchemaIr {
    /// Creates an intermediate representation from a provider schema.
    ///
    /// Resources are walked in ascending type key order with a single
    /// [`NameContext`] threaded through the whole run, so synthetic names
    /// depend only on the schema contents.
    ///
    /// # Errors
    /// Returns `SchemaError` if the schema fails validation or a resource
    /// cannot be mapped to generated types.
    pub fn from_schema(schema: &ProviderSchema) -> Result<Self, SchemaError> {
        validate_schema(schema)?;

        let mut names = NameContext::new();
        let mut resources = Vec::with_capacity(schema.resources.len());

        for type_key in schema.sorted_type_keys() {
            let resource = &schema.resources[type_key];
            let title = to_pascal_case(type_key);
            let identity = IdentityField::for_resource(type_key);

            let mut nested = Vec::new();
            let (fields, next) = walk_fields(&title, &resource.fields, names, &mut nested)?;
            names = next;

            if let Some(clash) = fields.iter().find(|f| f.ident == identity.ident) {
                return Err(SchemaError::IdentityConflict {
                    resource: type_key.to_string(),
                    field: clash.schema_name.clone(),
                    identity: identity.ident,
                });
            }

            tracing::debug!(
                "Resolved resource {} as {} ({} fields, {} nested types)",
                type_key,
                title,
                fields.len(),
                nested.len()
            );

            resources.push(ResolvedResource {
                type_key: type_key.to_string(),
                resource_type: GeneratedType {
                    name: title.clone(),
                    fields,
                    identity: Some(identity),
                },
                nested,
                handler: GeneratedHandler {
                    resource_title: title,
                    provider_type_key: type_key.to_string(),
                },
            });
        }

        Ok(Self {
            provider: schema.name.clone(),
            resources,
            names,
        })
    }

    /// Gets a resolved resource by provider type key.
    #[must_use]
    pub fn get_resource(&self, type_key: &str) -> Option<&ResolvedResource> {
        self.resources.iter().find(|r| r.type_key == type_key)
    }

    /// Iterates over every generated type, nested types first per resource.
    pub fn all_types(&self) -> impl Iterator<Item = &GeneratedType> {
        self.resources
            .iter()
            .flat_map(|r| r.nested.iter().chain(std::iter::once(&r.resource_type)))
    }
}

/// Semantic type of a generated field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// Floating point.
    Float,
    /// String.
    String,
    /// List of elements (also used for sets).
    List(Box<TypeRef>),
    /// String to string map.
    Map,
    /// Synthetic nested object type.
    Object(String),
}

impl TypeRef {
    /// Returns the Rust type for this reference.
    #[must_use]
    pub fn rust_type(&self) -> String {
        match self {
            Self::Bool => "bool".to_string(),
            Self::Int => "i64".to_string(),
            Self::Float => "f64".to_string(),
            Self::String => "String".to_string(),
            Self::List(elem) => format!("Vec<{}>", elem.rust_type()),
            Self::Map => "std::collections::BTreeMap<String, String>".to_string(),
            Self::Object(name) => name.clone(),
        }
    }

    /// Returns the synthetic type this reference points at, if any.
    #[must_use]
    pub fn object_name(&self) -> Option<&str> {
        match self {
            Self::Object(name) => Some(name),
            Self::List(elem) => elem.object_name(),
            _ => None,
        }
    }
}

/// Resolved field information.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Normalized (title-cased) field name, the sort key.
    pub name: String,
    /// Raw field name as declared by the provider.
    pub schema_name: String,
    /// Rust field identifier.
    pub ident: String,
    /// Semantic type.
    pub type_ref: TypeRef,
    /// Whether the field is required.
    pub required: bool,
}

impl FieldDescriptor {
    /// Creates a descriptor from a raw field name.
    #[must_use]
    pub fn new(schema_name: &str, type_ref: TypeRef, required: bool) -> Self {
        Self {
            name: to_pascal_case(schema_name),
            schema_name: schema_name.to_string(),
            ident: rust_ident(&to_snake_case(schema_name)),
            type_ref,
            required,
        }
    }

    /// Returns the Rust type, wrapped in `Option` for optional fields.
    #[must_use]
    pub fn rust_type(&self) -> String {
        if self.required {
            self.type_ref.rust_type()
        } else {
            format!("Option<{}>", self.type_ref.rust_type())
        }
    }
}

/// Synthetic identity field carried by top-level resource types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityField {
    /// Rust field identifier.
    pub ident: String,
}

impl IdentityField {
    /// Creates the identity field for a resource type key.
    #[must_use]
    pub fn for_resource(type_key: &str) -> Self {
        Self {
            ident: format!("{}_id", to_snake_case(type_key)),
        }
    }
}

/// A type to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedType {
    /// Type name.
    pub name: String,
    /// Fields sorted ascending by normalized name.
    pub fields: Vec<FieldDescriptor>,
    /// Identity field (top-level resource types only).
    pub identity: Option<IdentityField>,
}

impl GeneratedType {
    /// Returns true if this is a top-level resource type.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        self.identity.is_some()
    }
}

/// Handler binding a resource type to the provider primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHandler {
    /// Title of the resource type.
    pub resource_title: String,
    /// Provider type key used for create/read/delete.
    pub provider_type_key: String,
}

impl GeneratedHandler {
    /// Returns the handler struct name.
    #[must_use]
    pub fn handler_name(&self) -> String {
        format!("{}Handler", self.resource_title)
    }
}

/// Resolved resource information.
#[derive(Debug, Clone)]
pub struct ResolvedResource {
    /// Provider type key.
    pub type_key: String,
    /// Top-level resource type.
    pub resource_type: GeneratedType,
    /// Synthetic nested types in discovery order.
    pub nested: Vec<GeneratedType>,
    /// Handler binding.
    pub handler: GeneratedHandler,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_provider_schema;

    const WIDGET: &str = r#"{
        "provider": "example",
        "resources": {
            "widget": {
                "name":  { "type": "string", "required": true },
                "count": { "type": "int", "optional": true },
                "tags":  { "type": "list", "elem": { "type": "string" } }
            }
        }
    }"#;

    #[test]
    fn test_schema_ir_from_schema() {
        let schema = parse_provider_schema(WIDGET).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema).expect("Failed to resolve");

        assert_eq!(ir.provider, "example");
        assert_eq!(ir.resources.len(), 1);

        let widget = ir.get_resource("widget").expect("widget missing");
        assert_eq!(widget.resource_type.name, "Widget");
        assert_eq!(widget.handler.handler_name(), "WidgetHandler");
        assert_eq!(widget.handler.provider_type_key, "widget");
        assert!(widget.nested.is_empty());
    }

    #[test]
    fn test_widget_field_order_and_wrapping() {
        let schema = parse_provider_schema(WIDGET).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema).expect("Failed to resolve");
        let widget = &ir.resources[0].resource_type;

        let names: Vec<&str> = widget.fields.iter().map(|f| f.schema_name.as_str()).collect();
        assert_eq!(names, vec!["count", "name", "tags"]);

        assert_eq!(widget.fields[0].rust_type(), "Option<i64>");
        assert_eq!(widget.fields[1].rust_type(), "String");
        assert_eq!(widget.fields[2].rust_type(), "Option<Vec<String>>");
        assert_eq!(
            widget.identity,
            Some(IdentityField {
                ident: "widget_id".to_string()
            })
        );
    }

    #[test]
    fn test_resources_sorted_by_type_key() {
        let json = r#"{
            "provider": "example",
            "resources": {
                "zone": { "name": { "type": "string", "required": true } },
                "address": { "name": { "type": "string", "required": true } },
                "host": { "name": { "type": "string", "required": true } }
            }
        }"#;
        let schema = parse_provider_schema(json).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema).expect("Failed to resolve");

        let keys: Vec<&str> = ir.resources.iter().map(|r| r.type_key.as_str()).collect();
        assert_eq!(keys, vec!["address", "host", "zone"]);
    }

    #[test]
    fn test_synthetic_names_unique_across_resources() {
        let json = r#"{
            "provider": "example",
            "resources": {
                "b_pool": { "member": { "type": "list", "elem": { "fields": {
                    "host": { "type": "string", "required": true } } } } },
                "a_pool": { "member": { "type": "set", "elem": { "fields": {
                    "host": { "type": "string", "required": true } } } } }
            }
        }"#;
        let schema = parse_provider_schema(json).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema).expect("Failed to resolve");

        let names: Vec<&str> = ir.all_types().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["APool_Member_1", "APool", "BPool_Member_2", "BPool"]
        );
        assert_eq!(ir.names.derived(), 2);
    }

    #[test]
    fn test_identity_conflict() {
        let json = r#"{
            "provider": "example",
            "resources": {
                "widget": { "widget_id": { "type": "string" } }
            }
        }"#;
        let schema = parse_provider_schema(json).expect("Failed to parse");
        let result = SchemaIr::from_schema(&schema);
        assert!(matches!(result, Err(SchemaError::IdentityConflict { .. })));
    }

    #[test]
    fn test_type_ref_rust_type() {
        assert_eq!(TypeRef::Float.rust_type(), "f64");
        assert_eq!(
            TypeRef::List(Box::new(TypeRef::List(Box::new(TypeRef::Int)))).rust_type(),
            "Vec<Vec<i64>>"
        );
        assert_eq!(
            TypeRef::Map.rust_type(),
            "std::collections::BTreeMap<String, String>"
        );
        let obj = TypeRef::List(Box::new(TypeRef::Object("Widget_Rule_1".to_string())));
        assert_eq!(obj.object_name(), Some("Widget_Rule_1"));
        assert_eq!(TypeRef::Bool.object_name(), None);
    }

    #[test]
    fn test_field_descriptor_keyword_ident() {
        let field = FieldDescriptor::new("type", TypeRef::String, true);
        assert_eq!(field.name, "Type");
        assert_eq!(field.ident, "r#type");
        assert_eq!(field.schema_name, "type");
    }
}
