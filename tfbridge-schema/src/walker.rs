//! Recursive schema walk.
//!
//! Converts one block of field schemas into an ordered list of
//! [`FieldDescriptor`]s. Nested object elements become synthetic types,
//! which are appended to the caller's `nested` list innermost first.

use std::collections::HashMap;

use crate::error::SchemaError;
use crate::ir::{FieldDescriptor, GeneratedType, TypeRef};
use crate::naming::{NameContext, to_pascal_case};
use crate::types::{Element, FieldSchema, SchemaKind};

/// Walks a block of fields belonging to `parent`.
///
/// Fields are visited in ascending normalized-name order, so both the
/// returned list and the synthetic names are independent of the input
/// map's iteration order.
///
/// # Errors
/// Returns `SchemaError::DuplicateField` if two fields normalize to the
/// same name or identifier.
pub fn walk_fields(
    parent: &str,
    fields: &HashMap<String, FieldSchema>,
    mut ctx: NameContext,
    nested: &mut Vec<GeneratedType>,
) -> Result<(Vec<FieldDescriptor>, NameContext), SchemaError> {
    let mut names: Vec<(String, &str)> = fields
        .keys()
        .map(|raw| (to_pascal_case(raw), raw.as_str()))
        .collect();
    names.sort_unstable();

    let mut descriptors: Vec<FieldDescriptor> = Vec::with_capacity(names.len());
    for (_, raw) in names {
        let schema = &fields[raw];
        let (type_ref, next) = resolve_kind(parent, raw, &schema.kind, ctx, nested)?;
        ctx = next;

        let descriptor = FieldDescriptor::new(raw, type_ref, schema.required);
        if let Some(prev) = descriptors
            .iter()
            .find(|d| d.name == descriptor.name || d.ident == descriptor.ident)
        {
            return Err(SchemaError::DuplicateField {
                parent: parent.to_string(),
                first: prev.schema_name.clone(),
                second: descriptor.schema_name,
                normalized: descriptor.name,
            });
        }
        descriptors.push(descriptor);
    }

    Ok((descriptors, ctx))
}

/// Maps one field kind to its semantic type.
fn resolve_kind(
    parent: &str,
    field: &str,
    kind: &SchemaKind,
    ctx: NameContext,
    nested: &mut Vec<GeneratedType>,
) -> Result<(TypeRef, NameContext), SchemaError> {
    match kind {
        SchemaKind::Bool => Ok((TypeRef::Bool, ctx)),
        SchemaKind::Int => Ok((TypeRef::Int, ctx)),
        SchemaKind::Float => Ok((TypeRef::Float, ctx)),
        SchemaKind::String => Ok((TypeRef::String, ctx)),
        SchemaKind::Map => Ok((TypeRef::Map, ctx)),
        // Sets carry no ordering guarantee of their own; they are emitted as lists.
        SchemaKind::List(elem) | SchemaKind::Set(elem) => {
            let (elem_ref, ctx) = resolve_element(parent, field, elem, ctx, nested)?;
            Ok((TypeRef::List(Box::new(elem_ref)), ctx))
        }
    }
}

fn resolve_element(
    parent: &str,
    field: &str,
    elem: &Element,
    ctx: NameContext,
    nested: &mut Vec<GeneratedType>,
) -> Result<(TypeRef, NameContext), SchemaError> {
    match elem {
        Element::Schema(inner) => resolve_kind(parent, field, &inner.kind, ctx, nested),
        Element::Resource(block) => {
            let (name, ctx) = ctx.derive(parent, field);
            let (fields, ctx) = walk_fields(&name, &block.fields, ctx, nested)?;
            tracing::trace!("Derived nested type {} ({} fields)", name, fields.len());
            nested.push(GeneratedType {
                name: name.clone(),
                fields,
                identity: None,
            });
            Ok((TypeRef::Object(name), ctx))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResourceSchema;

    fn walk(
        parent: &str,
        block: &ResourceSchema,
    ) -> (Vec<FieldDescriptor>, Vec<GeneratedType>, NameContext) {
        let mut nested = Vec::new();
        let (fields, ctx) = walk_fields(parent, &block.fields, NameContext::new(), &mut nested)
            .expect("Failed to walk");
        (fields, nested, ctx)
    }

    #[test]
    fn test_primitive_mapping() {
        let block = ResourceSchema::new()
            .with_field("enabled", FieldSchema::required(SchemaKind::Bool))
            .with_field("port", FieldSchema::required(SchemaKind::Int))
            .with_field("ratio", FieldSchema::required(SchemaKind::Float))
            .with_field("label", FieldSchema::required(SchemaKind::String))
            .with_field("labels", FieldSchema::required(SchemaKind::Map));

        let (fields, nested, _) = walk("Widget", &block);
        let types: Vec<(&str, &TypeRef)> = fields
            .iter()
            .map(|f| (f.schema_name.as_str(), &f.type_ref))
            .collect();

        assert_eq!(
            types,
            vec![
                ("enabled", &TypeRef::Bool),
                ("label", &TypeRef::String),
                ("labels", &TypeRef::Map),
                ("port", &TypeRef::Int),
                ("ratio", &TypeRef::Float),
            ]
        );
        assert!(nested.is_empty());
    }

    #[test]
    fn test_optional_fields_are_wrapped() {
        let block = ResourceSchema::new()
            .with_field("name", FieldSchema::required(SchemaKind::String))
            .with_field("count", FieldSchema::optional(SchemaKind::Int));

        let (fields, _, _) = walk("Widget", &block);
        assert_eq!(fields[0].rust_type(), "Option<i64>");
        assert_eq!(fields[1].rust_type(), "String");
    }

    #[test]
    fn test_collections_of_primitives() {
        let block = ResourceSchema::new()
            .with_field("tags", FieldSchema::required(SchemaKind::list_of(SchemaKind::String)))
            .with_field("ports", FieldSchema::required(SchemaKind::set_of(SchemaKind::Int)))
            .with_field(
                "matrix",
                FieldSchema::required(SchemaKind::list_of(SchemaKind::list_of(SchemaKind::Float))),
            );

        let (fields, nested, ctx) = walk("Widget", &block);
        assert_eq!(fields[0].rust_type(), "Vec<Vec<f64>>");
        assert_eq!(fields[1].rust_type(), "Vec<i64>");
        assert_eq!(fields[2].rust_type(), "Vec<String>");
        assert!(nested.is_empty());
        assert_eq!(ctx.derived(), 0);
    }

    #[test]
    fn test_nested_object_list_and_set() {
        let rule = ResourceSchema::new()
            .with_field("port", FieldSchema::required(SchemaKind::Int))
            .with_field("cidr", FieldSchema::optional(SchemaKind::String));
        let block = ResourceSchema::new()
            .with_field("ingress", FieldSchema::optional(SchemaKind::set_of_block(rule.clone())))
            .with_field("egress", FieldSchema::optional(SchemaKind::list_of_block(rule)));

        let (fields, nested, ctx) = walk("Firewall", &block);

        assert_eq!(fields[0].rust_type(), "Option<Vec<Firewall_Egress_1>>");
        assert_eq!(fields[1].rust_type(), "Option<Vec<Firewall_Ingress_2>>");
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].name, "Firewall_Egress_1");
        assert_eq!(nested[1].name, "Firewall_Ingress_2");
        assert!(nested.iter().all(|t| !t.is_resource()));

        let inner: Vec<&str> = nested[0].fields.iter().map(|f| f.schema_name.as_str()).collect();
        assert_eq!(inner, vec!["cidr", "port"]);
        assert_eq!(ctx.derived(), 2);
    }

    #[test]
    fn test_deeply_nested_discovery_order() {
        let inner = ResourceSchema::new().with_field("key", FieldSchema::required(SchemaKind::String));
        let middle = ResourceSchema::new()
            .with_field("selector", FieldSchema::required(SchemaKind::list_of_block(inner)));
        let block = ResourceSchema::new()
            .with_field("rule", FieldSchema::required(SchemaKind::list_of_block(middle)));

        let (fields, nested, _) = walk("Policy", &block);

        assert_eq!(fields[0].type_ref.object_name(), Some("Policy_Rule_1"));
        let names: Vec<&str> = nested.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Policy_Rule_1_Selector_2", "Policy_Rule_1"]);
    }

    #[test]
    fn test_walk_is_stable_within_a_run() {
        let rule = ResourceSchema::new().with_field("port", FieldSchema::required(SchemaKind::Int));
        let block = ResourceSchema::new()
            .with_field("a_rule", FieldSchema::required(SchemaKind::list_of_block(rule.clone())))
            .with_field("b_rule", FieldSchema::required(SchemaKind::list_of_block(rule)));

        let (first, first_nested, _) = walk("Widget", &block);
        let (second, second_nested, _) = walk("Widget", &block);
        assert_eq!(first, second);
        assert_eq!(first_nested, second_nested);
    }

    #[test]
    fn test_duplicate_normalized_field() {
        let block = ResourceSchema::new()
            .with_field("foo_bar", FieldSchema::required(SchemaKind::String))
            .with_field("fooBar", FieldSchema::required(SchemaKind::String));

        let mut nested = Vec::new();
        let result = walk_fields("Widget", &block.fields, NameContext::new(), &mut nested);
        assert!(matches!(result, Err(SchemaError::DuplicateField { .. })));
    }
}
