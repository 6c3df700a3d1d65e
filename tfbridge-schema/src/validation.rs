//! Schema validation utilities.
//!
//! This module checks that a provider schema can be turned into generated
//! Rust items: every name must become an identifier, and no two resources
//! may claim the same generated type or handler name.

use std::collections::BTreeMap;

use crate::error::SchemaError;
use crate::naming::{is_valid_name, to_pascal_case};
use crate::types::{Element, ProviderSchema, ResourceSchema};

/// Validates a parsed provider schema.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &ProviderSchema) -> Result<(), SchemaError> {
    validate_resource_names(schema)?;
    for type_key in schema.sorted_type_keys() {
        validate_block(&schema.resources[type_key])?;
    }
    Ok(())
}

/// Type names the generated module already uses.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "BridgeError",
    "Clone",
    "Debug",
    "Default",
    "Err",
    "None",
    "Ok",
    "Option",
    "PartialEq",
    "Provider",
    "ResourceHandler",
    "ResourceType",
    "Result",
    "Self",
    "ServiceBuilder",
    "ServiceError",
    "Some",
    "String",
    "Vec",
];

/// Validates resource type keys and the names generated from them.
fn validate_resource_names(schema: &ProviderSchema) -> Result<(), SchemaError> {
    let mut titles: BTreeMap<String, &str> = BTreeMap::new();

    for type_key in schema.sorted_type_keys() {
        if !is_valid_name(type_key) {
            return Err(SchemaError::invalid_name("resource", type_key));
        }

        let title = to_pascal_case(type_key);
        if !title.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(SchemaError::invalid_name("resource", type_key));
        }
        let handler = format!("{}Handler", title);
        for name in [&title, &handler] {
            if RESERVED_TYPE_NAMES.contains(&name.as_str()) {
                return Err(SchemaError::validation(format!(
                    "resource '{}' generates reserved type name '{}'",
                    type_key, name
                )));
            }
        }
        if let Some(first) = titles.insert(title.clone(), type_key) {
            return Err(SchemaError::DuplicateResource {
                first: first.to_string(),
                second: type_key.to_string(),
                type_name: title,
            });
        }
    }

    // A resource titled `FooHandler` would shadow the handler of `foo`.
    for (title, type_key) in &titles {
        let handler = format!("{}Handler", title);
        if let Some(other) = titles.get(&handler) {
            return Err(SchemaError::DuplicateResource {
                first: (*type_key).to_string(),
                second: (*other).to_string(),
                type_name: handler,
            });
        }
    }

    Ok(())
}

/// Validates field names of a block, recursing into nested blocks.
fn validate_block(block: &ResourceSchema) -> Result<(), SchemaError> {
    for (name, field) in &block.fields {
        if !is_valid_name(name) {
            return Err(SchemaError::invalid_name("field", name));
        }

        let mut elem = field.kind.element();
        while let Some(current) = elem {
            match current {
                Element::Resource(nested) => {
                    validate_block(nested)?;
                    elem = None;
                }
                Element::Schema(inner) => elem = inner.kind.element(),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_provider_schema;

    #[test]
    fn test_validate_valid_schema() {
        let json = r#"{
            "provider": "example",
            "resources": {
                "widget": { "name": { "type": "string", "required": true } },
                "gadget": { "size": { "type": "int" } }
            }
        }"#;

        let schema = parse_provider_schema(json).expect("Failed to parse");
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_validate_invalid_field_name() {
        let json = r#"{
            "resources": { "widget": { "bad-name": { "type": "string" } } }
        }"#;

        let schema = parse_provider_schema(json).expect("Failed to parse");
        let result = validate_schema(&schema);
        assert!(matches!(result, Err(SchemaError::InvalidName { .. })));
    }

    #[test]
    fn test_validate_invalid_nested_field_name() {
        let json = r#"{
            "resources": { "widget": { "rules": { "type": "list", "elem": {
                "type": "list", "elem": { "fields": { "9lives": { "type": "int" } } } } } } }
        }"#;

        let schema = parse_provider_schema(json).expect("Failed to parse");
        let result = validate_schema(&schema);
        assert!(matches!(result, Err(SchemaError::InvalidName { .. })));
    }

    #[test]
    fn test_validate_invalid_resource_name() {
        let json = r#"{
            "resources": { "my.widget": { "name": { "type": "string" } } }
        }"#;

        let schema = parse_provider_schema(json).expect("Failed to parse");
        let result = validate_schema(&schema);
        assert!(matches!(result, Err(SchemaError::InvalidName { .. })));
    }

    #[test]
    fn test_validate_duplicate_resource_title() {
        let json = r#"{
            "resources": {
                "aws_instance": { "name": { "type": "string" } },
                "awsInstance": { "name": { "type": "string" } }
            }
        }"#;

        let schema = parse_provider_schema(json).expect("Failed to parse");
        let result = validate_schema(&schema);
        assert!(matches!(result, Err(SchemaError::DuplicateResource { .. })));
    }

    #[test]
    fn test_validate_reserved_type_name() {
        let json = r#"{
            "resources": { "provider": { "name": { "type": "string" } } }
        }"#;

        let schema = parse_provider_schema(json).expect("Failed to parse");
        let result = validate_schema(&schema);
        assert!(matches!(result, Err(SchemaError::Validation { .. })));

        // `resource` would emit a `ResourceHandler` struct.
        let json = r#"{
            "resources": { "resource": { "name": { "type": "string" } } }
        }"#;
        let schema = parse_provider_schema(json).expect("Failed to parse");
        assert!(validate_schema(&schema).is_err());

        let json = r#"{
            "resources": { "self": { "name": { "type": "string" } } }
        }"#;
        let schema = parse_provider_schema(json).expect("Failed to parse");
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::Validation { .. })
        ));
    }

    #[test]
    fn test_validate_title_must_start_with_letter() {
        for key in ["_1x", "__2d", "_9"] {
            let json = format!(
                r#"{{ "resources": {{ "{}": {{ "name": {{ "type": "string" }} }} }} }}"#,
                key
            );
            let schema = parse_provider_schema(&json).expect("Failed to parse");
            assert!(
                matches!(validate_schema(&schema), Err(SchemaError::InvalidName { .. })),
                "{} should be rejected",
                key
            );
        }

        // A leading underscore is fine when a letter follows.
        let json = r#"{
            "resources": { "_private_widget": { "name": { "type": "string" } } }
        }"#;
        let schema = parse_provider_schema(json).expect("Failed to parse");
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_validate_handler_name_clash() {
        let json = r#"{
            "resources": {
                "widget": { "name": { "type": "string" } },
                "widget_handler": { "name": { "type": "string" } }
            }
        }"#;

        let schema = parse_provider_schema(json).expect("Failed to parse");
        let result = validate_schema(&schema);
        assert!(matches!(result, Err(SchemaError::DuplicateResource { .. })));
    }
}
