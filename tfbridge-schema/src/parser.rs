//! Provider schema parser.
//!
//! This module parses a JSON provider schema dump into the internal
//! schema representation. The expected document looks like:
//!
//! ```json
//! {
//!   "provider": "example",
//!   "resources": {
//!     "widget": {
//!       "name":  { "type": "string", "required": true },
//!       "rule":  { "type": "set", "elem": { "fields": {
//!                    "port": { "type": "int", "required": true } } } }
//!     }
//!   }
//! }
//! ```
//!
//! Kind names are matched case-insensitively and may carry a `Type`
//! prefix, so dumps using `TypeString`, `TypeList`, ... are accepted too.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::{Element, FieldSchema, ProviderSchema, ResourceSchema, SchemaKind};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProvider {
    #[serde(default)]
    provider: String,
    #[serde(default)]
    resources: HashMap<String, HashMap<String, RawField>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    computed: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    elem: Option<RawElem>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawElem {
    Resource { fields: HashMap<String, RawField> },
    Schema(Box<RawField>),
}

/// Parses a provider schema from a JSON string.
///
/// # Arguments
/// * `json` - JSON schema content
///
/// # Returns
/// Parsed provider schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or declares a kind that has
/// no mapping rule.
pub fn parse_provider_schema(json: &str) -> Result<ProviderSchema, ParseError> {
    let raw: RawProvider = serde_json::from_str(json)?;

    let mut schema = ProviderSchema::new(raw.provider);
    for (type_key, fields) in raw.resources {
        let resource = convert_block(&type_key, fields)?;
        schema.resources.insert(type_key, resource);
    }

    Ok(schema)
}

/// Parses a provider schema from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_provider_schema_file(path: &std::path::Path) -> Result<ProviderSchema, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_provider_schema(&json)
}

fn convert_block(
    path: &str,
    fields: HashMap<String, RawField>,
) -> Result<ResourceSchema, ParseError> {
    let mut block = ResourceSchema::new();
    for (name, raw) in fields {
        let field_path = format!("{}.{}", path, name);
        let field = convert_field(&field_path, raw)?;
        block.fields.insert(name, field);
    }
    Ok(block)
}

fn convert_field(path: &str, raw: RawField) -> Result<FieldSchema, ParseError> {
    let kind = match normalize_kind(&raw.kind).as_str() {
        "bool" | "boolean" => SchemaKind::Bool,
        "int" | "integer" => SchemaKind::Int,
        "float" | "number" => SchemaKind::Float,
        "string" => SchemaKind::String,
        "list" => SchemaKind::List(convert_elem(path, "list", raw.elem)?),
        "set" => SchemaKind::Set(convert_elem(path, "set", raw.elem)?),
        "map" => {
            if let Some(elem) = raw.elem {
                check_map_elem(path, elem)?;
            }
            SchemaKind::Map
        }
        _ => return Err(ParseError::unknown_kind(raw.kind, path)),
    };

    Ok(FieldSchema {
        kind,
        required: raw.required,
        optional: raw.optional || !raw.required,
        computed: raw.computed,
        description: raw.description,
    })
}

fn convert_elem(path: &str, kind: &str, elem: Option<RawElem>) -> Result<Element, ParseError> {
    match elem {
        Some(RawElem::Resource { fields }) => Ok(Element::Resource(convert_block(path, fields)?)),
        Some(RawElem::Schema(inner)) => {
            let mut field = convert_field(path, *inner)?;
            // Elements are always present once the collection is.
            field.required = true;
            field.optional = false;
            Ok(Element::Schema(Box::new(field)))
        }
        None => Err(ParseError::missing_element(path, kind)),
    }
}

fn check_map_elem(path: &str, elem: RawElem) -> Result<(), ParseError> {
    match elem {
        RawElem::Schema(inner) if normalize_kind(&inner.kind) == "string" => Ok(()),
        RawElem::Schema(inner) => Err(ParseError::UnsupportedMapElement {
            field: path.to_string(),
            element: inner.kind,
        }),
        RawElem::Resource { .. } => Err(ParseError::UnsupportedMapElement {
            field: path.to_string(),
            element: "object".to_string(),
        }),
    }
}

/// Lowercases a kind name and strips an optional `type` prefix.
fn normalize_kind(kind: &str) -> String {
    let lower = kind.to_ascii_lowercase();
    match lower.strip_prefix("type") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => lower,
    }
}
