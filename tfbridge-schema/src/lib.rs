//! # tfbridge Schema
//!
//! Provider resource schema model and the schema-to-type walker.
//!
//! This crate provides:
//! - Type definitions for provider, resource and field schemas
//! - JSON parsing of provider schema dumps
//! - Schema validation
//! - The recursive walk that derives typed field descriptors and
//!   synthetic nested type names
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod naming;
pub mod parser;
pub mod types;
pub mod validation;
pub mod walker;

pub use error::{ParseError, SchemaError};
pub use ir::{
    FieldDescriptor, GeneratedHandler, GeneratedType, IdentityField, ResolvedResource, SchemaIr,
    TypeRef,
};
pub use naming::NameContext;
pub use parser::{parse_provider_schema, parse_provider_schema_file};
pub use types::{Element, FieldSchema, ProviderSchema, ResourceSchema, SchemaKind};
pub use validation::validate_schema;
