//! # tfbridge Codegen
//!
//! Code generation from provider schemas.
//!
//! This crate provides:
//! - Typed resource and nested object struct generation
//! - Create/read/delete handler generation
//! - The `initialize` service binding
//! - Atomic artifact output and build script integration

pub mod build;
pub mod error;
pub mod generator;
pub mod output;
pub mod rust;

use std::path::Path;

pub use error::CodegenError;
pub use generator::{Generator, GeneratorConfig};
pub use output::write_artifact;

/// Generates Rust code from a JSON provider schema string.
///
/// # Arguments
/// * `json` - Provider schema content
/// * `config` - Generation settings
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_json(json: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let schema = tfbridge_schema::parse_provider_schema(json)?;
    let ir = tfbridge_schema::SchemaIr::from_schema(&schema)?;
    Generator::new(&ir, config).generate()
}

/// Generates Rust code from a JSON provider schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &Path, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config)
}

/// Generates Rust code from a schema file and writes it to `out`.
///
/// The artifact is fully generated before anything is written, so a
/// failing schema never leaves a file behind.
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails.
pub fn generate_to_file(
    schema_path: &Path,
    out: &Path,
    config: &GeneratorConfig,
) -> Result<(), CodegenError> {
    let code = generate_from_file(schema_path, config)?;
    write_artifact(out, &code)
}
