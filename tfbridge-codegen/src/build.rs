//! Build script integration.
//!
//! Typical `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     tfbridge_codegen::build::generate_to_out_dir(
//!         "schema/provider.json".as_ref(),
//!         None,
//!         "bridge.rs",
//!     )
//!     .expect("Failed to generate bridge");
//! }
//! ```
//!
//! and in the crate:
//!
//! ```ignore
//! include!(concat!(env!("OUT_DIR"), "/bridge.rs"));
//! ```

use std::path::{Path, PathBuf};

use crate::error::CodegenError;
use crate::generator::GeneratorConfig;

/// Generates an artifact from a schema file into `OUT_DIR`.
///
/// # Arguments
/// * `schema_path` - Path to the JSON provider schema
/// * `namespace` - Namespace override, or `None` for the provider name
/// * `file_name` - Name of the artifact inside `OUT_DIR`
///
/// # Returns
/// Full path of the written artifact.
///
/// # Errors
/// Returns `CodegenError::MissingEnv` outside a build script, or any
/// generation or IO error.
pub fn generate_to_out_dir(
    schema_path: &Path,
    namespace: Option<&str>,
    file_name: &str,
) -> Result<PathBuf, CodegenError> {
    let out_dir = std::env::var_os("OUT_DIR").ok_or_else(|| CodegenError::MissingEnv {
        name: "OUT_DIR".to_string(),
    })?;
    println!("cargo:rerun-if-changed={}", schema_path.display());

    let mut config = GeneratorConfig::new();
    if let Some(ns) = namespace {
        config = config.namespace(ns);
    }

    let out_path = Path::new(&out_dir).join(file_name);
    crate::generate_to_file(schema_path, &out_path, &config)?;
    Ok(out_path)
}
