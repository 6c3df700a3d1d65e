//! Artifact assembly.
//!
//! The [`Generator`] renders the whole artifact into one in-memory buffer:
//! the fixed preamble, the `initialize` entry point, then per resource its
//! nested types, resource type and handler. Nothing touches the filesystem
//! here; see [`crate::output`] for the atomic write.

use tfbridge_schema::SchemaIr;
use tfbridge_schema::naming::to_pascal_case;

use crate::error::CodegenError;
use crate::rust::{BinderGenerator, HandlerGenerator, TypeGenerator};

/// Default crate path emitted code uses to reach the runtime.
pub const DEFAULT_RUNTIME_PATH: &str = "tfbridge_runtime";

/// First line of every artifact.
pub const GENERATED_HEADER: &str = "// Code generated by tfbridge. DO NOT EDIT.";

/// Namespace used when the provider has no usable name.
const FALLBACK_NAMESPACE: &str = "Bridge";

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    namespace: Option<String>,
    runtime_path: String,
    verify_output: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: None,
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            verify_output: true,
        }
    }

    /// Sets the namespace qualifying registered names.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the crate path used to reach the runtime.
    #[must_use]
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Sets whether the artifact is parsed before it is returned.
    #[must_use]
    pub fn verify_output(mut self, verify: bool) -> Self {
        self.verify_output = verify;
        self
    }

    /// Returns the namespace for a provider, falling back to the provider
    /// name in PascalCase.
    #[must_use]
    pub fn namespace_for(&self, provider: &str) -> String {
        match &self.namespace {
            Some(ns) => ns.clone(),
            None => {
                let ns = to_pascal_case(provider);
                if ns.is_empty() {
                    FALLBACK_NAMESPACE.to_string()
                } else {
                    ns
                }
            }
        }
    }

    /// Returns the runtime crate path.
    #[must_use]
    pub fn get_runtime_path(&self) -> &str {
        &self.runtime_path
    }

    /// Returns true if output verification is enabled.
    #[must_use]
    pub fn verifies_output(&self) -> bool {
        self.verify_output
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Main code generator.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given IR.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the complete artifact.
    ///
    /// # Errors
    /// Returns `CodegenError::Render` if verification is enabled and the
    /// emitted source does not parse.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let namespace = self.config.namespace_for(&self.ir.provider);
        tracing::info!(
            "Generating {} resources for provider {} (namespace {})",
            self.ir.resources.len(),
            self.ir.provider,
            namespace
        );

        let mut output = String::new();
        output.push_str(&self.generate_preamble());
        output.push_str(&BinderGenerator::new(self.ir, &namespace).generate());

        let types = TypeGenerator::new(self.config.get_runtime_path());
        let handlers = HandlerGenerator::new();
        for resource in &self.ir.resources {
            tracing::debug!(
                "Emitting {} with {} nested types and {}",
                resource.resource_type.name,
                resource.nested.len(),
                resource.handler.handler_name()
            );
            output.push_str(&types.generate(resource));
            output.push_str(&handlers.generate(resource));
        }

        if self.config.verifies_output() {
            verify(&output)?;
        }
        Ok(output)
    }

    /// Generates the header and the runtime import block.
    fn generate_preamble(&self) -> String {
        let mut output = String::new();

        output.push_str(GENERATED_HEADER);
        output.push('\n');
        output.push_str(&format!("// Provider: {:?}\n\n", self.ir.provider));
        output.push_str("#[allow(unused_imports)]\n");
        output.push_str(&format!(
            "use {}::{{BridgeError, Provider, ResourceHandler, ResourceType, ServiceBuilder, ServiceError, bridge}};\n\n",
            self.config.get_runtime_path()
        ));

        output
    }
}

/// Parses emitted source as a Rust file.
fn verify(source: &str) -> Result<(), CodegenError> {
    syn::parse_file(source)
        .map(|_| ())
        .map_err(|e| CodegenError::render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfbridge_schema::parse_provider_schema;

    fn create_test_ir() -> SchemaIr {
        let json = r#"{
            "provider": "example_cloud",
            "resources": {
                "widget": {
                    "name":  { "type": "string", "required": true },
                    "rule":  { "type": "list", "elem": { "fields": {
                        "port": { "type": "int", "required": true } } } }
                },
                "gadget": { "size": { "type": "float" } }
            }
        }"#;
        let schema = parse_provider_schema(json).expect("Failed to parse");
        SchemaIr::from_schema(&schema).expect("Failed to resolve")
    }

    #[test]
    fn test_generator_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.get_runtime_path(), "tfbridge_runtime");
        assert!(config.verifies_output());
        assert_eq!(config.namespace_for("example_cloud"), "ExampleCloud");
        assert_eq!(config.namespace_for(""), "Bridge");
    }

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::new()
            .namespace("Acme")
            .runtime_path("tfbridge::runtime")
            .verify_output(false);
        assert_eq!(config.namespace_for("example_cloud"), "Acme");
        assert_eq!(config.get_runtime_path(), "tfbridge::runtime");
        assert!(!config.verifies_output());
    }

    #[test]
    fn test_generate_section_order() {
        let ir = create_test_ir();
        let config = GeneratorConfig::new();
        let code = Generator::new(&ir, &config).generate().expect("Failed to generate");

        assert!(code.starts_with(GENERATED_HEADER));
        let positions: Vec<usize> = [
            "use tfbridge_runtime::{",
            "pub fn initialize(",
            "pub struct Gadget {",
            "pub struct GadgetHandler {",
            "pub struct Widget_Rule_1 {",
            "pub struct Widget {",
            "pub struct WidgetHandler {",
        ]
        .iter()
        .map(|s| code.find(s).expect("section missing"))
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = GeneratorConfig::new();
        let first = Generator::new(&create_test_ir(), &config)
            .generate()
            .expect("Failed to generate");
        let second = Generator::new(&create_test_ir(), &config)
            .generate()
            .expect("Failed to generate");
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_verifies_output() {
        let ir = create_test_ir();
        let config = GeneratorConfig::new().runtime_path("not a path");
        let result = Generator::new(&ir, &config).generate();
        assert!(matches!(result, Err(CodegenError::Render { .. })));

        let config = config.verify_output(false);
        assert!(Generator::new(&ir, &config).generate().is_ok());
    }

    #[test]
    fn test_generated_source_parses() {
        let ir = create_test_ir();
        let config = GeneratorConfig::new().verify_output(false);
        let code = Generator::new(&ir, &config).generate().expect("Failed to generate");
        assert!(syn::parse_file(&code).is_ok());
    }
}
