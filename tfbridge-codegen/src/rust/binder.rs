//! Service binding code generation.

use tfbridge_schema::ir::SchemaIr;

/// Generator for the `initialize` entry point.
pub struct BinderGenerator<'a> {
    ir: &'a SchemaIr,
    namespace: &'a str,
}

impl<'a> BinderGenerator<'a> {
    /// Creates a new binder generator.
    ///
    /// # Arguments
    /// * `ir` - Resolved schema
    /// * `namespace` - Prefix for registered type and handler names
    #[must_use]
    pub fn new(ir: &'a SchemaIr, namespace: &'a str) -> Self {
        Self { ir, namespace }
    }

    /// Generates the `initialize` function registering every resource.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let ns = format!("{:?}", self.namespace);

        output.push_str("/// Registers every generated resource type and handler.\n");
        output.push_str("///\n");
        output.push_str("/// # Errors\n");
        output.push_str("/// Returns `ServiceError` if a name is already registered.\n");
        output.push_str("pub fn initialize(\n");
        output.push_str("    sb: &mut ServiceBuilder,\n");
        output.push_str("    provider: std::sync::Arc<dyn Provider>,\n");
        output.push_str(") -> Result<(), ServiceError> {\n");

        if self.ir.resources.is_empty() {
            output.push_str("    let _ = (sb, provider);\n");
        }
        for resource in &self.ir.resources {
            let title = &resource.resource_type.name;
            let handler = resource.handler.handler_name();
            output.push_str(&format!(
                "    let ty = sb.register_type::<{}>({})?;\n",
                title, ns
            ));
            output.push_str(&format!(
                "    sb.register_handler({:?}, {}::new(std::sync::Arc::clone(&provider)), &ty)?;\n",
                format!("{}::{}", self.namespace, handler),
                handler
            ));
        }

        output.push_str("    Ok(())\n");
        output.push_str("}\n\n");
        output
    }
}
