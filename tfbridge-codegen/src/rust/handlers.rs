//! Handler code generation.
//!
//! Each resource gets a handler struct holding the shared provider handle
//! and a `ResourceHandler` implementation that forwards create, read and
//! delete to the runtime bridge under the resource's provider type key.

use tfbridge_schema::ir::{GeneratedHandler, ResolvedResource};

/// Generator for resource handlers.
pub struct HandlerGenerator;

impl HandlerGenerator {
    /// Creates a new handler generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generates the handler struct and its `ResourceHandler` impl.
    #[must_use]
    pub fn generate(&self, resource: &ResolvedResource) -> String {
        let mut output = String::new();
        output.push_str(&self.generate_struct(&resource.handler));
        output.push_str(&self.generate_impl(resource));
        output
    }

    /// Generates the handler struct and constructor.
    fn generate_struct(&self, handler: &GeneratedHandler) -> String {
        let mut output = String::new();
        let name = handler.handler_name();

        output.push_str(&format!(
            "/// Create/read/delete handler for `{}` resources.\n",
            handler.provider_type_key
        ));
        output.push_str(&format!("pub struct {} {{\n", name));
        output.push_str("    provider: std::sync::Arc<dyn Provider>,\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl {} {{\n", name));
        output.push_str("    /// Creates a handler over the shared provider handle.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub fn new(provider: std::sync::Arc<dyn Provider>) -> Self {\n");
        output.push_str("        Self { provider }\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }

    /// Generates the `ResourceHandler` implementation.
    fn generate_impl(&self, resource: &ResolvedResource) -> String {
        let mut output = String::new();
        let handler = &resource.handler;
        let title = &handler.resource_title;
        let key = format!("{:?}", handler.provider_type_key);
        let identity = resource
            .resource_type
            .identity
            .as_ref()
            .map(|i| i.ident.as_str())
            .unwrap_or("id");

        output.push_str(&format!(
            "impl ResourceHandler for {} {{\n",
            handler.handler_name()
        ));
        output.push_str(&format!("    type Resource = {};\n\n", title));

        // create: provider create, then read back the canonical state
        output.push_str(&format!(
            "    fn create(&self, desired: &{title}) -> Result<({title}, String), BridgeError> {{\n"
        ));
        output.push_str(&format!(
            "        bridge::create_then_read(self.provider.as_ref(), {}, desired, |external_id| {{\n",
            key
        ));
        output.push_str("            self.read(external_id)\n");
        output.push_str("        })\n");
        output.push_str("    }\n\n");

        // read: unmarshal and stamp the identity field
        output.push_str(&format!(
            "    fn read(&self, external_id: &str) -> Result<{}, BridgeError> {{\n",
            title
        ));
        output.push_str(&format!(
            "        let mut actual: {} = bridge::read(self.provider.as_ref(), {}, external_id)?;\n",
            title, key
        ));
        output.push_str(&format!(
            "        actual.{} = Some(external_id.to_string());\n",
            identity
        ));
        output.push_str("        Ok(actual)\n");
        output.push_str("    }\n\n");

        output.push_str("    fn delete(&self, external_id: &str) -> Result<(), BridgeError> {\n");
        output.push_str(&format!(
            "        bridge::delete(self.provider.as_ref(), {}, external_id)\n",
            key
        ));
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }
}

impl Default for HandlerGenerator {
    fn default() -> Self {
        Self::new()
    }
}
