//! Type definition code generation.

use tfbridge_schema::ir::{FieldDescriptor, GeneratedType, ResolvedResource};

/// Generator for resource and nested object structs.
pub struct TypeGenerator<'a> {
    runtime_path: &'a str,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    ///
    /// # Arguments
    /// * `runtime_path` - Path under which emitted code reaches the runtime
    #[must_use]
    pub fn new(runtime_path: &'a str) -> Self {
        Self { runtime_path }
    }

    /// Generates the nested types of a resource followed by the resource
    /// type itself.
    #[must_use]
    pub fn generate(&self, resource: &ResolvedResource) -> String {
        let mut output = String::new();

        for nested in &resource.nested {
            output.push_str(&self.generate_struct(nested, None));
        }
        output.push_str(&self.generate_struct(&resource.resource_type, Some(&resource.type_key)));
        output.push_str(&self.generate_resource_impl(&resource.resource_type));

        output
    }

    /// Generates a struct definition.
    fn generate_struct(&self, ty: &GeneratedType, type_key: Option<&str>) -> String {
        let mut output = String::new();

        match type_key {
            Some(key) => output.push_str(&format!("/// `{}` resource.\n", key)),
            None => {
                output.push_str(&format!("/// Nested object of `{}`.\n", parent_of(&ty.name)));
                output.push_str("#[allow(non_camel_case_types)]\n");
            }
        }
        output.push_str(&format!(
            "#[derive(Debug, Clone, Default, PartialEq, {rt}::serde::Serialize, {rt}::serde::Deserialize)]\n",
            rt = self.runtime_path
        ));
        output.push_str(&format!(
            "#[serde(crate = \"{}::serde\")]\n",
            self.runtime_path
        ));
        output.push_str(&format!("pub struct {} {{\n", ty.name));

        if let Some(identity) = &ty.identity {
            output.push_str("    /// External identifier assigned by the provider.\n");
            output.push_str("    #[serde(skip)]\n");
            output.push_str(&format!("    pub {}: Option<String>,\n", identity.ident));
        }
        for field in &ty.fields {
            output.push_str(&self.generate_field(field));
        }

        output.push_str("}\n\n");
        output
    }

    /// Generates a single struct field.
    fn generate_field(&self, field: &FieldDescriptor) -> String {
        let mut output = String::new();

        if field.required {
            output.push_str(&format!(
                "    #[serde(rename = {:?})]\n",
                field.schema_name
            ));
        } else {
            output.push_str(&format!(
                "    #[serde(rename = {:?}, default, skip_serializing_if = \"Option::is_none\")]\n",
                field.schema_name
            ));
        }
        output.push_str(&format!("    pub {}: {},\n", field.ident, field.rust_type()));

        output
    }

    /// Generates the `ResourceType` implementation of a top-level type.
    fn generate_resource_impl(&self, ty: &GeneratedType) -> String {
        let mut output = String::new();
        let Some(identity) = &ty.identity else {
            return output;
        };

        output.push_str(&format!("impl ResourceType for {} {{\n", ty.name));
        output.push_str(&format!(
            "    const TYPE_NAME: &'static str = {:?};\n",
            ty.name
        ));
        output.push_str(&format!(
            "    const IDENTITY_FIELD: &'static str = {:?};\n\n",
            identity.ident
        ));
        output.push_str("    fn external_id(&self) -> Option<&str> {\n");
        output.push_str(&format!("        self.{}.as_deref()\n", identity.ident));
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }
}

/// Returns the enclosing type of a synthetic name (`Widget_Rule_1` gives
/// `Widget`).
fn parent_of(name: &str) -> &str {
    name.rsplitn(3, '_').nth(2).unwrap_or(name)
}
