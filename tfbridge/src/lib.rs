//! # tfbridge
//!
//! Compile a provider's resource schema into typed Rust resource bindings.
//!
//! A provider schema describes resource types as nested maps of field
//! schemas. tfbridge walks that schema, gives every anonymous nested block
//! a stable synthetic name, and emits one Rust source file holding:
//!
//! - a typed struct per resource and per nested block
//! - a create/read/delete handler per resource
//! - an `initialize` function registering them with a [`ServiceBuilder`]
//!
//! ## Quick Start
//!
//! ```ignore
//! // build.rs
//! tfbridge_codegen::build::generate_to_out_dir("provider.json".as_ref(), None, "bridge.rs")?;
//!
//! // src/lib.rs
//! mod bridge {
//!     include!(concat!(env!("OUT_DIR"), "/bridge.rs"));
//! }
//!
//! let mut sb = ServiceBuilder::new("example");
//! bridge::initialize(&mut sb, std::sync::Arc::new(MyProvider::connect()?))?;
//! let service = sb.build();
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Provider schema model, parsing and the schema walker
//! - [`codegen`] - Rust code generation and artifact output
//! - [`runtime`] - Provider interface, handler traits and service registry

pub mod cli;
pub mod prelude;

/// Provider schema model, parsing and validation.
pub mod schema {
    pub use tfbridge_schema::*;
}

/// Code generation from provider schemas.
pub mod codegen {
    pub use tfbridge_codegen::*;
}

/// Runtime surface used by generated code.
pub mod runtime {
    pub use tfbridge_runtime::*;
}

// Re-export commonly used items at the crate root
pub use tfbridge_codegen::{CodegenError, Generator, GeneratorConfig};
pub use tfbridge_runtime::{Provider, ResourceHandler, ResourceType, Service, ServiceBuilder};
pub use tfbridge_schema::{ProviderSchema, SchemaIr, parse_provider_schema};
