//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tfbridge::prelude::*;
//! ```

// Schema types
pub use tfbridge_schema::{
    FieldSchema, ParseError, ProviderSchema, ResourceSchema, SchemaError, SchemaIr, SchemaKind,
    parse_provider_schema, parse_provider_schema_file,
};

// Codegen types
pub use tfbridge_codegen::{
    CodegenError, Generator, GeneratorConfig, generate_from_file, generate_from_json,
    generate_to_file,
};

// Runtime types
pub use tfbridge_runtime::{
    BridgeError, MockProvider, Provider, ProviderCall, ProviderError, RawConfig, RawState,
    RegisteredType, ResourceHandler, ResourceType, Service, ServiceBuilder, ServiceError,
};
