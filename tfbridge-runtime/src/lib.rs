//! # tfbridge Runtime
//!
//! Service runtime surface consumed by generated resource bindings.
//!
//! This crate provides:
//! - The [`Provider`] trait through which handlers reach real infrastructure
//! - Marshal/unmarshal between typed resources and raw provider state
//! - Bridge primitives used by generated create/read/delete handlers
//! - Handler traits and the [`ServiceBuilder`] registry
//! - An in-memory [`MockProvider`] for tests
//!
//! Generated code refers to `serde` through this crate, so consumers only
//! need a dependency on `tfbridge-runtime`.

pub mod bridge;
pub mod builder;
pub mod error;
pub mod handler;
pub mod marshal;
pub mod mock;
pub mod provider;

pub use builder::{RegisteredType, Service, ServiceBuilder};
pub use error::{BridgeError, ProviderError, ServiceError};
pub use handler::{ErasedHandler, ResourceHandler, ResourceType};
pub use marshal::{marshal, unmarshal};
pub use mock::{MockProvider, ProviderCall};
pub use provider::{Provider, RawConfig, RawState};

pub use serde;
pub use serde_json;
