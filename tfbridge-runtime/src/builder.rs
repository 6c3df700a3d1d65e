//! Service builder and type-erased dispatcher.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::ServiceError;
use crate::handler::{ErasedHandler, ResourceHandler, ResourceType};

/// Handle to a type registered with a [`ServiceBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredType {
    name: String,
    type_id: TypeId,
}

impl RegisteredType {
    /// Returns the qualified type name, e.g. `Example::Widget`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Builder collecting the types and handlers of a service.
pub struct ServiceBuilder {
    service_name: String,
    types: HashMap<String, RegisteredType>,
    handlers: HashMap<String, Arc<dyn ErasedHandler>>,
    bindings: HashMap<String, String>,
}

impl ServiceBuilder {
    /// Creates an empty builder for the named service.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            types: HashMap::new(),
            handlers: HashMap::new(),
            bindings: HashMap::new(),
        }
    }

    /// Sets the service name.
    #[must_use]
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Registers `T` under `"<namespace>::<TYPE_NAME>"`.
    ///
    /// # Errors
    /// Returns `ServiceError::DuplicateType` if the name is taken.
    pub fn register_type<T: ResourceType>(
        &mut self,
        namespace: &str,
    ) -> Result<RegisteredType, ServiceError> {
        let name = format!("{}::{}", namespace, T::TYPE_NAME);
        if self.types.contains_key(&name) {
            return Err(ServiceError::DuplicateType { name });
        }

        let registered = RegisteredType {
            name: name.clone(),
            type_id: TypeId::of::<T>(),
        };
        tracing::debug!("Registered type {} on {}", name, self.service_name);
        self.types.insert(name, registered.clone());
        Ok(registered)
    }

    /// Registers a handler under `name`, bound to a registered type.
    ///
    /// # Errors
    /// Returns `ServiceError::DuplicateHandler` if the name is taken, or
    /// `ServiceError::TypeMismatch` if the handler manages another type.
    pub fn register_handler<H>(
        &mut self,
        name: &str,
        handler: H,
        ty: &RegisteredType,
    ) -> Result<(), ServiceError>
    where
        H: ResourceHandler + 'static,
    {
        if self.handlers.contains_key(name) {
            return Err(ServiceError::DuplicateHandler {
                name: name.to_string(),
            });
        }
        if TypeId::of::<H::Resource>() != ty.type_id {
            return Err(ServiceError::TypeMismatch {
                handler: name.to_string(),
                expected: ty.name.clone(),
                actual: <H::Resource as ResourceType>::TYPE_NAME.to_string(),
            });
        }

        tracing::debug!(
            "Registered handler {} for {} on {}",
            name,
            ty.name,
            self.service_name
        );
        self.handlers.insert(name.to_string(), Arc::new(handler));
        self.bindings.insert(ty.name.clone(), name.to_string());
        Ok(())
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Builds the service.
    #[must_use]
    pub fn build(self) -> Service {
        tracing::info!(
            "Built service {} with {} types and {} handlers",
            self.service_name,
            self.types.len(),
            self.handlers.len()
        );
        Service {
            name: self.service_name,
            types: self.types,
            handlers: self.handlers,
            bindings: self.bindings,
        }
    }
}

/// Service routing operations to handlers by qualified name.
pub struct Service {
    name: String,
    types: HashMap<String, RegisteredType>,
    handlers: HashMap<String, Arc<dyn ErasedHandler>>,
    bindings: HashMap<String, String>,
}

impl Service {
    /// Returns the service name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if a handler is registered under the name.
    #[must_use]
    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns the handler bound to a qualified type name.
    #[must_use]
    pub fn handler_for_type(&self, type_name: &str) -> Option<&str> {
        self.bindings.get(type_name).map(String::as_str)
    }

    /// Returns the registered type names in sorted order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the registered handler names in sorted order.
    #[must_use]
    pub fn handler_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Creates a resource through the named handler.
    ///
    /// # Errors
    /// Returns `ServiceError::UnknownHandler` or the handler's error.
    pub fn create(&self, handler: &str, desired: Value) -> Result<(Value, String), ServiceError> {
        self.handler(handler)?.create_value(desired)
    }

    /// Reads a resource through the named handler.
    ///
    /// # Errors
    /// Returns `ServiceError::UnknownHandler` or the handler's error.
    pub fn read(&self, handler: &str, external_id: &str) -> Result<Value, ServiceError> {
        self.handler(handler)?.read_value(external_id)
    }

    /// Deletes a resource through the named handler.
    ///
    /// # Errors
    /// Returns `ServiceError::UnknownHandler` or the handler's error.
    pub fn delete(&self, handler: &str, external_id: &str) -> Result<(), ServiceError> {
        self.handler(handler)?.delete_value(external_id)
    }

    fn handler(&self, name: &str) -> Result<&Arc<dyn ErasedHandler>, ServiceError> {
        self.handlers.get(name).ok_or_else(|| {
            tracing::warn!("No handler registered as {} on {}", name, self.name);
            ServiceError::UnknownHandler {
                name: name.to_string(),
            }
        })
    }
}
