//! Resource handler traits.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{BridgeError, ServiceError};

/// Typed resource produced by the code generator.
pub trait ResourceType: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Unqualified type name, e.g. `Widget`.
    const TYPE_NAME: &'static str;

    /// Name of the field holding the external identifier, e.g. `widget_id`.
    const IDENTITY_FIELD: &'static str;

    /// Returns the external identifier, if the resource exists.
    fn external_id(&self) -> Option<&str>;
}

/// Create/read/delete operations for one resource type.
///
/// There is no update: a changed resource is deleted and created again by
/// the caller.
pub trait ResourceHandler: Send + Sync {
    /// Resource type managed by this handler.
    type Resource: ResourceType;

    /// Creates the resource and reads back its canonical state.
    ///
    /// # Returns
    /// The actual state, with the identity field set, and the external
    /// identifier.
    ///
    /// # Errors
    /// Returns the first error from the provider create or the read that
    /// follows it.
    fn create(&self, desired: &Self::Resource) -> Result<(Self::Resource, String), BridgeError>;

    /// Reads the current state of the resource.
    ///
    /// # Errors
    /// Returns `BridgeError` if the provider read or unmarshalling fails.
    fn read(&self, external_id: &str) -> Result<Self::Resource, BridgeError>;

    /// Deletes the resource.
    ///
    /// # Errors
    /// Returns the provider error unchanged.
    fn delete(&self, external_id: &str) -> Result<(), BridgeError>;
}

/// Object-safe view of a [`ResourceHandler`] over JSON values.
///
/// Values carry the identity field alongside the schema attributes.
pub trait ErasedHandler: Send + Sync {
    /// Unqualified name of the managed type.
    fn resource_type_name(&self) -> &'static str;

    /// Creates a resource from a JSON payload.
    ///
    /// # Errors
    /// Returns `ServiceError::Payload` if the payload does not match the
    /// resource type, or the handler's error.
    fn create_value(&self, desired: Value) -> Result<(Value, String), ServiceError>;

    /// Reads a resource as a JSON value.
    ///
    /// # Errors
    /// Returns the handler's error.
    fn read_value(&self, external_id: &str) -> Result<Value, ServiceError>;

    /// Deletes a resource.
    ///
    /// # Errors
    /// Returns the handler's error.
    fn delete_value(&self, external_id: &str) -> Result<(), ServiceError>;
}

impl<H: ResourceHandler> ErasedHandler for H {
    fn resource_type_name(&self) -> &'static str {
        H::Resource::TYPE_NAME
    }

    fn create_value(&self, desired: Value) -> Result<(Value, String), ServiceError> {
        let desired: H::Resource = serde_json::from_value(desired).map_err(ServiceError::Payload)?;
        let (actual, external_id) = self.create(&desired)?;
        let value = to_value_with_identity::<H::Resource>(&actual, &external_id)?;
        Ok((value, external_id))
    }

    fn read_value(&self, external_id: &str) -> Result<Value, ServiceError> {
        let actual = self.read(external_id)?;
        to_value_with_identity::<H::Resource>(&actual, external_id)
    }

    fn delete_value(&self, external_id: &str) -> Result<(), ServiceError> {
        self.delete(external_id)?;
        Ok(())
    }
}

fn to_value_with_identity<T: ResourceType>(
    resource: &T,
    external_id: &str,
) -> Result<Value, ServiceError> {
    let mut value = serde_json::to_value(resource).map_err(BridgeError::Marshal)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            T::IDENTITY_FIELD.to_string(),
            Value::String(external_id.to_string()),
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge;
    use crate::mock::MockProvider;
    use crate::provider::Provider;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Widget {
        #[serde(skip)]
        widget_id: Option<String>,
        #[serde(rename = "name")]
        name: String,
    }

    impl ResourceType for Widget {
        const TYPE_NAME: &'static str = "Widget";
        const IDENTITY_FIELD: &'static str = "widget_id";

        fn external_id(&self) -> Option<&str> {
            self.widget_id.as_deref()
        }
    }

    struct WidgetHandler {
        provider: Arc<dyn Provider>,
    }

    impl ResourceHandler for WidgetHandler {
        type Resource = Widget;

        fn create(&self, desired: &Widget) -> Result<(Widget, String), BridgeError> {
            bridge::create_then_read(self.provider.as_ref(), "widget", desired, |id| {
                ResourceHandler::read(self, id)
            })
        }

        fn read(&self, external_id: &str) -> Result<Widget, BridgeError> {
            let mut actual: Widget = bridge::read(self.provider.as_ref(), "widget", external_id)?;
            actual.widget_id = Some(external_id.to_string());
            Ok(actual)
        }

        fn delete(&self, external_id: &str) -> Result<(), BridgeError> {
            bridge::delete(self.provider.as_ref(), "widget", external_id)
        }
    }

    fn handler() -> WidgetHandler {
        WidgetHandler {
            provider: Arc::new(MockProvider::new()),
        }
    }

    #[test]
    fn test_typed_create_sets_identity() {
        let handler = handler();
        let desired = Widget {
            name: "alpha".to_string(),
            ..Widget::default()
        };
        let (actual, id) = ResourceHandler::create(&handler, &desired).expect("Failed to create");
        assert_eq!(id, "widget-1");
        assert_eq!(actual.external_id(), Some("widget-1"));
        assert_eq!(actual.name, "alpha");
    }

    #[test]
    fn test_erased_create_and_read() {
        let handler = handler();
        assert_eq!(handler.resource_type_name(), "Widget");

        let (value, id) = handler
            .create_value(json!({ "name": "alpha" }))
            .expect("Failed to create");
        assert_eq!(value, json!({ "name": "alpha", "widget_id": "widget-1" }));

        let read = handler.read_value(&id).expect("Failed to read");
        assert_eq!(read, value);

        handler.delete_value(&id).expect("Failed to delete");
        assert!(handler.read_value(&id).is_err());
    }

    #[test]
    fn test_erased_create_bad_payload() {
        let handler = handler();
        let result = handler.create_value(json!({ "name": 42 }));
        assert!(matches!(result, Err(ServiceError::Payload(_))));
    }
}
