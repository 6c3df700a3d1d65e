//! Provider collaborator interface.

use crate::error::ProviderError;

/// Raw configuration handed to a provider on create.
pub type RawConfig = serde_json::Map<String, serde_json::Value>;

/// Raw state returned by a provider on read.
pub type RawState = serde_json::Map<String, serde_json::Value>;

/// Shared handle through which generated handlers reach the provider.
///
/// One handle is created by the host and shared read-only by every
/// handler, so implementations must be safe to call concurrently. No
/// locking is done on behalf of a single external identifier.
pub trait Provider: Send + Sync {
    /// Creates a resource of `type_key` and returns its external identifier.
    ///
    /// # Errors
    /// Returns `ProviderError` if the provider rejects the configuration.
    fn create(&self, type_key: &str, config: &RawConfig) -> Result<String, ProviderError>;

    /// Reads the current state of a resource.
    ///
    /// # Errors
    /// Returns `ProviderError` if the resource cannot be read.
    fn read(&self, type_key: &str, external_id: &str) -> Result<RawState, ProviderError>;

    /// Deletes a resource.
    ///
    /// # Errors
    /// Returns `ProviderError` if the resource cannot be deleted.
    fn delete(&self, type_key: &str, external_id: &str) -> Result<(), ProviderError>;
}
