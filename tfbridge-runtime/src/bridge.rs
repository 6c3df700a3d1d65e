//! Provider primitives used by generated handlers.
//!
//! Every function here is a single pass-through to the provider keyed by
//! the provider type string. None of them retries or rolls back.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::BridgeError;
use crate::marshal::{marshal, unmarshal};
use crate::provider::Provider;

/// Marshals `desired` and creates it at the provider.
///
/// # Returns
/// The external identifier assigned by the provider.
///
/// # Errors
/// Returns `BridgeError` if marshalling or the provider create fails.
pub fn create<T: Serialize>(
    provider: &dyn Provider,
    type_key: &str,
    desired: &T,
) -> Result<String, BridgeError> {
    let config = marshal(desired)?;
    tracing::debug!("Creating {} resource ({} attributes)", type_key, config.len());
    let external_id = provider.create(type_key, &config)?;
    tracing::debug!("Created {} resource {}", type_key, external_id);
    Ok(external_id)
}

/// Reads a resource from the provider and unmarshals it.
///
/// The identity field is not populated; generated handlers set it.
///
/// # Errors
/// Returns `BridgeError` if the provider read or unmarshalling fails.
pub fn read<T: DeserializeOwned>(
    provider: &dyn Provider,
    type_key: &str,
    external_id: &str,
) -> Result<T, BridgeError> {
    tracing::debug!("Reading {} resource {}", type_key, external_id);
    let state = provider.read(type_key, external_id)?;
    unmarshal(state)
}

/// Deletes a resource at the provider.
///
/// # Errors
/// Returns the provider error unchanged.
pub fn delete(provider: &dyn Provider, type_key: &str, external_id: &str) -> Result<(), BridgeError> {
    tracing::debug!("Deleting {} resource {}", type_key, external_id);
    provider.delete(type_key, external_id)?;
    Ok(())
}

/// Creates a resource and immediately reads back its canonical state.
///
/// A failed create returns its error without calling `read`. A failed read
/// after a successful create returns the read error as is; the external
/// identifier is dropped, leaving an orphaned resource at the provider
/// that has to be reconciled out of band.
///
/// # Errors
/// Returns the first error from create or read.
pub fn create_then_read<T, F>(
    provider: &dyn Provider,
    type_key: &str,
    desired: &T,
    read: F,
) -> Result<(T, String), BridgeError>
where
    T: Serialize,
    F: FnOnce(&str) -> Result<T, BridgeError>,
{
    let external_id = create(provider, type_key, desired)?;
    match read(&external_id) {
        Ok(actual) => Ok((actual, external_id)),
        Err(err) => {
            tracing::warn!(
                "Orphaned {} resource {}: read after create failed: {}",
                type_key,
                external_id,
                err
            );
            Err(err)
        }
    }
}
