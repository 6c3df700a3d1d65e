//! In-memory provider for tests.
//!
//! [`MockProvider`] stores created resources in memory, assigns sequential
//! identifiers of the form `{type_key}-{n}`, records every call, and can be
//! told to fail the next create, read or delete.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use serde_json::Value;

use crate::error::ProviderError;
use crate::provider::{Provider, RawConfig, RawState};

/// A call recorded by [`MockProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    /// Create of the given type key.
    Create {
        /// Provider type key.
        type_key: String,
    },
    /// Read of an external identifier.
    Read {
        /// Provider type key.
        type_key: String,
        /// External identifier.
        id: String,
    },
    /// Delete of an external identifier.
    Delete {
        /// Provider type key.
        type_key: String,
        /// External identifier.
        id: String,
    },
}

impl ProviderCall {
    /// Creates a create call record.
    pub fn create(type_key: impl Into<String>) -> Self {
        Self::Create {
            type_key: type_key.into(),
        }
    }

    /// Creates a read call record.
    pub fn read(type_key: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Read {
            type_key: type_key.into(),
            id: id.into(),
        }
    }

    /// Creates a delete call record.
    pub fn delete(type_key: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Delete {
            type_key: type_key.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    next_id: u64,
    resources: BTreeMap<String, (String, RawState)>,
    computed: BTreeMap<String, RawState>,
    calls: Vec<ProviderCall>,
    fail_create: Option<String>,
    fail_read: Option<String>,
    fail_delete: Option<String>,
}

/// In-memory [`Provider`] implementation.
#[derive(Debug, Default)]
pub struct MockProvider {
    state: Mutex<MockState>,
}

impl MockProvider {
    /// Creates an empty mock provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute the provider computes for every new `type_key`
    /// resource, as a real provider would fill in server-side defaults.
    pub fn set_computed(&self, type_key: &str, attribute: &str, value: Value) {
        self.state
            .lock()
            .computed
            .entry(type_key.to_string())
            .or_default()
            .insert(attribute.to_string(), value);
    }

    /// Makes the next create fail with the given message.
    pub fn fail_create(&self, message: impl Into<String>) {
        self.state.lock().fail_create = Some(message.into());
    }

    /// Makes the next read fail with the given message.
    pub fn fail_read(&self, message: impl Into<String>) {
        self.state.lock().fail_read = Some(message.into());
    }

    /// Makes the next delete fail with the given message.
    pub fn fail_delete(&self, message: impl Into<String>) {
        self.state.lock().fail_delete = Some(message.into());
    }

    /// Returns the calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.state.lock().calls.clone()
    }

    /// Returns true if a resource with the identifier exists.
    #[must_use]
    pub fn contains(&self, external_id: &str) -> bool {
        self.state.lock().resources.contains_key(external_id)
    }

    /// Returns the stored attributes of a resource.
    #[must_use]
    pub fn stored(&self, external_id: &str) -> Option<RawState> {
        self.state
            .lock()
            .resources
            .get(external_id)
            .map(|(_, attrs)| attrs.clone())
    }

    /// Returns the number of live resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().resources.len()
    }

    /// Returns true if no resources are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Provider for MockProvider {
    fn create(&self, type_key: &str, config: &RawConfig) -> Result<String, ProviderError> {
        let mut state = self.state.lock();
        state.calls.push(ProviderCall::create(type_key));
        if let Some(message) = state.fail_create.take() {
            return Err(ProviderError::failed(message));
        }

        state.next_id += 1;
        let id = format!("{}-{}", type_key, state.next_id);
        let mut attrs = config.clone();
        if let Some(computed) = state.computed.get(type_key) {
            for (key, value) in computed {
                attrs.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        state.resources.insert(id.clone(), (type_key.to_string(), attrs));
        Ok(id)
    }

    fn read(&self, type_key: &str, external_id: &str) -> Result<RawState, ProviderError> {
        let mut state = self.state.lock();
        state.calls.push(ProviderCall::read(type_key, external_id));
        if let Some(message) = state.fail_read.take() {
            return Err(ProviderError::failed(message));
        }

        match state.resources.get(external_id) {
            Some((key, attrs)) if key == type_key => Ok(attrs.clone()),
            _ => Err(ProviderError::not_found(type_key, external_id)),
        }
    }

    fn delete(&self, type_key: &str, external_id: &str) -> Result<(), ProviderError> {
        let mut state = self.state.lock();
        state.calls.push(ProviderCall::delete(type_key, external_id));
        if let Some(message) = state.fail_delete.take() {
            return Err(ProviderError::failed(message));
        }

        let exists = state
            .resources
            .get(external_id)
            .is_some_and(|(key, _)| key == type_key);
        if !exists {
            return Err(ProviderError::not_found(type_key, external_id));
        }
        state.resources.remove(external_id);
        Ok(())
    }
}
