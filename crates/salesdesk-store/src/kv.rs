//! # Key-Value Capability
//!
//! The minimal durable storage surface the session needs.

use crate::error::StoreResult;

/// String key-value storage.
///
/// Implementations must be shareable across threads; the same store is read
/// by the API client on every request and by the route guard on every
/// navigation.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value for `key`, or `None` when it was never set or was deleted.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}
