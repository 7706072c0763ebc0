//! Persistent preference store abstraction

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{CoreError, CoreResult};

/// String-valued key/value store surviving across page loads.
///
/// Platform implementations:
/// - `InMemoryPreferenceStore` (tests)
/// - TUI: `JsonPreferenceStore` (JSON file under the config directory)
pub trait PreferenceStore: Send + Sync {
    /// # Returns
    /// * `Some(value)` - a value was stored
    /// * `None` - unset
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// Volatile preference store
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| CoreError::PreferenceError(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| CoreError::PreferenceError(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
