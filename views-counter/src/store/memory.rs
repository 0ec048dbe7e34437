use {
    std::{collections::HashMap, sync::Mutex},
    async_trait::async_trait,
    crate::{error::CounterError, store::CounterStore},
};

/// Process-local store, used for dry runs and as a test double for the managed table.
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CounterError> {
        let values = self.values.lock()
            .map_err(|err| CounterError::StoreInternalError { reason: format!("failed to lock memory store: {err:?}") })?;
        Ok(values.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), CounterError> {
        let mut values = self.values.lock()
            .map_err(|err| CounterError::StoreInternalError { reason: format!("failed to lock memory store: {err:?}") })?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
