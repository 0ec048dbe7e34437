use {
    std::sync::Arc,
    async_trait::async_trait,
    crate::error::CounterError,
};

pub use self::{
    dynamodb::{DynamoDbStore, value_from_item},
    memory::MemoryStore,
    sqlite::SqliteStore,
};

mod dynamodb;
mod memory;
mod sqlite;

/// Minimal capability the counter needs from a key-value store.
///
/// Values are kept in the store's textual numeric form (DynamoDB `N` is a decimal
/// string), parsing is left to the caller. `put` is a blind overwrite.
#[async_trait]
pub trait CounterStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CounterError>;
    async fn put(&self, key: &str, value: &str) -> Result<(), CounterError>;
}

#[derive(Clone)]
pub struct BoxedStore {
    inner: Arc<Box<dyn CounterStore + Send + Sync>>,
}

impl BoxedStore {
    pub fn new<T: CounterStore + Send + Sync + 'static>(inner: T) -> Self {
        Self {
            inner: Arc::new(Box::new(inner)),
        }
    }
}

#[async_trait]
impl CounterStore for BoxedStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CounterError> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), CounterError> {
        self.inner.put(key, value).await
    }
}

#[async_trait]
impl<T: CounterStore + Send + Sync> CounterStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, CounterError> {
        self.as_ref().get(key).await
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), CounterError> {
        self.as_ref().put(key, value).await
    }
}
