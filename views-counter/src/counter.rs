use {
    tracing::debug,
    crate::{
        config::CounterConfig,
        error::CounterError,
        store::CounterStore,
    },
};

/// Viewer counter backed by a single record in `S`.
///
/// Increments are a read, a blind overwrite and a re-read. Nothing guards the record
/// between the read and the write, so two invocations that both read `v` before either
/// writes will both store `v + 1` and one increment is lost.
// TODO: decide with the site owners whether lost updates are acceptable before moving to
// a store-side atomic increment, which changes what concurrent callers observe.
pub struct CounterService<S> {
    store: S,
    key: String,
}

impl<S: CounterStore> CounterService<S> {
    pub fn new(store: S, config: &CounterConfig) -> Self {
        Self {
            store,
            key: config.key.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn get_count(&self) -> Result<u64, CounterError> {
        let value = self.store.get(&self.key).await?
            .ok_or(CounterError::NotFound)?;
        parse_count(&value)
    }

    pub async fn increment_and_store(&self) -> Result<u64, CounterError> {
        let current = self.get_count().await?;
        let next = current.checked_add(1)
            .ok_or_else(|| CounterError::InvalidValue { reason: format!("counter overflow at {current}") })?;

        debug!(key = %self.key, current, next, "storing incremented counter");
        self.store.put(&self.key, &next.to_string()).await?;

        // confirm against the store instead of trusting `next`
        self.get_count().await
    }
}

/// Accepts plain decimal digits only, the form DynamoDB uses for `N` values.
pub fn parse_count(value: &str) -> Result<u64, CounterError> {
    if value.starts_with('+') {
        return Err(CounterError::InvalidValue { reason: format!("{value:?} is not a non-negative integer: explicit sign") });
    }
    value.parse::<u64>()
        .map_err(|err| CounterError::InvalidValue { reason: format!("{value:?} is not a non-negative integer: {err}") })
}
