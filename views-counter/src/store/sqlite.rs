use {
    std::sync::{Arc, Mutex},
    async_trait::async_trait,
    rusqlite::{Connection, OptionalExtension},
    tracing::info,
    crate::{error::CounterError, store::CounterStore},
};

/// Local development backend. Keeps counter records in a single `counters` table.
#[derive(Clone)]
pub struct SqliteStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(path: impl AsRef<std::path::Path>) -> Result<Self, CounterError> {
        info!("opening sqlite counter store at {:?}", path.as_ref());
        Self::from_connection(
            Connection::open(path)
                .map_err(|err| CounterError::StoreInternalError { reason: format!("failed to open sqlite database: {err:?}") })?
        )
    }

    pub fn in_memory() -> Result<Self, CounterError> {
        Self::from_connection(
            Connection::open_in_memory()
                .map_err(|err| CounterError::StoreInternalError { reason: format!("failed to open in memory sqlite: {err:?}") })?
        )
    }

    fn from_connection(connection: Connection) -> Result<Self, CounterError> {
        connection.execute("create table if not exists counters (key text primary key, value text not null)", ())
            .map_err(|err| CounterError::StoreInternalError { reason: format!("failed to create counters table: {err:?}") })?;
        Ok(Self { connection: Arc::new(Mutex::new(connection)) })
    }
}

#[async_trait]
impl CounterStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CounterError> {
        let connection = self.connection.lock()
            .map_err(|err| CounterError::StoreInternalError { reason: format!("failed to acquire sqlite connection: {err:?}") })?;
        connection.query_row("select value from counters where key = ?1", [key], |row| row.get(0))
            .optional()
            .map_err(|err| CounterError::StoreInternalError { reason: format!("failed to read counter from sqlite: {err:?}") })
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), CounterError> {
        let connection = self.connection.lock()
            .map_err(|err| CounterError::StoreInternalError { reason: format!("failed to acquire sqlite connection: {err:?}") })?;
        connection.execute("insert or replace into counters (key, value) values (?1, ?2)", (key, value))
            .map_err(|err| CounterError::StoreInternalError { reason: format!("failed to execute sqlite query: {err:?}") })
            .map(|_| ())
    }
}
