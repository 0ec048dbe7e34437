use {
    std::path::{Path, PathBuf},
    tokio::fs,
    serde::Deserialize,
    tracing::info,
    crate::{
        error::CounterError,
        store::{BoxedStore, CounterStore, DynamoDbStore, MemoryStore, SqliteStore},
    },
};

pub const DEFAULT_TABLE_NAME: &str = "views";
pub const DEFAULT_KEY_ATTRIBUTE: &str = "Id";
pub const DEFAULT_VALUE_ATTRIBUTE: &str = "value";
pub const DEFAULT_COUNTER_KEY: &str = "0";

#[derive(Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Config {
    #[serde(skip_deserializing)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub counter: CounterConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CounterConfig {
    /// Key of the counter record. Fixed for a deployment, never taken from the request.
    #[serde(default = "default_counter_key")]
    pub key: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            key: default_counter_key(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum StoreConfig {
    #[serde(rename = "dynamodb")]
    DynamoDb(DynamoDbConfig),
    #[serde(rename = "sqlite")]
    Sqlite {
        path: Option<String>,
        seed: Option<u64>,
    },
    #[serde(rename = "memory")]
    Memory {
        seed: Option<u64>,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::DynamoDb(DynamoDbConfig::default())
    }
}

#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DynamoDbConfig {
    #[serde(default = "default_table_name")]
    pub table: String,

    #[serde(default = "default_key_attribute")]
    pub key_attribute: String,

    #[serde(default)]
    pub key_type: KeyType,

    #[serde(default = "default_value_attribute")]
    pub value_attribute: String,

    #[serde(default = "default_consistent_read")]
    pub consistent_read: bool,
}

impl Default for DynamoDbConfig {
    fn default() -> Self {
        Self {
            table: default_table_name(),
            key_attribute: default_key_attribute(),
            key_type: KeyType::default(),
            value_attribute: default_value_attribute(),
            consistent_read: default_consistent_read(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum KeyType {
    #[default]
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "string")]
    String,
}

fn default_table_name() -> String { DEFAULT_TABLE_NAME.to_owned() }
fn default_key_attribute() -> String { DEFAULT_KEY_ATTRIBUTE.to_owned() }
fn default_value_attribute() -> String { DEFAULT_VALUE_ATTRIBUTE.to_owned() }
fn default_counter_key() -> String { DEFAULT_COUNTER_KEY.to_owned() }
fn default_consistent_read() -> bool { true }

impl Config {
    pub async fn load(file_path: PathBuf) -> Result<Self, CounterError> {
        let content = fs::read_to_string(&file_path).await
            .map_err(|err| CounterError::ConfigurationError { reason: format!("failed to read config file {file_path:?}: {err:?}") })?;
        let mut config = Self::from_yaml(&content)?;
        if let Some(config_dir) = file_path.parent() {
            config = config.relative_to(config_dir);
        }
        config.config_path = Some(file_path);
        Ok(config)
    }

    /// Resolves relative store paths against `base`, absolute paths are kept as is.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if let StoreConfig::Sqlite { path: Some(path), .. } = &mut self.store {
            if Path::new(path.as_str()).is_relative() {
                *path = base.join(path.as_str()).to_string_lossy().into_owned();
            }
        }
        self
    }

    pub fn from_yaml(content: &str) -> Result<Self, CounterError> {
        serde_yml::from_str(content)
            .map_err(|err| CounterError::ConfigurationError { reason: format!("failed to parse config: {err}") })
    }

    /// Replaces the DynamoDB table name. Other backends have no table and ignore it.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        if let StoreConfig::DynamoDb(dynamodb) = &mut self.store {
            dynamodb.table = table.into();
        }
        self
    }
}

pub async fn store_from_config(config: &StoreConfig, counter: &CounterConfig) -> Result<BoxedStore, CounterError> {
    let (store, seed) = match config {
        StoreConfig::DynamoDb(dynamodb) => (BoxedStore::new(DynamoDbStore::new(dynamodb.clone())), None),
        StoreConfig::Sqlite { path, seed } => (
            BoxedStore::new(match path {
                Some(path) => SqliteStore::new(path)?,
                None => SqliteStore::in_memory()?,
            }),
            *seed,
        ),
        StoreConfig::Memory { seed } => (BoxedStore::new(MemoryStore::new()), *seed),
    };

    // seed is provisioning for local backends, an existing record is left untouched
    if let Some(seed) = seed {
        if store.get(&counter.key).await?.is_none() {
            info!(key = %counter.key, seed, "seeding counter record");
            store.put(&counter.key, &seed.to_string()).await?;
        }
    }

    Ok(store)
}
