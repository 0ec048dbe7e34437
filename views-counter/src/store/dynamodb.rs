use {
    std::collections::HashMap,
    async_trait::async_trait,
    tokio::sync::OnceCell,
    tracing::{debug, info},
    aws_sdk_dynamodb::{
        Client,
        error::DisplayErrorContext,
        types::{AttributeAction, AttributeValue, AttributeValueUpdate},
    },
    crate::{
        config::{DynamoDbConfig, KeyType},
        error::CounterError,
        store::CounterStore,
    },
};

/// Counter table in DynamoDB.
///
/// The SDK client is built on first use and then shared by every invocation served by
/// this process. Reads project only the value attribute, writes are `UpdateItem` with a
/// `PUT` attribute update and no condition expression.
pub struct DynamoDbStore {
    config: DynamoDbConfig,
    client: OnceCell<Client>,
}

impl DynamoDbStore {
    pub fn new(config: DynamoDbConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    pub fn with_client(config: DynamoDbConfig, client: Client) -> Self {
        Self {
            config,
            client: OnceCell::new_with(Some(client)),
        }
    }

    async fn client(&self) -> &Client {
        self.client.get_or_init(|| async {
            info!(table = %self.config.table, "initializing dynamodb client");
            let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            Client::new(&sdk_config)
        }).await
    }

    fn key_value(&self, key: &str) -> AttributeValue {
        match self.config.key_type {
            KeyType::Number => AttributeValue::N(key.to_owned()),
            KeyType::String => AttributeValue::S(key.to_owned()),
        }
    }
}

#[async_trait]
impl CounterStore for DynamoDbStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CounterError> {
        debug!(table = %self.config.table, key, "get_item");
        let output = self.client().await
            .get_item()
            .table_name(&self.config.table)
            .key(&self.config.key_attribute, self.key_value(key))
            .projection_expression("#value")
            .expression_attribute_names("#value", &self.config.value_attribute)
            .consistent_read(self.config.consistent_read)
            .send()
            .await
            .map_err(|err| CounterError::StoreInternalError {
                reason: format!("failed to get counter item: {}", DisplayErrorContext(&err)),
            })?;

        match output.item() {
            Some(item) => value_from_item(item, &self.config.value_attribute),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), CounterError> {
        debug!(table = %self.config.table, key, value, "update_item");
        let update = AttributeValueUpdate::builder()
            .value(AttributeValue::N(value.to_owned()))
            .action(AttributeAction::Put)
            .build();

        self.client().await
            .update_item()
            .table_name(&self.config.table)
            .key(&self.config.key_attribute, self.key_value(key))
            .attribute_updates(&self.config.value_attribute, update)
            .send()
            .await
            .map_err(|err| CounterError::StoreInternalError {
                reason: format!("failed to update counter item: {}", DisplayErrorContext(&err)),
            })
            .map(|_| ())
    }
}

/// Extracts the numeric value attribute from an item returned by `GetItem`.
/// A missing attribute reads as an absent record, any non-numeric attribute type is invalid.
pub fn value_from_item(item: &HashMap<String, AttributeValue>, attribute: &str) -> Result<Option<String>, CounterError> {
    match item.get(attribute) {
        Some(AttributeValue::N(v)) => Ok(Some(v.clone())),
        Some(other) => Err(CounterError::InvalidValue {
            reason: format!("expected numeric attribute {attribute:?}, got: {other:?}"),
        }),
        None => Ok(None),
    }
}
