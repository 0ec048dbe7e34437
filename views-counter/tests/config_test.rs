use {
    std::path::Path,
    views_counter::{
        CounterError,
        CounterService,
        config::{Config, DynamoDbConfig, KeyType, StoreConfig, store_from_config},
    },
};

#[test]
fn empty_config_uses_dynamodb_defaults() {
    let config = Config::from_yaml("{}").unwrap();

    assert_eq!("0", config.counter.key);
    assert_eq!(StoreConfig::DynamoDb(DynamoDbConfig {
        table: "views".to_owned(),
        key_attribute: "Id".to_owned(),
        key_type: KeyType::Number,
        value_attribute: "value".to_owned(),
        consistent_read: true,
    }), config.store);
    assert_eq!(Config::default(), config);
}

#[test]
fn dynamodb_config_overrides() {
    let config = Config::from_yaml(r#"
counter:
  key: "home"
store:
  type: dynamodb
  table: site-views
  key_attribute: pk
  key_type: string
  consistent_read: false
"#).unwrap();

    assert_eq!("home", config.counter.key);
    match config.store {
        StoreConfig::DynamoDb(dynamodb) => {
            assert_eq!("site-views", dynamodb.table);
            assert_eq!("pk", dynamodb.key_attribute);
            assert_eq!(KeyType::String, dynamodb.key_type);
            assert_eq!("value", dynamodb.value_attribute);
            assert!(!dynamodb.consistent_read);
        },
        other => panic!("unexpected store config: {other:?}"),
    }
}

#[test]
fn table_override_applies_to_dynamodb_only() {
    let config = Config::default().with_table("other-table");
    match config.store {
        StoreConfig::DynamoDb(dynamodb) => assert_eq!("other-table", dynamodb.table),
        other => panic!("unexpected store config: {other:?}"),
    }

    let config = Config::from_yaml("store:\n  type: memory\n").unwrap().with_table("other-table");
    assert_eq!(StoreConfig::Memory { seed: None }, config.store);
}

#[test]
fn invalid_config_is_configuration_error() {
    match Config::from_yaml("store:\n  type: redis\n") {
        Err(CounterError::ConfigurationError { .. }) => {},
        other => panic!("unexpected result: {other:?}, expected ConfigurationError"),
    }
}

#[tokio::test]
async fn missing_config_file_is_configuration_error() {
    match Config::load("does-not-exist.views.yaml".into()).await {
        Err(CounterError::ConfigurationError { .. }) => {},
        other => panic!("unexpected result: {other:?}, expected ConfigurationError"),
    }
}

#[tokio::test]
async fn seeded_memory_store() {
    let config = Config::from_yaml("store:\n  type: memory\n  seed: 41\n").unwrap();
    let store = store_from_config(&config.store, &config.counter).await.unwrap();
    let service = CounterService::new(store, &config.counter);

    assert_eq!(41, service.get_count().await.unwrap());
    assert_eq!(42, service.increment_and_store().await.unwrap());
}

#[tokio::test]
async fn unseeded_sqlite_store_has_no_record() {
    let config = Config::from_yaml("store:\n  type: sqlite\n").unwrap();
    let store = store_from_config(&config.store, &config.counter).await.unwrap();
    let service = CounterService::new(store, &config.counter);

    assert_eq!(Err(CounterError::NotFound), service.increment_and_store().await);
}

#[test]
fn relative_sqlite_path_resolves_against_base() {
    let config = Config::from_yaml("store:\n  type: sqlite\n  path: views.sqlite\n").unwrap()
        .relative_to(Path::new("/etc/views-counter"));
    assert_eq!(StoreConfig::Sqlite {
        path: Some(Path::new("/etc/views-counter").join("views.sqlite").to_string_lossy().into_owned()),
        seed: None,
    }, config.store);

    let config = Config::from_yaml("store:\n  type: sqlite\n  path: /var/lib/views.sqlite\n").unwrap()
        .relative_to(Path::new("/etc/views-counter"));
    assert_eq!(StoreConfig::Sqlite { path: Some("/var/lib/views.sqlite".to_owned()), seed: None }, config.store);
}

#[tokio::test]
async fn loaded_config_resolves_sqlite_path_next_to_file() {
    let dir = std::env::temp_dir().join(format!("views-counter-config-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let config_path = dir.join("views.yaml");
    tokio::fs::write(&config_path, "store:\n  type: sqlite\n  path: views.sqlite\n  seed: 3\n").await.unwrap();

    let config = Config::load(config_path.clone()).await.unwrap();
    let expected_path = dir.join("views.sqlite").to_string_lossy().into_owned();
    assert_eq!(Some(config_path), config.config_path);
    assert_eq!(StoreConfig::Sqlite { path: Some(expected_path.clone()), seed: Some(3) }, config.store);

    let store = store_from_config(&config.store, &config.counter).await.unwrap();
    let service = CounterService::new(store, &config.counter);
    assert_eq!(3, service.get_count().await.unwrap());
    assert!(Path::new(&expected_path).exists());

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
