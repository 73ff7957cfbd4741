use once_cell::sync::Lazy;
use secrecy::Secret;
use sqlx::{Connection, Executor, PgConnection, PgPool, Row};
use uuid::Uuid;

use intake::configuration::DatabaseSettings;
use intake::domain::FetchedValue;
use intake::persistence::store_value;
use intake::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Logs go to a sink by default; set TEST_LOG=1 to see them.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber =
            get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

fn database_settings() -> DatabaseSettings {
    DatabaseSettings {
        host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
        user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
        password: Secret::new(
            std::env::var("DB_PASSWORD").unwrap_or_else(|_| "password".to_string()),
        ),
        // One throwaway database per test run keeps tests isolated.
        database: Uuid::new_v4().to_string(),
    }
}

async fn configure_db(settings: &DatabaseSettings) -> PgPool {
    Lazy::force(&TRACING);

    let mut connection = PgConnection::connect_with(&settings.without_db())
        .await
        .expect("failed to connect to postgres");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, settings.database).as_str())
        .await
        .expect("failed to create database");

    let pool = PgPool::connect_with(settings.with_db())
        .await
        .expect("failed to create postgres connection pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to migrate database");

    pool
}

#[tokio::test]
async fn store_value_writes_the_value_and_the_fixed_note() {
    let settings = database_settings();
    let pool = configure_db(&settings).await;

    let value = FetchedValue::parse("42".to_string()).expect("a valid value");
    store_value(&settings, &value)
        .await
        .expect("insert should succeed");

    let row = sqlx::query("SELECT value, note FROM fetched_values")
        .fetch_one(&pool)
        .await
        .expect("failed to fetch the saved row");

    assert_eq!(row.get::<String, _>("value"), "42");
    assert_eq!(row.get::<String, _>("note"), "Another Value");
}

#[tokio::test]
async fn store_value_surfaces_the_driver_error() {
    // The database was never created, so the connection attempt fails and
    // the error must reach the caller instead of being swallowed.
    let settings = database_settings();

    let value = FetchedValue::parse("42".to_string()).expect("a valid value");
    let result = store_value(&settings, &value).await;

    assert!(result.is_err());
}
