use sqlx::{Connection, PgConnection};
use tracing::Instrument;

use crate::configuration::DatabaseSettings;
use crate::domain::FetchedValue;

const INSERT_VALUE: &str = "INSERT INTO fetched_values (value, note) VALUES ($1, $2)";
const NOTE_VALUE: &str = "Another Value";

/// Write the fetched value as one row. Opens a dedicated connection from the
/// settings handed in by the caller and closes it again on both the success
/// and the failure path. The driver error is returned, not swallowed; the
/// caller decides whether it is fatal.
#[tracing::instrument(name = "storing fetched value", skip(settings, value))]
pub async fn store_value(
    settings: &DatabaseSettings,
    value: &FetchedValue,
) -> Result<(), sqlx::Error> {
    let mut connection = PgConnection::connect_with(&settings.with_db()).await?;

    let query_span = tracing::info_span!("inserting fetched value into db");
    let result = sqlx::query(INSERT_VALUE)
        .bind(value.as_ref())
        .bind(NOTE_VALUE)
        .execute(&mut connection)
        .instrument(query_span)
        .await;

    // Release the connection regardless of how the insert went; a failed
    // close must not mask an insert error.
    if let Err(e) = connection.close().await {
        tracing::warn!("failed to close database connection: {:?}", e);
    }

    result?;
    tracing::info!("fetched value has been saved to db");
    Ok(())
}
