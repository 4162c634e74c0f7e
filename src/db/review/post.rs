use serde::Serialize;

use crate::{db::ReviewStore, errors::StoreError, models::Table};

/// Serializes `row` and inserts it as a single-row request.
pub async fn insert_row<T: Serialize>(
    store: &dyn ReviewStore,
    table: Table,
    row: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_value(row).map_err(|e| StoreError::Decode(e.to_string()))?;

    store.insert(table, json).await?;

    tracing::info!("Inserted row into {}", table.name());
    Ok(())
}
