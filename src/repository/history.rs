//! Equipment history repository

use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::history::{HistoryEntry, HistoryEntryRow},
};

#[derive(Clone)]
pub struct HistoryRepository {
    pool: Pool<Postgres>,
}

impl HistoryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Append a history entry
    pub async fn insert(&self, entry: &HistoryEntry) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO history (id, equipment_id, action, changed_by, "timestamp", old_values, new_values)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id)
        .bind(entry.equipment_id)
        .bind(entry.action.as_str())
        .bind(&entry.changed_by)
        .bind(entry.timestamp)
        .bind(entry.old_values.as_ref().map(Json))
        .bind(entry.new_values.as_ref().map(Json))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// List the history of one equipment record, newest first
    pub async fn list_by_equipment(&self, equipment_id: Uuid) -> AppResult<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryEntryRow>(
            r#"SELECT * FROM history WHERE equipment_id = $1 ORDER BY "timestamp" DESC, id"#,
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(HistoryEntry::from).collect())
    }
}
