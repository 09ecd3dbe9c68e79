//! Equipment change history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;

/// History entry action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Created,
    Updated,
    Deleted,
}

impl HistoryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryAction::Created => "created",
            HistoryAction::Updated => "updated",
            HistoryAction::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HistoryAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(HistoryAction::Created),
            "updated" => Ok(HistoryAction::Updated),
            "deleted" => Ok(HistoryAction::Deleted),
            _ => Err(format!("Invalid history action: {}", s)),
        }
    }
}

/// Internal row structure (snapshots stored as JSONB)
#[derive(Debug, Clone, FromRow)]
pub struct HistoryEntryRow {
    id: Uuid,
    equipment_id: Uuid,
    action: String,
    changed_by: String,
    timestamp: DateTime<Utc>,
    old_values: Option<Json<serde_json::Value>>,
    new_values: Option<Json<serde_json::Value>>,
}

impl From<HistoryEntryRow> for HistoryEntry {
    fn from(row: HistoryEntryRow) -> Self {
        HistoryEntry {
            id: row.id,
            equipment_id: row.equipment_id,
            action: row.action.parse().unwrap_or(HistoryAction::Updated),
            changed_by: row.changed_by,
            timestamp: row.timestamp,
            old_values: row.old_values.map(|v| v.0),
            new_values: row.new_values.map(|v| v.0),
        }
    }
}

/// A recorded change to an equipment record.
///
/// Entries outlive the equipment they describe: deleting equipment appends
/// a final `deleted` entry and leaves the trail in place.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub action: HistoryAction,
    /// Email of the user who made the change
    pub changed_by: String,
    pub timestamp: DateTime<Utc>,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
}
