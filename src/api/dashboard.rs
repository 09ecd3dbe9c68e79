//! Dashboard aggregation endpoints

use axum::{extract::State, Json};
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Overall inventory counters
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_equipment: i64,
    /// Counts per asset type; seeded with every catalog entry
    pub by_type: IndexMap<String, i64>,
    /// Counts per operational status; canonical statuses always present
    pub by_status: IndexMap<String, i64>,
    /// Counts per department, descending
    pub by_department: IndexMap<String, i64>,
}

/// One aggregation group along a dimension (department, location, building).
///
/// `sum(by_status.values()) == sum(by_type.values()) == total`, and across a
/// response the group totals add up to the number of equipment records.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DimensionGroup {
    /// Dimension value, or "unspecified" for records without one
    pub key: String,
    pub total: i64,
    pub by_status: IndexMap<String, i64>,
    pub by_type: IndexMap<String, i64>,
}

/// Overall inventory statistics
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Overall inventory counters", body = DashboardStats)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.stats.dashboard_stats().await?;
    Ok(Json(stats))
}

/// Equipment grouped by department
#[utoipa::path(
    get,
    path = "/dashboard/equipment-by-department",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Groups ordered by descending total", body = Vec<DimensionGroup>)
    )
)]
pub async fn equipment_by_department(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<DimensionGroup>>> {
    let groups = state.services.stats.equipment_by_department().await?;
    Ok(Json(groups))
}

/// Equipment grouped by location
#[utoipa::path(
    get,
    path = "/dashboard/equipment-by-location",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Groups ordered by descending total", body = Vec<DimensionGroup>)
    )
)]
pub async fn equipment_by_location(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<DimensionGroup>>> {
    let groups = state.services.stats.equipment_by_location().await?;
    Ok(Json(groups))
}

/// Equipment grouped by building
#[utoipa::path(
    get,
    path = "/dashboard/equipment-by-edificio",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Groups ordered by descending total", body = Vec<DimensionGroup>)
    )
)]
pub async fn equipment_by_edificio(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<DimensionGroup>>> {
    let groups = state.services.stats.equipment_by_edificio().await?;
    Ok(Json(groups))
}
