//! Equipment endpoints: CRUD, change history and report exports

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        equipment::{CreateEquipment, Equipment, EquipmentQuery, UpdateEquipment},
        history::HistoryEntry,
    },
};

use super::AuthenticatedUser;

/// List equipment with optional filters
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(filter): Query<EquipmentQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list(&filter).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Unknown equipment")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment (admin/superadmin)
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Validation error (e.g. duplicate serial number)"),
        (status = 403, description = "Insufficient permissions")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    claims.require_admin()?;
    let equipment = state.services.equipment.create(data, &claims).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment (admin/superadmin)
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 404, description = "Unknown equipment")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    claims.require_admin()?;
    let equipment = state.services.equipment.update(id, data, &claims).await?;
    Ok(Json(equipment))
}

/// Delete equipment (superadmin only)
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Unknown equipment")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_superadmin()?;
    state.services.equipment.delete(id, &claims).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Change history of an equipment record
#[utoipa::path(
    get,
    path = "/history/{equipment_id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("equipment_id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "History entries, newest first", body = Vec<HistoryEntry>)
    )
)]
pub async fn get_history(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(equipment_id): Path<Uuid>,
) -> AppResult<Json<Vec<HistoryEntry>>> {
    let entries = state.services.equipment.history(equipment_id).await?;
    Ok(Json(entries))
}

/// Export the filtered inventory as a spreadsheet
#[utoipa::path(
    get,
    path = "/equipment/export/excel",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Inventory workbook (xlsx attachment)")
    )
)]
pub async fn export_excel(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(filter): Query<EquipmentQuery>,
) -> AppResult<Response> {
    let bytes = state.services.export.excel(&filter).await?;
    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=inventario.xlsx",
            ),
        ],
        bytes,
    )
        .into_response())
}

/// Export the filtered inventory as a PDF report
#[utoipa::path(
    get,
    path = "/equipment/export/pdf",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Inventory report (PDF attachment)")
    )
)]
pub async fn export_pdf(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(filter): Query<EquipmentQuery>,
) -> AppResult<Response> {
    let bytes = state.services.export.pdf(&filter).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=inventario.pdf",
            ),
        ],
        bytes,
    )
        .into_response())
}
