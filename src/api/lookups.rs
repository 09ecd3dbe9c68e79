//! Lookup catalog endpoints: tipos-bien, marcas, edificios.
//!
//! All of these are gated to admin/superadmin, reads included.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::lookup::{
        CreateEdificio, CreateLookupEntry, Edificio, Marca, TipoBien, UpdateEdificio,
        UpdateLookupEntry,
    },
};

use super::AuthenticatedUser;

// -- tipos_bien -------------------------------------------------------------

/// List asset types
#[utoipa::path(
    get,
    path = "/tipos-bien",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Asset type list", body = Vec<TipoBien>))
)]
pub async fn list_tipos_bien(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<TipoBien>>> {
    claims.require_admin()?;
    let tipos = state.services.lookups.tipos_list().await?;
    Ok(Json(tipos))
}

/// Create an asset type
#[utoipa::path(
    post,
    path = "/tipos-bien",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    request_body = CreateLookupEntry,
    responses(
        (status = 201, description = "Asset type created", body = TipoBien),
        (status = 400, description = "Name already exists")
    )
)]
pub async fn create_tipo_bien(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateLookupEntry>,
) -> AppResult<(StatusCode, Json<TipoBien>)> {
    claims.require_admin()?;
    let tipo = state.services.lookups.tipos_create(data).await?;
    Ok((StatusCode::CREATED, Json(tipo)))
}

/// Update an asset type
#[utoipa::path(
    put,
    path = "/tipos-bien/{id}",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Asset type ID")),
    request_body = UpdateLookupEntry,
    responses(
        (status = 200, description = "Asset type updated", body = TipoBien),
        (status = 404, description = "Unknown asset type")
    )
)]
pub async fn update_tipo_bien(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateLookupEntry>,
) -> AppResult<Json<TipoBien>> {
    claims.require_admin()?;
    let tipo = state.services.lookups.tipos_update(id, data).await?;
    Ok(Json(tipo))
}

/// Delete an asset type; blocked while equipment uses it
#[utoipa::path(
    delete,
    path = "/tipos-bien/{id}",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Asset type ID")),
    responses(
        (status = 204, description = "Asset type deleted"),
        (status = 409, description = "Asset type still referenced")
    )
)]
pub async fn delete_tipo_bien(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.lookups.tipos_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- marcas -----------------------------------------------------------------

/// List brands
#[utoipa::path(
    get,
    path = "/marcas",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Brand list", body = Vec<Marca>))
)]
pub async fn list_marcas(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Marca>>> {
    claims.require_admin()?;
    let marcas = state.services.lookups.marcas_list().await?;
    Ok(Json(marcas))
}

/// Create a brand
#[utoipa::path(
    post,
    path = "/marcas",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    request_body = CreateLookupEntry,
    responses(
        (status = 201, description = "Brand created", body = Marca),
        (status = 400, description = "Name already exists")
    )
)]
pub async fn create_marca(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateLookupEntry>,
) -> AppResult<(StatusCode, Json<Marca>)> {
    claims.require_admin()?;
    let marca = state.services.lookups.marcas_create(data).await?;
    Ok((StatusCode::CREATED, Json(marca)))
}

/// Update a brand
#[utoipa::path(
    put,
    path = "/marcas/{id}",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Brand ID")),
    request_body = UpdateLookupEntry,
    responses(
        (status = 200, description = "Brand updated", body = Marca),
        (status = 404, description = "Unknown brand")
    )
)]
pub async fn update_marca(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateLookupEntry>,
) -> AppResult<Json<Marca>> {
    claims.require_admin()?;
    let marca = state.services.lookups.marcas_update(id, data).await?;
    Ok(Json(marca))
}

/// Delete a brand; blocked while equipment uses it
#[utoipa::path(
    delete,
    path = "/marcas/{id}",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 204, description = "Brand deleted"),
        (status = 409, description = "Brand still referenced")
    )
)]
pub async fn delete_marca(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.lookups.marcas_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- edificios --------------------------------------------------------------

/// List buildings
#[utoipa::path(
    get,
    path = "/edificios",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Building list", body = Vec<Edificio>))
)]
pub async fn list_edificios(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Edificio>>> {
    claims.require_admin()?;
    let edificios = state.services.lookups.edificios_list().await?;
    Ok(Json(edificios))
}

/// Create a building
#[utoipa::path(
    post,
    path = "/edificios",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    request_body = CreateEdificio,
    responses(
        (status = 201, description = "Building created", body = Edificio),
        (status = 400, description = "Name already exists")
    )
)]
pub async fn create_edificio(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateEdificio>,
) -> AppResult<(StatusCode, Json<Edificio>)> {
    claims.require_admin()?;
    let edificio = state.services.lookups.edificios_create(data).await?;
    Ok((StatusCode::CREATED, Json(edificio)))
}

/// Update a building
#[utoipa::path(
    put,
    path = "/edificios/{id}",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Building ID")),
    request_body = UpdateEdificio,
    responses(
        (status = 200, description = "Building updated", body = Edificio),
        (status = 404, description = "Unknown building")
    )
)]
pub async fn update_edificio(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateEdificio>,
) -> AppResult<Json<Edificio>> {
    claims.require_admin()?;
    let edificio = state.services.lookups.edificios_update(id, data).await?;
    Ok(Json(edificio))
}

/// Delete a building; blocked while locations reference it
#[utoipa::path(
    delete,
    path = "/edificios/{id}",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Building ID")),
    responses(
        (status = 204, description = "Building deleted"),
        (status = 409, description = "Building still referenced")
    )
)]
pub async fn delete_edificio(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.lookups.edificios_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
