//! Lookup catalogs: asset types, brands and buildings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Asset type catalog entry (tipos_bien)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TipoBien {
    pub id: Uuid,
    pub nombre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Brand catalog entry (marcas)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Marca {
    pub id: Uuid,
    pub nombre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Building catalog entry (edificios)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Edificio {
    pub id: Uuid,
    pub nombre: String,
    pub direccion: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create request shared by the name-only catalogs (tipos_bien, marcas)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLookupEntry {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
}

/// Update request shared by the name-only catalogs
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLookupEntry {
    pub nombre: Option<String>,
}

/// Create building request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEdificio {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    #[serde(default)]
    pub direccion: String,
}

/// Update building request (partial)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEdificio {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
}
