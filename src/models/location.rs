//! Location model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Physical location inside a building
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: Uuid,
    /// Building name (references the edificios catalog by name)
    pub edificio: String,
    pub piso: String,
    pub salon_aula: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// Display name under which equipment records reference this location
    pub fn display_name(&self) -> String {
        format!("{} - {} - {}", self.edificio, self.piso, self.salon_aula)
    }
}

/// Create location request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocation {
    #[validate(length(min = 1, message = "El edificio es requerido"))]
    pub edificio: String,
    #[validate(length(min = 1, message = "El piso es requerido"))]
    pub piso: String,
    #[validate(length(min = 1, message = "El salón/aula es requerido"))]
    pub salon_aula: String,
}

/// Update location request (partial)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLocation {
    pub edificio: Option<String>,
    pub piso: Option<String>,
    pub salon_aula: Option<String>,
}
