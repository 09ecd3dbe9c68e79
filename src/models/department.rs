//! Department model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A worker assigned to a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Worker {
    pub nombre_completo: String,
    pub puesto: String,
    pub numero_trabajador: String,
}

/// Internal row structure (workers stored as JSONB)
#[derive(Debug, Clone, FromRow)]
pub struct DepartmentRow {
    id: Uuid,
    nombre: String,
    ubicacion_id: Uuid,
    numero_trabajadores: i32,
    trabajadores: Json<Vec<Worker>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department {
            id: row.id,
            nombre: row.nombre,
            ubicacion_id: row.ubicacion_id,
            numero_trabajadores: row.numero_trabajadores,
            trabajadores: row.trabajadores.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Department record.
///
/// Invariant: `trabajadores.len() == numero_trabajadores` before any
/// create or update is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Department {
    pub id: Uuid,
    pub nombre: String,
    /// Must reference an existing location
    pub ubicacion_id: Uuid,
    pub numero_trabajadores: i32,
    pub trabajadores: Vec<Worker>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create department request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDepartment {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    pub ubicacion_id: Uuid,
    pub numero_trabajadores: i32,
    #[serde(default)]
    pub trabajadores: Vec<Worker>,
}

/// Update department request (partial)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateDepartment {
    pub nombre: Option<String>,
    pub ubicacion_id: Option<Uuid>,
    pub numero_trabajadores: Option<i32>,
    pub trabajadores: Option<Vec<Worker>>,
}
