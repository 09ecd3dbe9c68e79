//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::enums::{AssetType, OperationalStatus};

/// Internal row structure (tipo_bien / estado_operativo as plain text)
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentRow {
    id: Uuid,
    ubicacion: String,
    resguardante: String,
    departamento: String,
    tipo_bien: String,
    numero_serie: String,
    numero_factura: String,
    numero_inventario: String,
    marca: String,
    modelo: String,
    fecha_adquisicion: NaiveDate,
    estado_operativo: String,
    observaciones: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: String,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Equipment {
            id: row.id,
            ubicacion: row.ubicacion,
            resguardante: row.resguardante,
            departamento: row.departamento,
            tipo_bien: AssetType::from(row.tipo_bien),
            numero_serie: row.numero_serie,
            numero_factura: row.numero_factura,
            numero_inventario: row.numero_inventario,
            marca: row.marca,
            modelo: row.modelo,
            fecha_adquisicion: row.fecha_adquisicion,
            estado_operativo: OperationalStatus::from(row.estado_operativo),
            observaciones: row.observaciones,
            created_at: row.created_at,
            updated_at: row.updated_at,
            created_by: row.created_by,
        }
    }
}

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    /// Location display name ("edificio - piso - salon_aula")
    pub ubicacion: String,
    /// Custodian responsible for the item
    pub resguardante: String,
    /// Department name
    pub departamento: String,
    pub tipo_bien: AssetType,
    /// Serial number, unique across all records
    pub numero_serie: String,
    pub numero_factura: String,
    pub numero_inventario: String,
    pub marca: String,
    pub modelo: String,
    pub fecha_adquisicion: NaiveDate,
    pub estado_operativo: OperationalStatus,
    pub observaciones: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Email of the user who created the record
    pub created_by: String,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "La ubicación es requerida"))]
    pub ubicacion: String,
    #[validate(length(min = 1, message = "El resguardante es requerido"))]
    pub resguardante: String,
    #[validate(length(min = 1, message = "El departamento es requerido"))]
    pub departamento: String,
    pub tipo_bien: AssetType,
    #[validate(length(min = 1, message = "El número de serie es requerido"))]
    pub numero_serie: String,
    #[serde(default)]
    pub numero_factura: String,
    #[serde(default)]
    pub numero_inventario: String,
    #[validate(length(min = 1, message = "La marca es requerida"))]
    pub marca: String,
    #[validate(length(min = 1, message = "El modelo es requerido"))]
    pub modelo: String,
    pub fecha_adquisicion: NaiveDate,
    pub estado_operativo: OperationalStatus,
    #[serde(default)]
    pub observaciones: String,
}

/// Update equipment request (partial)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub ubicacion: Option<String>,
    pub resguardante: Option<String>,
    pub departamento: Option<String>,
    pub tipo_bien: Option<AssetType>,
    pub numero_serie: Option<String>,
    pub numero_factura: Option<String>,
    pub numero_inventario: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub fecha_adquisicion: Option<NaiveDate>,
    pub estado_operativo: Option<OperationalStatus>,
    pub observaciones: Option<String>,
}

/// Equipment list filters
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
pub struct EquipmentQuery {
    pub tipo_bien: Option<String>,
    pub estado_operativo: Option<String>,
    pub departamento: Option<String>,
    pub ubicacion: Option<String>,
    /// Case-insensitive substring over numero_serie, marca, modelo, resguardante
    pub search: Option<String>,
}
