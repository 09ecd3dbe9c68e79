//! Equipment service: CRUD orchestration plus the audit trail

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{CreateEquipment, Equipment, EquipmentQuery, UpdateEquipment},
        history::{HistoryAction, HistoryEntry},
        user::UserClaims,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filter: &EquipmentQuery) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list(filter).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Create an equipment record and append a `created` history entry
    pub async fn create(&self, data: CreateEquipment, actor: &UserClaims) -> AppResult<Equipment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self
            .repository
            .equipment
            .exists_serial(&data.numero_serie, None)
            .await?
        {
            return Err(AppError::Validation(
                "Ya existe un equipo con ese número de serie".to_string(),
            ));
        }

        let now = Utc::now();
        let equipment = Equipment {
            id: Uuid::new_v4(),
            ubicacion: data.ubicacion,
            resguardante: data.resguardante,
            departamento: data.departamento,
            tipo_bien: data.tipo_bien,
            numero_serie: data.numero_serie,
            numero_factura: data.numero_factura,
            numero_inventario: data.numero_inventario,
            marca: data.marca,
            modelo: data.modelo,
            fecha_adquisicion: data.fecha_adquisicion,
            estado_operativo: data.estado_operativo,
            observaciones: data.observaciones,
            created_at: now,
            updated_at: now,
            created_by: actor.sub.clone(),
        };

        self.repository.equipment.insert(&equipment).await?;
        self.append_history(
            equipment.id,
            HistoryAction::Created,
            actor,
            None,
            Some(serde_json::to_value(&equipment).unwrap_or_default()),
        )
        .await?;

        Ok(equipment)
    }

    /// Apply a partial update and append an `updated` history entry carrying
    /// the previous record and the fields that changed
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateEquipment,
        actor: &UserClaims,
    ) -> AppResult<Equipment> {
        let existing = self.repository.equipment.get_by_id(id).await?;

        if let Some(serie) = &data.numero_serie {
            if serie != &existing.numero_serie
                && self
                    .repository
                    .equipment
                    .exists_serial(serie, Some(id))
                    .await?
            {
                return Err(AppError::Validation(
                    "Ya existe un equipo con ese número de serie".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let mut changed = serde_json::Map::new();

        macro_rules! apply {
            ($field:ident, $target:expr) => {
                if let Some(value) = data.$field {
                    changed.insert(
                        stringify!($field).to_string(),
                        serde_json::to_value(&value).unwrap_or_default(),
                    );
                    $target = value;
                }
            };
        }

        let mut updated = existing.clone();
        apply!(ubicacion, updated.ubicacion);
        apply!(resguardante, updated.resguardante);
        apply!(departamento, updated.departamento);
        apply!(tipo_bien, updated.tipo_bien);
        apply!(numero_serie, updated.numero_serie);
        apply!(numero_factura, updated.numero_factura);
        apply!(numero_inventario, updated.numero_inventario);
        apply!(marca, updated.marca);
        apply!(modelo, updated.modelo);
        apply!(fecha_adquisicion, updated.fecha_adquisicion);
        apply!(estado_operativo, updated.estado_operativo);
        apply!(observaciones, updated.observaciones);
        updated.updated_at = now;
        changed.insert("updated_at".to_string(), json!(now));

        self.repository.equipment.update(&updated).await?;
        self.append_history(
            id,
            HistoryAction::Updated,
            actor,
            Some(serde_json::to_value(&existing).unwrap_or_default()),
            Some(serde_json::Value::Object(changed)),
        )
        .await?;

        Ok(updated)
    }

    /// Delete a record; its history is kept and receives a final `deleted` entry
    pub async fn delete(&self, id: Uuid, actor: &UserClaims) -> AppResult<()> {
        let existing = self.repository.equipment.get_by_id(id).await?;
        self.repository.equipment.delete(id).await?;
        self.append_history(
            id,
            HistoryAction::Deleted,
            actor,
            Some(serde_json::to_value(&existing).unwrap_or_default()),
            None,
        )
        .await?;
        Ok(())
    }

    /// Change history of one record, newest first
    pub async fn history(&self, equipment_id: Uuid) -> AppResult<Vec<HistoryEntry>> {
        self.repository.history.list_by_equipment(equipment_id).await
    }

    async fn append_history(
        &self,
        equipment_id: Uuid,
        action: HistoryAction,
        actor: &UserClaims,
        old_values: Option<serde_json::Value>,
        new_values: Option<serde_json::Value>,
    ) -> AppResult<()> {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            equipment_id,
            action,
            changed_by: actor.sub.clone(),
            timestamp: Utc::now(),
            old_values,
            new_values,
        };
        self.repository.history.insert(&entry).await
    }
}
