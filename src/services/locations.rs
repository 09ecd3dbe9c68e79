//! Locations service

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::location::{CreateLocation, Location, UpdateLocation},
    repository::Repository,
};

#[derive(Clone)]
pub struct LocationsService {
    repository: Repository,
}

impl LocationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Location>> {
        self.repository.locations.list().await
    }

    pub async fn create(&self, data: CreateLocation) -> AppResult<Location> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let now = Utc::now();
        let location = Location {
            id: Uuid::new_v4(),
            edificio: data.edificio,
            piso: data.piso,
            salon_aula: data.salon_aula,
            created_at: now,
            updated_at: now,
        };
        self.repository.locations.insert(&location).await?;
        Ok(location)
    }

    pub async fn update(&self, id: Uuid, data: UpdateLocation) -> AppResult<Location> {
        let mut location = self.repository.locations.get_by_id(id).await?;

        if let Some(edificio) = data.edificio {
            location.edificio = edificio;
        }
        if let Some(piso) = data.piso {
            location.piso = piso;
        }
        if let Some(salon_aula) = data.salon_aula {
            location.salon_aula = salon_aula;
        }
        location.updated_at = Utc::now();

        self.repository.locations.update(&location).await?;
        Ok(location)
    }

    /// Delete a location; blocked while equipment or departments reference it
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let location = self.repository.locations.get_by_id(id).await?;

        let equipment_count = self
            .repository
            .equipment
            .count_by_ubicacion(&location.display_name())
            .await?;
        if equipment_count > 0 {
            return Err(AppError::ReferentialIntegrity(
                "No se puede eliminar la ubicación porque está siendo usada por equipos"
                    .to_string(),
            ));
        }

        let department_count = self
            .repository
            .departments
            .count_by_ubicacion_id(id)
            .await?;
        if department_count > 0 {
            return Err(AppError::ReferentialIntegrity(
                "No se puede eliminar la ubicación porque está siendo usada por departamentos"
                    .to_string(),
            ));
        }

        self.repository.locations.delete(id).await
    }
}
