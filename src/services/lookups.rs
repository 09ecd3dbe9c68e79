//! Lookup catalog service (tipos_bien, marcas, edificios)

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::lookup::{
        CreateEdificio, CreateLookupEntry, Edificio, Marca, TipoBien, UpdateEdificio,
        UpdateLookupEntry,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LookupsService {
    repository: Repository,
}

impl LookupsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // -- tipos_bien ---------------------------------------------------------

    pub async fn tipos_list(&self) -> AppResult<Vec<TipoBien>> {
        self.repository.lookups.tipos_list().await
    }

    pub async fn tipos_create(&self, data: CreateLookupEntry) -> AppResult<TipoBien> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if self
            .repository
            .lookups
            .tipos_exists_nombre(&data.nombre, None)
            .await?
        {
            return Err(AppError::Validation(
                "Este tipo de bien ya existe".to_string(),
            ));
        }

        let now = Utc::now();
        let tipo = TipoBien {
            id: Uuid::new_v4(),
            nombre: data.nombre,
            created_at: now,
            updated_at: now,
        };
        self.repository.lookups.tipos_insert(&tipo).await?;
        Ok(tipo)
    }

    pub async fn tipos_update(&self, id: Uuid, data: UpdateLookupEntry) -> AppResult<TipoBien> {
        let mut tipo = self.repository.lookups.tipos_get_by_id(id).await?;

        if let Some(nombre) = data.nombre {
            if nombre != tipo.nombre
                && self
                    .repository
                    .lookups
                    .tipos_exists_nombre(&nombre, Some(id))
                    .await?
            {
                return Err(AppError::Validation(
                    "Este tipo de bien ya existe".to_string(),
                ));
            }
            tipo.nombre = nombre;
        }
        tipo.updated_at = Utc::now();

        self.repository.lookups.tipos_update(&tipo).await?;
        Ok(tipo)
    }

    /// Delete an asset type; blocked while equipment uses it
    pub async fn tipos_delete(&self, id: Uuid) -> AppResult<()> {
        let tipo = self.repository.lookups.tipos_get_by_id(id).await?;

        let count = self
            .repository
            .equipment
            .count_by_tipo_bien(&tipo.nombre)
            .await?;
        if count > 0 {
            return Err(AppError::ReferentialIntegrity(
                "No se puede eliminar el tipo de bien porque está siendo usado por equipos"
                    .to_string(),
            ));
        }

        self.repository.lookups.tipos_delete(id).await
    }

    // -- marcas -------------------------------------------------------------

    pub async fn marcas_list(&self) -> AppResult<Vec<Marca>> {
        self.repository.lookups.marcas_list().await
    }

    pub async fn marcas_create(&self, data: CreateLookupEntry) -> AppResult<Marca> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if self
            .repository
            .lookups
            .marcas_exists_nombre(&data.nombre, None)
            .await?
        {
            return Err(AppError::Validation("Esta marca ya existe".to_string()));
        }

        let now = Utc::now();
        let marca = Marca {
            id: Uuid::new_v4(),
            nombre: data.nombre,
            created_at: now,
            updated_at: now,
        };
        self.repository.lookups.marcas_insert(&marca).await?;
        Ok(marca)
    }

    pub async fn marcas_update(&self, id: Uuid, data: UpdateLookupEntry) -> AppResult<Marca> {
        let mut marca = self.repository.lookups.marcas_get_by_id(id).await?;

        if let Some(nombre) = data.nombre {
            if nombre != marca.nombre
                && self
                    .repository
                    .lookups
                    .marcas_exists_nombre(&nombre, Some(id))
                    .await?
            {
                return Err(AppError::Validation("Esta marca ya existe".to_string()));
            }
            marca.nombre = nombre;
        }
        marca.updated_at = Utc::now();

        self.repository.lookups.marcas_update(&marca).await?;
        Ok(marca)
    }

    /// Delete a brand; blocked while equipment uses it
    pub async fn marcas_delete(&self, id: Uuid) -> AppResult<()> {
        let marca = self.repository.lookups.marcas_get_by_id(id).await?;

        let count = self
            .repository
            .equipment
            .count_by_marca(&marca.nombre)
            .await?;
        if count > 0 {
            return Err(AppError::ReferentialIntegrity(
                "No se puede eliminar la marca porque está siendo usada por equipos".to_string(),
            ));
        }

        self.repository.lookups.marcas_delete(id).await
    }

    // -- edificios ----------------------------------------------------------

    pub async fn edificios_list(&self) -> AppResult<Vec<Edificio>> {
        self.repository.lookups.edificios_list().await
    }

    pub async fn edificios_create(&self, data: CreateEdificio) -> AppResult<Edificio> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if self
            .repository
            .lookups
            .edificios_exists_nombre(&data.nombre, None)
            .await?
        {
            return Err(AppError::Validation("Este edificio ya existe".to_string()));
        }

        let now = Utc::now();
        let edificio = Edificio {
            id: Uuid::new_v4(),
            nombre: data.nombre,
            direccion: data.direccion,
            created_at: now,
            updated_at: now,
        };
        self.repository.lookups.edificios_insert(&edificio).await?;
        Ok(edificio)
    }

    pub async fn edificios_update(&self, id: Uuid, data: UpdateEdificio) -> AppResult<Edificio> {
        let mut edificio = self.repository.lookups.edificios_get_by_id(id).await?;

        if let Some(nombre) = data.nombre {
            if nombre != edificio.nombre
                && self
                    .repository
                    .lookups
                    .edificios_exists_nombre(&nombre, Some(id))
                    .await?
            {
                return Err(AppError::Validation("Este edificio ya existe".to_string()));
            }
            edificio.nombre = nombre;
        }
        if let Some(direccion) = data.direccion {
            edificio.direccion = direccion;
        }
        edificio.updated_at = Utc::now();

        self.repository.lookups.edificios_update(&edificio).await?;
        Ok(edificio)
    }

    /// Delete a building; blocked while locations reference it
    pub async fn edificios_delete(&self, id: Uuid) -> AppResult<()> {
        let edificio = self.repository.lookups.edificios_get_by_id(id).await?;

        let count = self
            .repository
            .locations
            .count_by_edificio(&edificio.nombre)
            .await?;
        if count > 0 {
            return Err(AppError::ReferentialIntegrity(
                "No se puede eliminar el edificio porque está siendo usado por ubicaciones"
                    .to_string(),
            ));
        }

        self.repository.lookups.edificios_delete(id).await
    }
}
