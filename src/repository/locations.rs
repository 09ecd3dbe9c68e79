//! Locations repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::location::Location,
};

#[derive(Clone)]
pub struct LocationsRepository {
    pool: Pool<Postgres>,
}

impl LocationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all locations
    pub async fn list(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations ORDER BY edificio, piso, salon_aula",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get location by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Location> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Ubicación no encontrada".to_string()))
    }

    /// Insert a new location
    pub async fn insert(&self, location: &Location) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO locations (id, edificio, piso, salon_aula, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(location.id)
        .bind(&location.edificio)
        .bind(&location.piso)
        .bind(&location.salon_aula)
        .bind(location.created_at)
        .bind(location.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Update an existing location
    pub async fn update(&self, location: &Location) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE locations
            SET edificio = $2, piso = $3, salon_aula = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(location.id)
        .bind(&location.edificio)
        .bind(&location.piso)
        .bind(&location.salon_aula)
        .bind(location.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Ubicación no encontrada".to_string()));
        }
        Ok(())
    }

    /// Delete a location
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Ubicación no encontrada".to_string()));
        }
        Ok(())
    }

    /// Count locations inside a building (referential guard)
    pub async fn count_by_edificio(&self, nombre: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations WHERE edificio = $1")
            .bind(nombre)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
