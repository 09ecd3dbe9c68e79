//! Lookup catalog repositories (tipos_bien, marcas, edificios)

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::lookup::{Edificio, Marca, TipoBien},
};

#[derive(Clone)]
pub struct LookupsRepository {
    pool: Pool<Postgres>,
}

impl LookupsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // -- tipos_bien ---------------------------------------------------------

    pub async fn tipos_list(&self) -> AppResult<Vec<TipoBien>> {
        let rows = sqlx::query_as::<_, TipoBien>("SELECT * FROM tipos_bien ORDER BY nombre")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn tipos_get_by_id(&self, id: Uuid) -> AppResult<TipoBien> {
        sqlx::query_as::<_, TipoBien>("SELECT * FROM tipos_bien WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de bien no encontrado".to_string()))
    }

    pub async fn tipos_insert(&self, tipo: &TipoBien) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO tipos_bien (id, nombre, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(tipo.id)
        .bind(&tipo.nombre)
        .bind(tipo.created_at)
        .bind(tipo.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_nombre_violation(e, "Este tipo de bien ya existe"))?;
        Ok(())
    }

    pub async fn tipos_update(&self, tipo: &TipoBien) -> AppResult<()> {
        let result = sqlx::query("UPDATE tipos_bien SET nombre = $2, updated_at = $3 WHERE id = $1")
            .bind(tipo.id)
            .bind(&tipo.nombre)
            .bind(tipo.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| unique_nombre_violation(e, "Este tipo de bien ya existe"))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tipo de bien no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn tipos_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM tipos_bien WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tipo de bien no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn tipos_exists_nombre(&self, nombre: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM tipos_bien WHERE nombre = $1 AND ($2::uuid IS NULL OR id != $2))",
        )
        .bind(nombre)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    // -- marcas -------------------------------------------------------------

    pub async fn marcas_list(&self) -> AppResult<Vec<Marca>> {
        let rows = sqlx::query_as::<_, Marca>("SELECT * FROM marcas ORDER BY nombre")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn marcas_get_by_id(&self, id: Uuid) -> AppResult<Marca> {
        sqlx::query_as::<_, Marca>("SELECT * FROM marcas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Marca no encontrada".to_string()))
    }

    pub async fn marcas_insert(&self, marca: &Marca) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO marcas (id, nombre, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(marca.id)
        .bind(&marca.nombre)
        .bind(marca.created_at)
        .bind(marca.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_nombre_violation(e, "Esta marca ya existe"))?;
        Ok(())
    }

    pub async fn marcas_update(&self, marca: &Marca) -> AppResult<()> {
        let result = sqlx::query("UPDATE marcas SET nombre = $2, updated_at = $3 WHERE id = $1")
            .bind(marca.id)
            .bind(&marca.nombre)
            .bind(marca.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| unique_nombre_violation(e, "Esta marca ya existe"))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Marca no encontrada".to_string()));
        }
        Ok(())
    }

    pub async fn marcas_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM marcas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Marca no encontrada".to_string()));
        }
        Ok(())
    }

    pub async fn marcas_exists_nombre(&self, nombre: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM marcas WHERE nombre = $1 AND ($2::uuid IS NULL OR id != $2))",
        )
        .bind(nombre)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    // -- edificios ----------------------------------------------------------

    pub async fn edificios_list(&self) -> AppResult<Vec<Edificio>> {
        let rows = sqlx::query_as::<_, Edificio>("SELECT * FROM edificios ORDER BY nombre")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn edificios_get_by_id(&self, id: Uuid) -> AppResult<Edificio> {
        sqlx::query_as::<_, Edificio>("SELECT * FROM edificios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Edificio no encontrado".to_string()))
    }

    pub async fn edificios_insert(&self, edificio: &Edificio) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO edificios (id, nombre, direccion, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(edificio.id)
        .bind(&edificio.nombre)
        .bind(&edificio.direccion)
        .bind(edificio.created_at)
        .bind(edificio.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_nombre_violation(e, "Este edificio ya existe"))?;
        Ok(())
    }

    pub async fn edificios_update(&self, edificio: &Edificio) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE edificios SET nombre = $2, direccion = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(edificio.id)
        .bind(&edificio.nombre)
        .bind(&edificio.direccion)
        .bind(edificio.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_nombre_violation(e, "Este edificio ya existe"))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Edificio no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn edificios_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM edificios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Edificio no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn edificios_exists_nombre(
        &self,
        nombre: &str,
        exclude: Option<Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM edificios WHERE nombre = $1 AND ($2::uuid IS NULL OR id != $2))",
        )
        .bind(nombre)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

fn unique_nombre_violation(e: sqlx::Error, message: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
            AppError::Validation(message.to_string())
        }
        _ => AppError::from(e),
    }
}
