//! Equipment repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipment, EquipmentQuery, EquipmentRow},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment matching the given filters
    pub async fn list(&self, filter: &EquipmentQuery) -> AppResult<Vec<Equipment>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(v) = &filter.tipo_bien {
            params.push(v.clone());
            conditions.push(format!("tipo_bien = ${}", params.len()));
        }
        if let Some(v) = &filter.estado_operativo {
            params.push(v.clone());
            conditions.push(format!("estado_operativo = ${}", params.len()));
        }
        if let Some(v) = &filter.departamento {
            params.push(v.clone());
            conditions.push(format!("departamento = ${}", params.len()));
        }
        if let Some(v) = &filter.ubicacion {
            params.push(v.clone());
            conditions.push(format!("ubicacion = ${}", params.len()));
        }
        if let Some(v) = &filter.search {
            params.push(format!("%{}%", v));
            let i = params.len();
            conditions.push(format!(
                "(numero_serie ILIKE ${i} OR marca ILIKE ${i} OR modelo ILIKE ${i} OR resguardante ILIKE ${i})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT * FROM equipment{} ORDER BY created_at DESC, id",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, EquipmentRow>(&query);
        for param in &params {
            builder = builder.bind(param);
        }
        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Equipment> {
        sqlx::query_as::<_, EquipmentRow>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Equipment::from)
            .ok_or_else(|| AppError::NotFound("Equipo no encontrado".to_string()))
    }

    /// Insert a new equipment record
    pub async fn insert(&self, eq: &Equipment) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO equipment (
                id, ubicacion, resguardante, departamento, tipo_bien,
                numero_serie, numero_factura, numero_inventario, marca, modelo,
                fecha_adquisicion, estado_operativo, observaciones,
                created_at, updated_at, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(eq.id)
        .bind(&eq.ubicacion)
        .bind(&eq.resguardante)
        .bind(&eq.departamento)
        .bind(eq.tipo_bien.as_str())
        .bind(&eq.numero_serie)
        .bind(&eq.numero_factura)
        .bind(&eq.numero_inventario)
        .bind(&eq.marca)
        .bind(&eq.modelo)
        .bind(eq.fecha_adquisicion)
        .bind(eq.estado_operativo.as_str())
        .bind(&eq.observaciones)
        .bind(eq.created_at)
        .bind(eq.updated_at)
        .bind(&eq.created_by)
        .execute(&self.pool)
        .await
        .map_err(unique_serial_violation)?;
        Ok(())
    }

    /// Update an existing equipment record
    pub async fn update(&self, eq: &Equipment) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE equipment
            SET ubicacion = $2, resguardante = $3, departamento = $4, tipo_bien = $5,
                numero_serie = $6, numero_factura = $7, numero_inventario = $8,
                marca = $9, modelo = $10, fecha_adquisicion = $11,
                estado_operativo = $12, observaciones = $13, updated_at = $14
            WHERE id = $1
            "#,
        )
        .bind(eq.id)
        .bind(&eq.ubicacion)
        .bind(&eq.resguardante)
        .bind(&eq.departamento)
        .bind(eq.tipo_bien.as_str())
        .bind(&eq.numero_serie)
        .bind(&eq.numero_factura)
        .bind(&eq.numero_inventario)
        .bind(&eq.marca)
        .bind(&eq.modelo)
        .bind(eq.fecha_adquisicion)
        .bind(eq.estado_operativo.as_str())
        .bind(&eq.observaciones)
        .bind(eq.updated_at)
        .execute(&self.pool)
        .await
        .map_err(unique_serial_violation)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Equipo no encontrado".to_string()));
        }
        Ok(())
    }

    /// Delete an equipment record
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Equipo no encontrado".to_string()));
        }
        Ok(())
    }

    /// Check whether a serial number is taken, optionally excluding one record
    pub async fn exists_serial(&self, numero_serie: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM equipment WHERE numero_serie = $1 AND ($2::uuid IS NULL OR id != $2))",
        )
        .bind(numero_serie)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Count records assigned to a department (referential guard)
    pub async fn count_by_departamento(&self, nombre: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE departamento = $1")
            .bind(nombre)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count records placed at a location display name (referential guard)
    pub async fn count_by_ubicacion(&self, ubicacion: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE ubicacion = $1")
            .bind(ubicacion)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count records of an asset type (referential guard)
    pub async fn count_by_tipo_bien(&self, nombre: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE tipo_bien = $1")
            .bind(nombre)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count records of a brand (referential guard)
    pub async fn count_by_marca(&self, nombre: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE marca = $1")
            .bind(nombre)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn unique_serial_violation(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
            AppError::Validation("Ya existe un equipo con ese número de serie".to_string())
        }
        _ => AppError::from(e),
    }
}
