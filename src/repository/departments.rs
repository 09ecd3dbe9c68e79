//! Departments repository

use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::department::{Department, DepartmentRow},
};

#[derive(Clone)]
pub struct DepartmentsRepository {
    pool: Pool<Postgres>,
}

impl DepartmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all departments
    pub async fn list(&self) -> AppResult<Vec<Department>> {
        let rows = sqlx::query_as::<_, DepartmentRow>("SELECT * FROM departments ORDER BY nombre, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Department::from).collect())
    }

    /// Get department by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Department> {
        sqlx::query_as::<_, DepartmentRow>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Department::from)
            .ok_or_else(|| AppError::NotFound("Departamento no encontrado".to_string()))
    }

    /// Insert a new department
    pub async fn insert(&self, department: &Department) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO departments (
                id, nombre, ubicacion_id, numero_trabajadores, trabajadores,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(department.id)
        .bind(&department.nombre)
        .bind(department.ubicacion_id)
        .bind(department.numero_trabajadores)
        .bind(Json(&department.trabajadores))
        .bind(department.created_at)
        .bind(department.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Update an existing department
    pub async fn update(&self, department: &Department) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE departments
            SET nombre = $2, ubicacion_id = $3, numero_trabajadores = $4,
                trabajadores = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(department.id)
        .bind(&department.nombre)
        .bind(department.ubicacion_id)
        .bind(department.numero_trabajadores)
        .bind(Json(&department.trabajadores))
        .bind(department.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Departamento no encontrado".to_string()));
        }
        Ok(())
    }

    /// Delete a department
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Departamento no encontrado".to_string()));
        }
        Ok(())
    }

    /// Count departments referencing a location (referential guard)
    pub async fn count_by_ubicacion_id(&self, ubicacion_id: Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM departments WHERE ubicacion_id = $1")
                .bind(ubicacion_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
