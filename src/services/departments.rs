//! Departments service

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::department::{CreateDepartment, Department, UpdateDepartment, Worker},
    repository::Repository,
};

#[derive(Clone)]
pub struct DepartmentsService {
    repository: Repository,
}

impl DepartmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Department>> {
        self.repository.departments.list().await
    }

    pub async fn create(&self, data: CreateDepartment) -> AppResult<Department> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        check_worker_count(data.numero_trabajadores, &data.trabajadores)?;

        // The referenced location must exist
        self.repository
            .locations
            .get_by_id(data.ubicacion_id)
            .await
            .map_err(|_| AppError::Validation("Ubicación no encontrada".to_string()))?;

        let now = Utc::now();
        let department = Department {
            id: Uuid::new_v4(),
            nombre: data.nombre,
            ubicacion_id: data.ubicacion_id,
            numero_trabajadores: data.numero_trabajadores,
            trabajadores: data.trabajadores,
            created_at: now,
            updated_at: now,
        };
        self.repository.departments.insert(&department).await?;
        Ok(department)
    }

    pub async fn update(&self, id: Uuid, data: UpdateDepartment) -> AppResult<Department> {
        let mut department = self.repository.departments.get_by_id(id).await?;

        if let Some(ubicacion_id) = data.ubicacion_id {
            self.repository
                .locations
                .get_by_id(ubicacion_id)
                .await
                .map_err(|_| AppError::Validation("Ubicación no encontrada".to_string()))?;
            department.ubicacion_id = ubicacion_id;
        }
        if let Some(nombre) = data.nombre {
            department.nombre = nombre;
        }
        if let Some(numero) = data.numero_trabajadores {
            department.numero_trabajadores = numero;
        }
        if let Some(trabajadores) = data.trabajadores {
            department.trabajadores = trabajadores;
        }

        // The invariant must hold for the record as it will be persisted
        check_worker_count(department.numero_trabajadores, &department.trabajadores)?;

        department.updated_at = Utc::now();
        self.repository.departments.update(&department).await?;
        Ok(department)
    }

    /// Delete a department; blocked while equipment is assigned to it
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let department = self.repository.departments.get_by_id(id).await?;

        let equipment_count = self
            .repository
            .equipment
            .count_by_departamento(&department.nombre)
            .await?;
        if equipment_count > 0 {
            return Err(AppError::ReferentialIntegrity(
                "No se puede eliminar el departamento porque está siendo usado por equipos"
                    .to_string(),
            ));
        }

        self.repository.departments.delete(id).await
    }
}

/// The declared worker count must match the worker list before persistence
fn check_worker_count(declared: i32, trabajadores: &[Worker]) -> AppResult<()> {
    if trabajadores.len() as i32 != declared {
        return Err(AppError::Validation(format!(
            "El número de trabajadores declarado ({}) no coincide con la lista proporcionada ({})",
            declared,
            trabajadores.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(n: u32) -> Worker {
        Worker {
            nombre_completo: format!("Trabajador {}", n),
            puesto: "Analista".to_string(),
            numero_trabajador: format!("T-{:04}", n),
        }
    }

    #[test]
    fn worker_count_must_match_declared_count() {
        let two = vec![worker(1), worker(2)];
        assert!(check_worker_count(3, &two).is_err());
        assert!(check_worker_count(2, &two).is_ok());
        assert!(check_worker_count(0, &[]).is_ok());
    }
}
