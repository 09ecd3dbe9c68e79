//! Repository layer for database operations

pub mod departments;
pub mod equipment;
pub mod history;
pub mod locations;
pub mod lookups;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub equipment: equipment::EquipmentRepository,
    pub locations: locations::LocationsRepository,
    pub departments: departments::DepartmentsRepository,
    pub lookups: lookups::LookupsRepository,
    pub history: history::HistoryRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            locations: locations::LocationsRepository::new(pool.clone()),
            departments: departments::DepartmentsRepository::new(pool.clone()),
            lookups: lookups::LookupsRepository::new(pool.clone()),
            history: history::HistoryRepository::new(pool.clone()),
            pool,
        }
    }

    /// Check database connectivity (readiness probe)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
