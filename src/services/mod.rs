//! Business logic services

pub mod departments;
pub mod equipment;
pub mod export;
pub mod locations;
pub mod lookups;
pub mod stats;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub equipment: equipment::EquipmentService,
    pub locations: locations::LocationsService,
    pub departments: departments::DepartmentsService,
    pub lookups: lookups::LookupsService,
    pub stats: stats::StatsService,
    pub export: export::ExportService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            users: users::UsersService::new(repository.clone(), auth_config),
            equipment: equipment::EquipmentService::new(repository.clone()),
            locations: locations::LocationsService::new(repository.clone()),
            departments: departments::DepartmentsService::new(repository.clone()),
            lookups: lookups::LookupsService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            export: export::ExportService::new(repository.clone()),
            repository,
        }
    }
}
