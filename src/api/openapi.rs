//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, dashboard, departments, equipment, health, locations, lookups, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SIRIU API",
        version = "1.0.0",
        description = "Equipment Inventory Management REST API"
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        // Auth
        auth::login,
        auth::me,
        auth::register,
        auth::change_password,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::get_history,
        equipment::export_excel,
        equipment::export_pdf,
        // Dashboard
        dashboard::get_stats,
        dashboard::equipment_by_department,
        dashboard::equipment_by_location,
        dashboard::equipment_by_edificio,
        // Locations
        locations::list_locations,
        locations::create_location,
        locations::update_location,
        locations::delete_location,
        // Departments
        departments::list_departments,
        departments::create_department,
        departments::update_department,
        departments::delete_department,
        // Catalogs
        lookups::list_tipos_bien,
        lookups::create_tipo_bien,
        lookups::update_tipo_bien,
        lookups::delete_tipo_bien,
        lookups::list_marcas,
        lookups::create_marca,
        lookups::update_marca,
        lookups::delete_marca,
        lookups::list_edificios,
        lookups::create_edificio,
        lookups::update_edificio,
        lookups::delete_edificio,
        // Users
        users::list_users,
        users::update_user,
        users::delete_user,
        users::reset_password,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::ChangePassword,
            crate::models::enums::Role,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::EquipmentQuery,
            crate::models::enums::AssetType,
            crate::models::enums::OperationalStatus,
            crate::models::history::HistoryEntry,
            crate::models::history::HistoryAction,
            // Dashboard
            dashboard::DashboardStats,
            dashboard::DimensionGroup,
            // Locations
            crate::models::location::Location,
            crate::models::location::CreateLocation,
            crate::models::location::UpdateLocation,
            // Departments
            crate::models::department::Department,
            crate::models::department::Worker,
            crate::models::department::CreateDepartment,
            crate::models::department::UpdateDepartment,
            // Catalogs
            crate::models::lookup::TipoBien,
            crate::models::lookup::Marca,
            crate::models::lookup::Edificio,
            crate::models::lookup::CreateLookupEntry,
            crate::models::lookup::UpdateLookupEntry,
            crate::models::lookup::CreateEdificio,
            crate::models::lookup::UpdateEdificio,
            // Health
            health::RootResponse,
            health::HealthResponse,
            // Misc
            super::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "equipment", description = "Equipment inventory management"),
        (name = "dashboard", description = "Aggregation views"),
        (name = "locations", description = "Location management"),
        (name = "departments", description = "Department management"),
        (name = "catalogs", description = "Lookup catalogs (asset types, brands, buildings)"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
