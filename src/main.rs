//! SIRIU Server - Equipment Inventory Management
//!
//! A Rust REST API server for the university equipment inventory.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use siriu_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("siriu_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SIRIU Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create the default superadmin account when none exists
    services
        .users
        .bootstrap_superadmin()
        .await
        .expect("Failed to bootstrap superadmin account");

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/change-password", put(api::auth::change_password))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/export/excel", get(api::equipment::export_excel))
        .route("/equipment/export/pdf", get(api::equipment::export_pdf))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        .route("/history/:equipment_id", get(api::equipment::get_history))
        // Dashboards
        .route("/dashboard/stats", get(api::dashboard::get_stats))
        .route(
            "/dashboard/equipment-by-department",
            get(api::dashboard::equipment_by_department),
        )
        .route(
            "/dashboard/equipment-by-location",
            get(api::dashboard::equipment_by_location),
        )
        .route(
            "/dashboard/equipment-by-edificio",
            get(api::dashboard::equipment_by_edificio),
        )
        // Locations
        .route("/locations", get(api::locations::list_locations))
        .route("/locations", post(api::locations::create_location))
        .route("/locations/:id", put(api::locations::update_location))
        .route("/locations/:id", delete(api::locations::delete_location))
        // Departments
        .route("/departments", get(api::departments::list_departments))
        .route("/departments", post(api::departments::create_department))
        .route("/departments/:id", put(api::departments::update_department))
        .route("/departments/:id", delete(api::departments::delete_department))
        // Lookup catalogs
        .route("/tipos-bien", get(api::lookups::list_tipos_bien))
        .route("/tipos-bien", post(api::lookups::create_tipo_bien))
        .route("/tipos-bien/:id", put(api::lookups::update_tipo_bien))
        .route("/tipos-bien/:id", delete(api::lookups::delete_tipo_bien))
        .route("/marcas", get(api::lookups::list_marcas))
        .route("/marcas", post(api::lookups::create_marca))
        .route("/marcas/:id", put(api::lookups::update_marca))
        .route("/marcas/:id", delete(api::lookups::delete_marca))
        .route("/edificios", get(api::lookups::list_edificios))
        .route("/edificios", post(api::lookups::create_edificio))
        .route("/edificios/:id", put(api::lookups::update_edificio))
        .route("/edificios/:id", delete(api::lookups::delete_edificio))
        // User management
        .route("/users", get(api::users::list_users))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        .route("/users/:id/reset-password", post(api::users::reset_password));

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .route("/", get(api::health::root))
        .route("/health", get(api::health::health_check))
        .nest("/api", api)
        .with_state(state)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
