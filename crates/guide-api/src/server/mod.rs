//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use guide_common::{AppConfig, AppError, JwtService};
use guide_db::{
    create_pool, run_migrations, PgAvailabilityRepository, PgBookingRepository,
    PgComplaintRepository, PgGuideLanguageRepository, PgGuideRepository, PgLanguageRepository,
    PgSearchRepository,
};
use guide_service::services::AdminService;
use guide_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = guide_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    // Create repositories
    let guide_repo = Arc::new(PgGuideRepository::new(pool.clone()));
    let language_repo = Arc::new(PgLanguageRepository::new(pool.clone()));
    let guide_language_repo = Arc::new(PgGuideLanguageRepository::new(pool.clone()));
    let availability_repo = Arc::new(PgAvailabilityRepository::new(pool.clone()));
    let search_repo = Arc::new(PgSearchRepository::new(pool.clone()));
    let booking_repo = Arc::new(PgBookingRepository::new(pool.clone()));
    let complaint_repo = Arc::new(PgComplaintRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContext::new(
        pool,
        guide_repo,
        language_repo,
        guide_language_repo,
        availability_repo,
        search_repo,
        booking_repo,
        complaint_repo,
        jwt_service,
        config.admin.license_no.clone(),
        config.auto_approve_registrations,
    );

    // Seed the primary admin account before accepting traffic
    AdminService::new(&service_context)
        .seed_primary_admin(&config.admin)
        .await
        .map_err(AppError::from)?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
