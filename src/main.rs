//! Atelier booking API server
//!
//! Reads configuration from a TOML file (~/.config/atelier-api/config.toml,
//! overridable through ATELIER_CONFIG), runs migrations and serves the REST
//! API.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use atelier_api::application::booking::BookingService;
use atelier_api::application::identity::IdentityService;
use atelier_api::application::payments::PaymentService;
use atelier_api::domain::repositories::RepositoryProvider;
use atelier_api::infrastructure::database::migrator::Migrator;
use atelier_api::infrastructure::email::HttpEmailService;
use atelier_api::infrastructure::payment::PaysafeGateway;
use atelier_api::{
    create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("ATELIER_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Atelier booking API...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    let repos: Arc<dyn RepositoryProvider> =
        Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    create_default_admin(repos.as_ref(), &app_cfg).await;

    // ── Services ───────────────────────────────────────────────
    let email = Arc::new(HttpEmailService::new(app_cfg.email.clone()));
    let gateway = Arc::new(PaysafeGateway::new(app_cfg.paysafe.clone()));
    let vault_url = gateway.vault_base();

    let identity = Arc::new(IdentityService::new(
        repos.clone(),
        email,
        app_cfg.security.clone(),
    ));
    let booking = Arc::new(BookingService::new(repos.clone()));
    let payments = Arc::new(PaymentService::new(repos.clone(), gateway, vault_url));

    // ── HTTP server ────────────────────────────────────────────
    let router = create_api_router(repos, identity, booking, payments);

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    }
    info!("Atelier booking API shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

/// Create the bootstrap staff account when it does not exist yet.
async fn create_default_admin(repos: &dyn RepositoryProvider, app_cfg: &AppConfig) {
    use atelier_api::domain::user::User;
    use atelier_api::infrastructure::crypto::hash_password;

    match repos.users().find_by_email(&app_cfg.admin.email).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            info!("Creating default admin user {}", app_cfg.admin.email);
            let hash = match hash_password(&app_cfg.admin.password) {
                Ok(hash) => hash,
                Err(e) => {
                    error!("Failed to hash admin password: {}", e);
                    return;
                }
            };
            let mut admin = User::new(app_cfg.admin.email.clone(), hash);
            admin.first_name = app_cfg.admin.first_name.clone();
            admin.last_name = app_cfg.admin.last_name.clone();
            admin.is_staff = true;
            admin.activate();
            if let Err(e) = repos.users().create(admin).await {
                error!("Failed to create default admin: {}", e);
            }
        }
        Err(e) => error!("Admin bootstrap lookup failed: {}", e),
    }
}
