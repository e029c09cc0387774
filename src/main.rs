//!
//! Room-booking marketplace HTTP server.
//! Reads configuration from TOML file (~/.config/posada-booking/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use posada_booking::application::{BookingService, IdentityService};
use posada_booking::config::AppConfig;
use posada_booking::domain::RepositoryProvider;
use posada_booking::infrastructure::crypto::jwt::JwtConfig;
use posada_booking::infrastructure::database::migrator::Migrator;
use posada_booking::shared::shutdown::ShutdownCoordinator;
use posada_booking::{
    create_api_router, default_config_path, init_database, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("POSADA_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
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

    info!("Starting Posada Booking server...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    info!("Prometheus metrics recorder installed");

    // ── Build sub-configs from AppConfig ───────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "posada-booking".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
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

    // Repository provider: constructed here, injected everywhere —
    // no ambient/global connection state.
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // Create default admin user if no users exist
    create_default_admin(repos.as_ref(), &app_cfg).await;

    // ── Services ───────────────────────────────────────────────
    let identity = Arc::new(IdentityService::new(repos.clone(), jwt_config.clone()));
    let booking = Arc::new(BookingService::new(repos.clone()));

    // ── Shutdown coordination ──────────────────────────────────
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();
    shutdown.start_signal_listener();

    // ── HTTP server ────────────────────────────────────────────
    let api_router = create_api_router(
        repos,
        db.clone(),
        jwt_config,
        identity,
        booking,
        prometheus_handle,
    );

    let api_addr = format!("{}:{}", app_cfg.server.host, app_cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let api_shutdown = shutdown_signal.clone();
    axum::serve(listener, api_router)
        .with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API server received shutdown signal");
        })
        .await?;

    // ── Final cleanup ──────────────────────────────────────────
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Posada Booking shutdown complete");
    Ok(())
}

/// Create default admin user if no users exist
async fn create_default_admin(repos: &dyn RepositoryProvider, app_cfg: &AppConfig) {
    use posada_booking::domain::{NewUser, UserRole};
    use posada_booking::infrastructure::crypto::password::hash_password;

    let users_count = repos.users().count().await.unwrap_or(0);

    if users_count == 0 {
        info!("Creating default admin user...");

        let password_hash = match hash_password(&app_cfg.admin.password) {
            Ok(hash) => hash,
            Err(e) => {
                error!("Failed to hash admin password: {}", e);
                return;
            }
        };

        match repos
            .users()
            .create(NewUser {
                email: app_cfg.admin.email.clone(),
                password_hash,
                role: UserRole::Admin,
            })
            .await
        {
            Ok(admin) => {
                info!("Default admin created: {}", admin.email);
                warn!("Please change the admin password immediately!");
            }
            Err(e) => {
                error!("Failed to create admin user: {}", e);
            }
        }
    }
}
