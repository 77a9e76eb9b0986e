//! # confhubd — confhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use confhub_adapter_http_axum::state::AppState;
use confhub_adapter_password_argon2::Argon2PasswordHasher;
use confhub_adapter_storage_sqlite_sqlx::{
    SqliteConferenceRepository, SqliteReportRepository, SqliteUserRepository,
};
use confhub_app::services::conference_service::ConferenceService;
use confhub_app::services::report_service::ReportService;
use confhub_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = config.storage().build().await?;
    let pool = db.pool().clone();
    tracing::info!(database_url = %config.database.url, "database initialized");

    // Repositories
    let user_repo = SqliteUserRepository::new(pool.clone());
    let report_repo = SqliteReportRepository::new(pool.clone());
    let conference_report_repo = SqliteReportRepository::new(pool.clone());
    let conference_repo = SqliteConferenceRepository::new(pool);

    // Services
    let user_service = UserService::new(user_repo, Argon2PasswordHasher::new());
    let report_service = ReportService::new(report_repo);
    let conference_service = ConferenceService::new(conference_repo, conference_report_repo);

    // HTTP
    let state = AppState::new(user_service, report_service, conference_service);
    let app = confhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "confhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("confhubd stopped");
    Ok(())
}

/// Resolves once SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
