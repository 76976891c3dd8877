// src/main.rs

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use quiz_server::config::{Config, MongoSettings};
use quiz_server::error::{StartupError, StorageError};
use quiz_server::routes;
use quiz_server::state::{AppState, Readiness};
use quiz_server::store::{MongoQuestionStore, MySqlScoreStore};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load .env file (if present)
    dotenv().ok();

    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // The pool opens connections on first use.
    let scores = MySqlScoreStore::connect_lazy(&config.mysql);
    let readiness = Readiness::new();

    let state = AppState::new(Arc::new(scores), readiness.clone());
    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://localhost:{}", config.port);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    // Requests are answered with 503 until this completes.
    tokio::select! {
        result = server => result?,
        err = connect_document_store(config.mongo.clone(), readiness) => {
            tracing::error!("MongoDB Connection Error: {}", err);
            return Err(StartupError::DocumentStore(err));
        }
    }

    tracing::info!("Server shut down");
    Ok(())
}

/// Connects to MongoDB and opens the readiness gate.
/// Only resolves if the connection fails; success parks forever so the
/// server keeps running.
async fn connect_document_store(settings: MongoSettings, readiness: Readiness) -> StorageError {
    match MongoQuestionStore::connect(&settings).await {
        Ok(store) => {
            tracing::info!("Connected to MongoDB");
            readiness.mark_ready(Arc::new(store));
            std::future::pending().await
        }
        Err(err) => err,
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
