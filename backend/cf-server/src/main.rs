use cf_server::{build_router, logger};

use cf_auth::PasswordHasher;
use cf_model::PredictionPipeline;
use cf_service::AppState;

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = cf_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = cf_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cf-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the database and apply migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = cf_db::create_pool(&database_path).await?;

    // Prediction artifacts are optional: every other route works without them
    let model_path = config.model_path()?;
    let encoder_path = config.encoder_path()?;
    let pipeline = match PredictionPipeline::load(&model_path, &encoder_path) {
        Ok(pipeline) => Some(pipeline),
        Err(e) => {
            error!("Failed to load model artifacts, /predict disabled: {}", e);
            None
        }
    };

    let jwt_secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or("auth.jwt_secret missing after validation")?;

    if config.auth.require_token_for_history {
        info!("History routes require a bearer token");
    } else {
        warn!("History routes are unauthenticated (auth.require_token_for_history = false)");
    }

    let app_state = AppState::new(
        pool.clone(),
        jwt_secret.as_bytes(),
        config.auth.token_expiry_minutes,
        PasswordHasher::new(),
    )
    .with_pipeline(pipeline)
    .with_require_token_for_history(config.auth.require_token_for_history);

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual address matters when port is 0 (auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, keep serving until the process is killed
            std::future::pending::<()>().await;
        }
    }
}
