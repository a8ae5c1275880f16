use anyhow::{Context, Result};
use dotenv::dotenv;
use salesapi::{
    handler::{AppRouter, RouterOptions},
    state::AppState,
};
use shared::{
    config::{Config, ConnectionManager},
    utils::{Telemetry, init_logger},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::init("salesapi", config.otel_endpoint.as_deref())
        .context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(
        telemetry.logger_provider(),
        "salesapi",
        config.dev_mode,
        config.enable_file_log,
    );

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        info!("Running migrations...");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(pool);
    let collector = state.spawn_metrics_collector();

    let options = RouterOptions {
        cors_allowed_origin: config.cors_allowed_origin.clone(),
        static_dir: config.static_dir.clone(),
    };
    let app = AppRouter::build(state, &options).context("Failed to build router")?;

    AppRouter::serve(config.port, app)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");
    collector.abort();

    if let Err(e) = telemetry.shutdown() {
        error!("Telemetry shutdown failed: {e:?}");
    }

    Ok(())
}
