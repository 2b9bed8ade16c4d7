//! Records console HTTP server.
//!
//! Usage: `records-console [CONFIG_PATH]`. The path defaults to
//! `CONSOLE_CONFIG`, then `./config/console.yaml`.

use std::env;

use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use records_console::api::{AppState, create_router};
use records_console::config::ConfigLoader;
use records_console::db;

const CONFIG_PATH_ENV: &str = "CONSOLE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/console.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "records_console=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    let config_path = env::args()
        .nth(1)
        .or_else(|| env::var(CONFIG_PATH_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let loader = ConfigLoader::load(&config_path)?;
    tracing::info!(path = %config_path, "Configuration loaded");

    let connection = db::connect(loader.database()).await?;
    db::create_schema(&connection, &loader.capabilities()).await?;

    let app_router = create_router(AppState::new(connection, loader.capabilities()));

    let bind_address = &loader.server().bind_address;
    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!(%bind_address, "Server listening");
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
