use dotenvy::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{debug, info};

use common::config::Settings;
use common::logger;
use market_data::KucoinClient;

use crate::router::AppState;
use crate::services::execution_service::ExecutionService;
use crate::services::telegram_service::{Notifier, TelegramService};

mod router;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::setup_logger();
    debug!("Relay starting up...");

    let settings = Settings::from_env();
    info!("Credentials loaded: {:?}", settings.keys_loaded());

    let notifier: Arc<dyn Notifier> = Arc::new(TelegramService::new(&settings.telegram));
    let client = KucoinClient::new(&settings.exchange)?;

    let state = AppState {
        execution: Arc::new(ExecutionService::new(client, notifier)),
        keys_loaded: settings.keys_loaded(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, router::router(state)).await?;
    Ok(())
}
