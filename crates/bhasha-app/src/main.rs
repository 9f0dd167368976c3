use std::sync::Arc;
use std::time::Duration;

use bhasha_config::Config;
use bhasha_translate::{GtxClient, TranslationEngine};
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod state;


use crate::controller::AppController;
use crate::state::AppState;

/// Console translator talking to a public translation endpoint.
#[derive(Parser)]
#[command(name = "bhasha", version)]
struct Args {
    /// Source language code (en, es, hi, pa)
    #[arg(long)]
    source: Option<String>,

    /// Target language code (en, es, hi, pa)
    #[arg(long)]
    target: Option<String>,

    /// Translation endpoint base URL
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::new();
    if let Some(source) = args.source {
        config.session.source_lang = source;
    }
    if let Some(target) = args.target {
        config.session.target_lang = target;
    }
    if let Some(endpoint) = args.endpoint {
        config.translator.endpoint = endpoint;
    }

    // One HTTP client for the whole process, injected into the transport.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.translator.timeout_secs))
        .build()?;
    let transport = GtxClient::new(http, config.translator.endpoint.clone());
    let engine = Arc::new(TranslationEngine::new(
        transport,
        config.translator.max_chunk_size,
    ));

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(engine);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tasks.shutdown().await;
    Ok(())
}
