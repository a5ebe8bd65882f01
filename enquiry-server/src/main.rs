use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use enquiry_server::config::AppConfig;
use enquiry_server::conversation::{SessionConfig, SessionStore};
use enquiry_server::dispatch::Dispatcher;
use enquiry_server::domain::TransportMode;
use enquiry_server::llm::{GroqClient, GroqConfig};
use enquiry_server::schedule::{BUSES_FILE, TRAINS_FILE, load_dataset};
use enquiry_server::status::{StatusClient, StatusConfig};
use enquiry_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = AppConfig::from_env().map_err(|e| format!("invalid configuration: {e}"))?;

    let groq_key = config.groq_api_key.clone().unwrap_or_else(|| {
        warn!("GROQ_API_KEY not set. Assistant replies will fail.");
        String::new()
    });
    let rapidapi_key = config.rapidapi_key.clone().unwrap_or_else(|| {
        warn!("RAPIDAPI_KEY not set. Train status will use fallback data.");
        String::new()
    });

    // Load schedule datasets
    let dirs = config.dataset_dirs();
    let trains = load_dataset(TRAINS_FILE, TransportMode::Train, &dirs)
        .map_err(|e| format!("failed to load trains: {e}"))?;
    let buses = load_dataset(BUSES_FILE, TransportMode::Bus, &dirs)
        .map_err(|e| format!("failed to load buses: {e}"))?;
    info!(trains = trains.len(), buses = buses.len(), "loaded schedules");

    // Create API clients
    let mut status_config = StatusConfig::new(rapidapi_key);
    if let Some(date) = config.departure_date {
        status_config = status_config.with_departure_date(date);
    }
    let status = StatusClient::new(status_config)
        .map_err(|e| format!("failed to create status client: {e}"))?;

    let llm = GroqClient::new(GroqConfig::new(groq_key).with_model(&config.model))
        .map_err(|e| format!("failed to create model client: {e}"))?;
    info!(model = %config.model, "model client ready");

    // Build app state
    let sessions =
        SessionStore::new(&SessionConfig::default().with_idle_timeout(config.session_idle));
    let dispatcher = Dispatcher::new(trains, buses, status, Arc::new(llm));
    let state = AppState::new(dispatcher, sessions);

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", config.bind))?;
    info!("Travel enquiry server listening on http://{}", config.bind);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server error: {e}"))
}
