//! Server entry point for itinera

use anyhow::Result;
use clap::Parser;
use itinera_agent::{prompt, AgentRunner, GeminiClient};
use itinera_core::config::ConfigLoader;
use itinera_core::itinerary::ItineraryStore;
use itinera_core::session::SessionRegistry;
use itinera_server::{run_server, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, warn};

#[derive(Parser)]
#[command(name = "itinera")]
#[command(about = "Travel-itinerary agent gateway")]
struct Cli {
    /// Configuration directory (holds optional config.json)
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::with_dir(dir),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;

    itinera_core::logging::init_logging(&config.logging.level);

    // A bad data file degrades lookups to per-request 500s instead of
    // aborting startup.
    let itinerary = match ItineraryStore::load(&config.itinerary.path) {
        Ok(store) => store,
        Err(e) => {
            error!(
                "Failed to load itinerary data from {}: {}",
                config.itinerary.path, e
            );
            ItineraryStore::unavailable()
        }
    };

    if config.maps.api_key.is_none() {
        warn!("Google Maps API key not set; the map view will not work");
    }
    if config.agent.api_key.is_none() {
        warn!("Gemini API key not set; chat turns will fail");
    }

    let instruction = prompt::system_instruction(
        &itinerary
            .as_prompt_json()
            .unwrap_or_else(|| r#"{"error": "Itinerary data not available."}"#.to_string()),
    );
    let agent: Arc<dyn AgentRunner> = Arc::new(GeminiClient::new(
        config.agent.api_key.clone(),
        config.agent.api_base.clone(),
        config.agent.model.clone(),
        instruction,
    ));

    let port = cli.port.unwrap_or(config.server.port);
    let state = AppState::new(
        Arc::new(config),
        Arc::new(itinerary),
        Arc::new(SessionRegistry::new()),
        agent,
    );

    run_server(state, port).await
}
