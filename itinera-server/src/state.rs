use itinera_agent::AgentRunner;
use itinera_core::config::Config;
use itinera_core::itinerary::ItineraryStore;
use itinera_core::session::SessionRegistry;
use std::sync::Arc;

/// Shared application state.
///
/// The itinerary store is read-only after startup; the session registry
/// is the only state mutated by requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub itinerary: Arc<ItineraryStore>,
    pub sessions: Arc<SessionRegistry>,
    pub agent: Arc<dyn AgentRunner>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        itinerary: Arc<ItineraryStore>,
        sessions: Arc<SessionRegistry>,
        agent: Arc<dyn AgentRunner>,
    ) -> Self {
        Self {
            config,
            itinerary,
            sessions,
            agent,
        }
    }
}
