//! HTTP gateway for the Itinera backend
//!
//! Exposes the itinerary lookup endpoints, the SSE chat gateway, and
//! the static front-end fallback.

pub mod handlers;
pub mod server;
pub mod state;

pub use server::{build_router, run_server};
pub use state::AppState;
