//! Itinerary dataset
//!
//! The itinerary is an immutable nested dataset (days holding activities)
//! loaded once at startup and served verbatim by the lookup endpoints.

pub mod model;
pub mod store;

pub use model::{Activity, Day, Itinerary};
pub use store::ItineraryStore;
