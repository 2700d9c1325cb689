//! Itinerary data structures
//!
//! Only the lookup keys (`day`, `id`) and the nesting are typed; every
//! display field is carried opaquely so the dataset round-trips to the
//! front end unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The full itinerary document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Ordered sequence of days
    pub itinerary: Vec<Day>,
    /// Top-level fields outside the day list (trip name, dates, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One day of the trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    /// Day number, unique within the itinerary
    pub day: u32,
    /// Activities scheduled for this day
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Display fields (theme, date, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Activity id, unique across the whole itinerary
    pub id: String,
    /// Display fields (name, startTime, cost, location, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
