//! Read-only store for the itinerary dataset

use super::model::{Activity, Day, Itinerary};
use crate::{Error, Result};
use std::path::Path;

/// Holds the itinerary loaded at startup and answers point lookups.
///
/// A failed load does not abort the process; the store is constructed
/// empty instead and every lookup reports the data as unavailable,
/// which the HTTP layer maps to a 500.
#[derive(Debug)]
pub struct ItineraryStore {
    data: Option<Itinerary>,
}

impl ItineraryStore {
    /// Load the itinerary JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let data: Itinerary = serde_json::from_str(&content)
            .map_err(|e| Error::Data(format!("invalid itinerary file: {}", e)))?;
        Ok(Self { data: Some(data) })
    }

    /// Build a store from an already-parsed document
    pub fn from_document(data: Itinerary) -> Self {
        Self { data: Some(data) }
    }

    /// A store with no data; every lookup fails with `Error::Data`
    pub fn unavailable() -> Self {
        Self { data: None }
    }

    fn data(&self) -> Result<&Itinerary> {
        self.data
            .as_ref()
            .ok_or_else(|| Error::Data("itinerary data is not available".to_string()))
    }

    /// The full itinerary document
    pub fn full(&self) -> Result<&Itinerary> {
        self.data()
    }

    /// Look up a single day by its day number
    pub fn day(&self, day_number: u32) -> Result<&Day> {
        self.data()?
            .itinerary
            .iter()
            .find(|d| d.day == day_number)
            .ok_or_else(|| Error::NotFound(format!("Day {} not found", day_number)))
    }

    /// Look up a single activity by id, searching across all days
    pub fn activity(&self, activity_id: &str) -> Result<&Activity> {
        self.data()?
            .itinerary
            .iter()
            .flat_map(|d| d.activities.iter())
            .find(|a| a.id == activity_id)
            .ok_or_else(|| Error::NotFound(format!("Activity {} not found", activity_id)))
    }

    /// Serialize the dataset for embedding into the model's instructions
    pub fn as_prompt_json(&self) -> Option<String> {
        self.data
            .as_ref()
            .and_then(|d| serde_json::to_string(d).ok())
    }
}
