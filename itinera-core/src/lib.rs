//! Core types and services for the Itinera backend
//!
//! This crate provides the error type, configuration loading, logging
//! setup, the itinerary dataset store, in-memory session management,
//! and the structured-response normalizer shared by the other crates.

pub mod config;
pub mod error;
pub mod itinerary;
pub mod logging;
pub mod response;
pub mod session;

pub use error::{Error, Result};
