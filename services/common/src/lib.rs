//! Shared entity types for the `SignalDeck` trading dashboard
//!
//! Every other service consumes these types:
//! - Trade/Position records and their enumerations
//! - Signal channels with win-rate evaluation
//! - News articles and market calendar events
//! - Provider error taxonomy and shared constants

pub mod constants;
pub mod errors;
pub mod types;

pub use constants::*;
pub use errors::*;
pub use types::*;
