//! Core entity types for the `SignalDeck` dashboard

pub mod channel;
pub mod feed;
pub mod position;
pub mod trade;

// Re-export all types
pub use channel::*;
pub use feed::*;
pub use position::*;
pub use trade::*;
