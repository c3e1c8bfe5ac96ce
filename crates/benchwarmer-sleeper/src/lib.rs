// Sleeper fantasy API source: league rosters and per-player season stats.

pub mod client;
pub mod convert;
pub mod error;
pub mod types;

pub use client::{SleeperClient, SleeperSettings};
pub use convert::ScoringFormat;
pub use error::SleeperError;
