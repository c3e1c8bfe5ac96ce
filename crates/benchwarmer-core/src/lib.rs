// Ideal-lineup and league ranking engine.
//
// Pure, synchronous computation over in-memory team records: allocate each
// team's best lineup, aggregate per-position league averages, then rank.

pub mod analysis;
pub mod error;
pub mod league;
pub mod lineup;
pub mod player;
pub mod rank;
pub mod slot;
pub mod team;

pub use analysis::{analyze_league, LeagueAnalysis, TeamAnalysis};
pub use error::CoreError;
pub use lineup::{allocate, IdealLineup, LineupSlot};
pub use player::Player;
pub use slot::{PositionBucket, Slot};
pub use team::{TeamId, TeamRecord};
