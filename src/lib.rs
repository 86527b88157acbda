//! Wild Horses - leaderboard core for a small community site
//!
//! This crate holds the static member roster for two game titles and the
//! ranking rules used to sort, format and look up members for the
//! leaderboard pages.

pub mod assets;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod ranking;
pub mod render;
pub mod roster;
pub mod types;

// Re-export commonly used types and traits
pub use error::{LeaderboardError, RecordIssue, Result};
pub use types::*;

// Re-export key components
pub use leaderboard::{Leaderboard, LeaderboardRow};
pub use ranking::{format_rank, RankRecord, RankingEngine, SortDirection};
pub use roster::{RosterProvider, StaticRosterProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
