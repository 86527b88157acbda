//! Leaderboard surface consumed by the page views
//!
//! Combines a roster provider with the ranking engine to produce ordered,
//! formatted rows, top-N snapshots, searches and member profiles.

pub mod board;

// Re-export commonly used types
pub use board::{Leaderboard, LeaderboardRow, MemberProfile, QueueStanding};
