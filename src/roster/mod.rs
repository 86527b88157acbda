//! Static member roster for both games
//!
//! The roster is fixed, hand-edited data loaded once per process and only
//! ever read afterwards.

pub mod data;
pub mod provider;

// Re-export commonly used types
pub use provider::{RosterProvider, StaticRosterProvider};
