//! Error types for the leaderboard core
//!
//! Fallible operations return `anyhow`-backed results; the specific failure
//! scenarios are modelled with `thiserror` so callers can downcast them.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for leaderboard lookups and configuration
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("Member not found: {name}")]
    MemberNotFound { name: String },

    #[error("Unknown game: {value}")]
    UnknownGame { value: String },

    #[error("Queue {queue} is not available for {game}")]
    QueueNotInGame { game: String, queue: String },

    #[error("Invalid sort direction: {value}")]
    InvalidDirection { value: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

/// A malformed field found in a hand-edited rank record.
///
/// These never abort anything: the record still sorts (at the worst position
/// for the offending key) and still formats (without the offending segment).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIssue {
    #[error("Unknown tier: {raw:?}")]
    UnknownTier { raw: String },

    #[error("Unknown division: {raw:?}")]
    UnknownDivision { raw: String },
}
