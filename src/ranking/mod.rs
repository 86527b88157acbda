//! Ranking core: tier tables, comparator and display formatting
//!
//! Everything here is a pure function over immutable data. Malformed tier or
//! division values never fail; they sort last and drop out of display strings.

pub mod collation;
pub mod engine;
pub mod record;
pub mod tier;

// Re-export commonly used types
pub use collation::NameCollator;
pub use engine::{compare_records, rank_index, Ranked, RankedEntry, RankingEngine, SortDirection};
pub use record::{division_label, format_rank, lp_label, RankRecord, EMPTY_CELL};
pub use tier::{classify, style_key_for, Division, DivisionValue, Lenient, Tier, TierValue};
