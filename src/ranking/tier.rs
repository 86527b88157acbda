//! Tier and division tables
//!
//! The canonical ordering of competitive tiers and divisions, the set of tiers
//! that carry no division, and the lenient wrapper used to hold hand-edited
//! values that may fall outside either enumeration.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// Major competitive rank band, declared from best to worst
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCountMacro,
)]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    Challenger,
    Grandmaster,
    Master,
    Diamond,
    Emerald,
    Platinum,
    Gold,
    Silver,
    Bronze,
    Iron,
    Unranked,
}

impl Tier {
    /// Tiers ranked purely by LP
    pub const NO_DIVISION: [Tier; 4] = [
        Tier::Challenger,
        Tier::Grandmaster,
        Tier::Master,
        Tier::Unranked,
    ];

    /// Position in the tier table, 0 being the best
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether members of this tier are split into divisions
    pub fn uses_division(self) -> bool {
        !Self::NO_DIVISION.contains(&self)
    }

    /// Presentation style class for this tier
    pub fn style_key(self) -> &'static str {
        match self {
            Tier::Challenger => "tier-challenger",
            Tier::Grandmaster => "tier-grandmaster",
            Tier::Master => "tier-master",
            Tier::Diamond => "tier-diamond",
            Tier::Emerald => "tier-emerald",
            Tier::Platinum => "tier-platinum",
            Tier::Gold => "tier-gold",
            Tier::Silver => "tier-silver",
            Tier::Bronze => "tier-bronze",
            Tier::Iron => "tier-iron",
            Tier::Unranked => "tier-unranked",
        }
    }
}

/// Sub-rank within a tier, declared from best (I) to worst (IV)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCountMacro,
)]
#[strum(ascii_case_insensitive)]
pub enum Division {
    #[strum(serialize = "I")]
    One,
    #[strum(serialize = "II")]
    Two,
    #[strum(serialize = "III")]
    Three,
    #[strum(serialize = "IV")]
    Four,
}

impl Division {
    /// Position in the division table, 0 being the best
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A value read from hand-edited data that may not belong to its enumeration.
///
/// Unrecognized text is kept verbatim in `Unknown` instead of being rejected,
/// so one bad field never stops the rest of a leaderboard from rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lenient<T> {
    Known(T),
    Unknown(String),
}

impl<T: FromStr> Lenient<T> {
    /// Parse `raw`, keeping the original text when it is not a valid `T`
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse() {
            Ok(value) => Lenient::Known(value),
            Err(_) => Lenient::Unknown(raw.to_string()),
        }
    }
}

impl<T> Lenient<T> {
    /// The recognized value, if any
    pub fn known(&self) -> Option<&T> {
        match self {
            Lenient::Known(value) => Some(value),
            Lenient::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Lenient::Known(_))
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Known(value)
    }
}

impl<T: fmt::Display> fmt::Display for Lenient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lenient::Known(value) => write!(f, "{}", value),
            Lenient::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

impl<T: fmt::Display> Serialize for Lenient<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Tier as read from the roster
pub type TierValue = Lenient<Tier>;

/// Division as read from the roster
pub type DivisionValue = Lenient<Division>;

/// Whether a tier carries a division.
///
/// Shared by the comparator and the formatter so the two never disagree.
/// Unknown tiers are treated as division-bearing.
pub fn classify(tier: &TierValue) -> bool {
    match tier {
        Lenient::Known(tier) => tier.uses_division(),
        Lenient::Unknown(_) => true,
    }
}

/// Ordering index of a tier; unknown tiers sort after `Unranked`
pub fn tier_index(tier: &TierValue) -> usize {
    match tier {
        Lenient::Known(tier) => tier.index(),
        Lenient::Unknown(_) => Tier::COUNT,
    }
}

/// Ordering index of a division; absent or unknown divisions sort after IV
pub fn division_index(division: Option<&DivisionValue>) -> usize {
    match division {
        Some(Lenient::Known(division)) => division.index(),
        Some(Lenient::Unknown(_)) | None => Division::COUNT,
    }
}

/// Presentation style class, defaulting to the unranked style
pub fn style_key_for(tier: &TierValue) -> &'static str {
    match tier {
        Lenient::Known(tier) => tier.style_key(),
        Lenient::Unknown(_) => Tier::Unranked.style_key(),
    }
}
