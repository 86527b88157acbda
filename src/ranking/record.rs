//! Rank records and their display strings

use crate::error::RecordIssue;
use crate::ranking::tier::{classify, Division, DivisionValue, Lenient, Tier, TierValue};
use serde::Serialize;

/// Shown in table cells that have no meaningful value
pub const EMPTY_CELL: &str = "—";

/// One (tier, division, LP) triple for one queue of one member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RankRecord {
    pub tier: TierValue,
    pub division: Option<DivisionValue>,
    pub lp: u32,
}

/// Record used for members with no entry in the requested queue
pub static UNRANKED: RankRecord = RankRecord {
    tier: Lenient::Known(Tier::Unranked),
    division: None,
    lp: 0,
};

impl RankRecord {
    pub fn new(tier: Tier, division: Option<Division>, lp: u32) -> Self {
        Self {
            tier: tier.into(),
            division: division.map(Into::into),
            lp,
        }
    }

    /// Build a record from hand-edited text.
    ///
    /// Blank division text counts as no division; anything else that is not
    /// I–IV is kept as an unknown value.
    pub fn parse(tier: &str, division: Option<&str>, lp: u32) -> Self {
        Self {
            tier: TierValue::parse(tier),
            division: division
                .filter(|raw| !raw.trim().is_empty())
                .map(DivisionValue::parse),
            lp,
        }
    }

    pub fn unranked() -> Self {
        UNRANKED.clone()
    }

    pub fn is_unranked(&self) -> bool {
        self.tier == Lenient::Known(Tier::Unranked)
    }

    /// The division that takes part in ordering and display, if any
    pub fn effective_division(&self) -> Option<Division> {
        if !classify(&self.tier) {
            return None;
        }
        self.division.as_ref().and_then(|d| d.known().copied())
    }

    /// Malformed fields in this record
    pub fn issues(&self) -> Vec<RecordIssue> {
        let mut issues = Vec::new();
        if let Lenient::Unknown(raw) = &self.tier {
            issues.push(RecordIssue::UnknownTier { raw: raw.clone() });
        }
        if let Some(Lenient::Unknown(raw)) = &self.division {
            issues.push(RecordIssue::UnknownDivision { raw: raw.clone() });
        }
        issues
    }
}

impl Default for RankRecord {
    fn default() -> Self {
        Self::unranked()
    }
}

/// Format a rank for display.
///
/// `Unranked` ignores division and LP entirely. Otherwise the tier name, the
/// division when the tier carries one, then the LP. Unrecognized tier or
/// division text is left out of the string.
pub fn format_rank(record: &RankRecord) -> String {
    let mut segments: Vec<String> = Vec::with_capacity(3);

    match &record.tier {
        Lenient::Known(Tier::Unranked) => return Tier::Unranked.to_string(),
        Lenient::Known(tier) => segments.push(tier.to_string()),
        Lenient::Unknown(_) => {}
    }

    if let Some(division) = record.effective_division() {
        segments.push(division.to_string());
    }

    segments.push(format!("{} LP", record.lp));
    segments.join(" ")
}

/// Division table cell: the division, or a dash when there is none to show
pub fn division_label(record: &RankRecord) -> String {
    record
        .effective_division()
        .map(|d| d.to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// LP table cell: the LP, or a dash for unranked records
pub fn lp_label(record: &RankRecord) -> String {
    if record.is_unranked() {
        EMPTY_CELL.to_string()
    } else {
        record.lp.to_string()
    }
}
