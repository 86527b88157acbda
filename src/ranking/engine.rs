//! The ranking comparator and sort
//!
//! Members are ordered by a four-level key: tier, division (only for tiers
//! that carry one), LP descending, then name. The sort direction flips the
//! first three keys but never the name, which always reads A to Z.

use crate::ranking::collation::NameCollator;
use crate::ranking::record::{RankRecord, UNRANKED};
use crate::ranking::tier::{classify, division_index, tier_index};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{Display, EnumString};
use tracing::debug;

/// Which end of the ladder comes first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SortDirection {
    /// Highest rank first
    #[default]
    #[serde(rename = "desc")]
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
    /// Lowest rank first
    #[serde(rename = "asc")]
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Descending => ordering,
            SortDirection::Ascending => ordering.reverse(),
        }
    }
}

/// Anything with a display name that can appear on a leaderboard
pub trait Ranked {
    fn display_name(&self) -> &str;
}

impl<T: Ranked + ?Sized> Ranked for &T {
    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// A name paired with the record being compared
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry<'a> {
    pub name: &'a str,
    pub record: &'a RankRecord,
}

impl<'a> RankedEntry<'a> {
    pub fn new(name: &'a str, record: &'a RankRecord) -> Self {
        Self { name, record }
    }
}

/// Compare two records on tier, division and LP only, best first.
///
/// Division takes part only when the shared tier carries divisions.
pub fn compare_records(a: &RankRecord, b: &RankRecord) -> Ordering {
    let tier_a = tier_index(&a.tier);
    let tier_b = tier_index(&b.tier);
    if tier_a != tier_b {
        return tier_a.cmp(&tier_b);
    }

    if classify(&a.tier) {
        let division_a = division_index(a.division.as_ref());
        let division_b = division_index(b.division.as_ref());
        if division_a != division_b {
            return division_a.cmp(&division_b);
        }
    }

    b.lp.cmp(&a.lp)
}

/// 1-based position of `name` in an already sorted sequence.
///
/// Always call this on the full sorted leaderboard, never on a filtered view,
/// so hiding rows does not renumber the remaining ones.
pub fn rank_index<T: Ranked>(sorted: &[T], name: &str) -> Option<usize> {
    sorted
        .iter()
        .position(|entity| entity.display_name() == name)
        .map(|index| index + 1)
}

/// Orders ranked members; holds nothing but the name collator
#[derive(Debug, Default)]
pub struct RankingEngine {
    collator: NameCollator,
}

impl RankingEngine {
    pub fn new(collator: NameCollator) -> Self {
        Self { collator }
    }

    /// Engine with a collator for the given locale, falling back to code
    /// point name order if the locale is unusable
    pub fn for_locale(locale: &str) -> Self {
        Self::new(NameCollator::new(locale))
    }

    pub fn collator(&self) -> &NameCollator {
        &self.collator
    }

    /// Total order over two ranked entries.
    ///
    /// `direction` inverts tier, division and LP; the name tie-break is
    /// always ascending.
    pub fn compare(
        &self,
        a: RankedEntry<'_>,
        b: RankedEntry<'_>,
        direction: SortDirection,
    ) -> Ordering {
        direction
            .apply(compare_records(a.record, b.record))
            .then_with(|| self.collator.compare(a.name, b.name))
    }

    /// Sort `entities` into a new vector without touching the input.
    ///
    /// `key` picks the record to rank by; entities it returns `None` for are
    /// ranked as unranked with 0 LP. The sort is stable.
    pub fn sort<'a, T, F>(&self, entities: &'a [T], key: F, direction: SortDirection) -> Vec<&'a T>
    where
        T: Ranked,
        F: Fn(&T) -> Option<&RankRecord>,
    {
        let mut sorted: Vec<&T> = entities.iter().collect();
        sorted.sort_by(|a, b| {
            let entry_a = RankedEntry::new(a.display_name(), key(a).unwrap_or(&UNRANKED));
            let entry_b = RankedEntry::new(b.display_name(), key(b).unwrap_or(&UNRANKED));
            self.compare(entry_a, entry_b, direction)
        });

        debug!(
            "Sorted {} entries ({}, locale-aware names: {})",
            sorted.len(),
            direction,
            self.collator.is_locale_aware()
        );
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::tier::{Division, Tier};

    #[derive(Debug)]
    struct Entity {
        name: &'static str,
        record: RankRecord,
    }

    impl Ranked for Entity {
        fn display_name(&self) -> &str {
            self.name
        }
    }

    fn entity(name: &'static str, tier: &str, division: Option<&str>, lp: u32) -> Entity {
        Entity {
            name,
            record: RankRecord::parse(tier, division, lp),
        }
    }

    fn names(sorted: &[&Entity]) -> Vec<&'static str> {
        sorted.iter().map(|e| e.name).collect()
    }

    fn sort(entities: &[Entity], direction: SortDirection) -> Vec<&'static str> {
        let engine = RankingEngine::default();
        names(&engine.sort(entities, |e| Some(&e.record), direction))
    }

    #[test]
    fn test_tier_beats_everything() {
        let entities = vec![
            entity("Low", "Gold", Some("I"), 99),
            entity("High", "Diamond", Some("IV"), 0),
        ];
        assert_eq!(sort(&entities, SortDirection::Descending), vec!["High", "Low"]);
        assert_eq!(sort(&entities, SortDirection::Ascending), vec!["Low", "High"]);
    }

    #[test]
    fn test_better_division_wins_over_lp() {
        let entities = vec![
            entity("B", "Diamond", Some("IV"), 10),
            entity("A", "Diamond", Some("III"), 16),
            entity("C", "Diamond", Some("IV"), 90),
        ];
        assert_eq!(
            sort(&entities, SortDirection::Descending),
            vec!["A", "C", "B"]
        );
    }

    #[test]
    fn test_division_ignored_for_no_division_tiers() {
        let entities = vec![
            entity("Stray", "Master", Some("I"), 10),
            entity("Plain", "Master", None, 20),
        ];
        assert_eq!(
            sort(&entities, SortDirection::Descending),
            vec!["Plain", "Stray"]
        );
    }

    #[test]
    fn test_missing_division_sorts_worst() {
        let entities = vec![
            entity("Missing", "Gold", None, 99),
            entity("Bogus", "Gold", Some("V"), 98),
            entity("Four", "Gold", Some("IV"), 0),
        ];
        assert_eq!(
            sort(&entities, SortDirection::Descending),
            vec!["Four", "Missing", "Bogus"]
        );
    }

    #[test]
    fn test_unknown_tier_sorts_last() {
        let entities = vec![
            entity("Weird", "Mythic", None, 5000),
            entity("Nobody", "Unranked", None, 0),
            entity("Iron", "Iron", Some("IV"), 0),
        ];
        assert_eq!(
            sort(&entities, SortDirection::Descending),
            vec!["Iron", "Nobody", "Weird"]
        );
    }

    #[test]
    fn test_name_tie_break_ignores_direction() {
        let entities = vec![
            entity("Kua", "Master", None, 0),
            entity("Hycan", "Master", None, 0),
            entity("Zed", "Master", None, 1),
        ];
        assert_eq!(
            sort(&entities, SortDirection::Descending),
            vec!["Zed", "Hycan", "Kua"]
        );
        assert_eq!(
            sort(&entities, SortDirection::Ascending),
            vec!["Hycan", "Kua", "Zed"]
        );
    }

    #[test]
    fn test_missing_record_counts_as_unranked() {
        let entities = vec![
            entity("Ghost", "Iron", Some("IV"), 0),
            entity("Real", "Iron", Some("IV"), 0),
        ];
        let engine = RankingEngine::default();
        let sorted = engine.sort(
            &entities,
            |e| (e.name == "Real").then_some(&e.record),
            SortDirection::Descending,
        );
        assert_eq!(names(&sorted), vec!["Real", "Ghost"]);
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let entities = vec![
            entity("Second", "Gold", Some("I"), 0),
            entity("First", "Platinum", Some("I"), 0),
        ];
        let _ = sort(&entities, SortDirection::Descending);
        assert_eq!(entities[0].name, "Second");
    }

    #[test]
    fn test_empty_input() {
        assert!(sort(&[], SortDirection::Descending).is_empty());
    }

    #[test]
    fn test_compare_is_reflexive_and_antisymmetric() {
        let engine = RankingEngine::default();
        let a = RankRecord::new(Tier::Gold, Some(Division::Two), 10);
        let b = RankRecord::new(Tier::Gold, Some(Division::Two), 10);

        let left = RankedEntry::new("Bun", &a);
        let right = RankedEntry::new("Zibi", &b);
        for direction in [SortDirection::Descending, SortDirection::Ascending] {
            assert_eq!(engine.compare(left, left, direction), Ordering::Equal);
            assert_eq!(engine.compare(left, right, direction), Ordering::Less);
            assert_eq!(engine.compare(right, left, direction), Ordering::Greater);
        }
    }

    #[test]
    fn test_rank_index() {
        let entities = vec![
            entity("A", "Gold", Some("I"), 0),
            entity("B", "Gold", Some("II"), 0),
        ];
        let engine = RankingEngine::default();
        let sorted = engine.sort(&entities, |e| Some(&e.record), SortDirection::Descending);

        assert_eq!(rank_index(&sorted, "A"), Some(1));
        assert_eq!(rank_index(&sorted, "B"), Some(2));
        assert_eq!(rank_index(&sorted, "C"), None);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::default(), SortDirection::Descending);
        assert_eq!(SortDirection::Ascending.to_string(), "asc");
    }
}
