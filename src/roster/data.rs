//! Hand-edited member tables
//!
//! Text is kept exactly as entered on the site so malformed entries go
//! through the same lenient parsing as everything else.

use crate::ranking::RankRecord;
use crate::types::{Member, Queue};
use lazy_static::lazy_static;
use tracing::warn;

/// (tier, division, LP) as entered
type RawRecord = (&'static str, Option<&'static str>, u32);

const TFT_TABLE: &[(&str, RawRecord)] = &[
    ("Yun", ("Master", None, 94)),
    ("Su", ("Master", None, 124)),
    ("Xệ", ("Challenger", None, 2190)),
    ("Hycan", ("Master", None, 0)),
    ("a Tứn", ("Master", None, 219)),
    ("Kua", ("Master", None, 0)),
    ("Cupid", ("Diamond", Some("III"), 16)),
    ("bánh mỳ", ("Diamond", Some("IV"), 10)),
    ("Zibi", ("Emerald", Some("I"), 20)),
    ("Đồng Nai", ("Platinum", Some("IV"), 0)),
    ("Bun", ("Gold", Some("III"), 37)),
    ("Đại Tá", ("Unranked", None, 0)),
    ("Gà", ("Unranked", None, 0)),
];

// Season 25: (name, solo/duo, flex)
const LOL_TABLE: &[(&str, RawRecord, RawRecord)] = &[
    ("Su", ("Emerald", Some("IV"), 36), ("Emerald", Some("III"), 82)),
    ("Yun", ("Diamond", Some("III"), 3), ("Diamond", Some("I"), 51)),
    ("a Tứn", ("Platinum", Some("III"), 24), ("Gold", Some("I"), 99)),
    ("Hycan", ("Emerald", Some("IV"), 74), ("Diamond", Some("IV"), 34)),
    ("Kua", ("Master", None, 97), ("Master", None, 8)),
    ("Xệ", ("Challenger", None, 2153), ("Challenger", Some("null"), 2132)),
    ("Cupid", ("Emerald", Some("I"), 40), ("Diamond", Some("I"), 33)),
    ("bánh mỳ", ("Master", None, 423), ("Master", None, 114)),
    ("Zibi", ("Gold", Some("III"), 84), ("Gold", Some("II"), 69)),
    ("Đồng Nai", ("Emerald", Some("II"), 95), ("Master", None, 56)),
    ("Bun", ("Gold", Some("II"), 36), ("Gold", Some("IV"), 26)),
    ("Đại Tá", ("Silver", Some("I"), 69), ("Gold", Some("II"), 61)),
    ("Gà", ("Platinum", Some("IV"), 35), ("Silver", Some("II"), 17)),
];

lazy_static! {
    /// Teamfight Tactics roster
    pub static ref TFT_MEMBERS: Vec<Member> = TFT_TABLE
        .iter()
        .map(|(name, ranked)| build_member(name, &[(Queue::Ranked, *ranked)]))
        .collect();

    /// League of Legends roster
    pub static ref LOL_MEMBERS: Vec<Member> = LOL_TABLE
        .iter()
        .map(|(name, solo, flex)| {
            build_member(name, &[(Queue::Solo, *solo), (Queue::Flex, *flex)])
        })
        .collect();
}

fn build_member(name: &str, records: &[(Queue, RawRecord)]) -> Member {
    Member::new(
        name,
        records.iter().map(|(queue, (tier, division, lp))| {
            let record = RankRecord::parse(tier, *division, *lp);
            for issue in record.issues() {
                warn!("{} ({} queue): {}; field ignored", name, queue, issue);
            }
            (*queue, record)
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{Division, Lenient, Tier};

    #[test]
    fn test_roster_sizes() {
        assert_eq!(TFT_MEMBERS.len(), 13);
        assert_eq!(LOL_MEMBERS.len(), 13);
    }

    #[test]
    fn test_names_are_unique() {
        for members in [&*TFT_MEMBERS, &*LOL_MEMBERS] {
            let mut names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), members.len());
        }
    }

    #[test]
    fn test_records_parsed() {
        let cupid = TFT_MEMBERS.iter().find(|m| m.name == "Cupid").unwrap();
        assert_eq!(
            cupid.rank(Queue::Ranked),
            Some(&RankRecord::new(Tier::Diamond, Some(Division::Three), 16))
        );

        let kua = LOL_MEMBERS.iter().find(|m| m.name == "Kua").unwrap();
        assert_eq!(kua.rank(Queue::Flex).map(|r| r.lp), Some(8));
    }

    #[test]
    fn test_malformed_division_is_kept_as_unknown() {
        let xe = LOL_MEMBERS.iter().find(|m| m.name == "Xệ").unwrap();
        let flex = xe.rank(Queue::Flex).unwrap();
        assert_eq!(flex.division, Some(Lenient::Unknown("null".to_string())));
        assert_eq!(flex.issues().len(), 1);
    }
}
