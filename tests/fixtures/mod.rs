//! Test fixtures shared by the integration tests

use std::sync::Arc;
use wild_horses::ranking::{RankRecord, RankingEngine};
use wild_horses::roster::StaticRosterProvider;
use wild_horses::{Leaderboard, Member, Queue};

/// TFT member with a single ranked record
pub fn tft_member(name: &str, tier: &str, division: Option<&str>, lp: u32) -> Member {
    Member::new(name, [(Queue::Ranked, RankRecord::parse(tier, division, lp))])
}

/// LoL member with solo/duo and flex records
pub fn lol_member(
    name: &str,
    solo: (&str, Option<&str>, u32),
    flex: (&str, Option<&str>, u32),
) -> Member {
    Member::new(
        name,
        [
            (Queue::Solo, RankRecord::parse(solo.0, solo.1, solo.2)),
            (Queue::Flex, RankRecord::parse(flex.0, flex.1, flex.2)),
        ],
    )
}

/// Small hand-built roster with malformed entries mixed in
pub fn messy_roster() -> (Vec<Member>, Vec<Member>) {
    let tft = vec![
        tft_member("Ana", "Gold", Some("II"), 40),
        tft_member("Ümit", "Gold", Some("II"), 40),
        tft_member("Bea", "Mythic", Some("I"), 9000),
        tft_member("Cyd", "Gold", None, 99),
        tft_member("Dee", "Master", Some("IV"), 12),
        tft_member("Eli", "Gold", Some("VI"), 99),
        tft_member("Fay", "Unranked", Some("II"), 300),
    ];
    let lol = vec![
        lol_member("Ana", ("Iron", Some("IV"), 1), ("Bronze", Some("I"), 0)),
        lol_member("Bea", ("Challenger", Some("null"), 900), ("Iron", Some("I"), 5)),
    ];
    (tft, lol)
}

/// Leaderboard over `messy_roster`
pub fn messy_leaderboard() -> Leaderboard {
    let (tft, lol) = messy_roster();
    Leaderboard::new(
        Arc::new(StaticRosterProvider::with_members(tft, lol)),
        RankingEngine::default(),
    )
}
