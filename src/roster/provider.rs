//! Roster provider traits and implementations
//!
//! The leaderboard reads members through `RosterProvider` so tests and
//! benchmarks can swap in their own tables.

use crate::roster::data::{LOL_MEMBERS, TFT_MEMBERS};
use crate::types::{Game, Member};
use std::borrow::Cow;
use strum::IntoEnumIterator;

/// Trait for providing the member roster of each game
pub trait RosterProvider: Send + Sync {
    /// All members listed for a game, in roster order
    fn members(&self, game: Game) -> &[Member];

    /// Games this provider has a roster for
    fn available_games(&self) -> Vec<Game>;

    /// Exact-name lookup; `None` means the member is not on this roster
    fn find_member(&self, game: Game, name: &str) -> Option<&Member> {
        self.members(game).iter().find(|member| member.name == name)
    }
}

/// Provider over the built-in site tables
#[derive(Debug, Clone)]
pub struct StaticRosterProvider {
    tft: Cow<'static, [Member]>,
    lol: Cow<'static, [Member]>,
}

impl StaticRosterProvider {
    /// Provider over the process-wide roster tables
    pub fn new() -> Self {
        Self {
            tft: Cow::Borrowed(TFT_MEMBERS.as_slice()),
            lol: Cow::Borrowed(LOL_MEMBERS.as_slice()),
        }
    }

    /// Provider over caller-supplied tables
    pub fn with_members(tft: Vec<Member>, lol: Vec<Member>) -> Self {
        Self {
            tft: Cow::Owned(tft),
            lol: Cow::Owned(lol),
        }
    }
}

impl Default for StaticRosterProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterProvider for StaticRosterProvider {
    fn members(&self, game: Game) -> &[Member] {
        match game {
            Game::Tft => &self.tft,
            Game::Lol => &self.lol,
        }
    }

    fn available_games(&self) -> Vec<Game> {
        Game::iter().collect()
    }
}
