//! Leaderboard queries over a roster
//!
//! Every query sorts the full roster first. Rank numbers come from that full
//! best-first ordering, so neither the listing direction nor a search that
//! hides rows ever renumbers a member.

use crate::assets;
use crate::error::{LeaderboardError, Result};
use crate::ranking::record::UNRANKED;
use crate::ranking::{
    division_label, format_rank, lp_label, rank_index, style_key_for, RankRecord, RankedEntry,
    RankingEngine, SortDirection,
};
use crate::roster::{RosterProvider, StaticRosterProvider};
use crate::types::{Game, Member, Queue};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// One row of a rendered leaderboard
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow<'a> {
    /// 1-based position on the full, unfiltered leaderboard
    pub rank: usize,
    pub name: &'a str,
    pub record: &'a RankRecord,
    pub formatted_rank: String,
    pub style_key: &'static str,
    /// Division cell (dash when the tier has none)
    pub division: String,
    /// LP cell (dash when unranked)
    pub lp: String,
    #[serde(skip)]
    pub member: &'a Member,
}

impl<'a> LeaderboardRow<'a> {
    fn new(rank: usize, member: &'a Member, record: &'a RankRecord) -> Self {
        Self {
            rank,
            name: &member.name,
            record,
            formatted_rank: format_rank(record),
            style_key: style_key_for(&record.tier),
            division: division_label(record),
            lp: lp_label(record),
            member,
        }
    }
}

/// A member's standing in one queue
#[derive(Debug, Clone, Serialize)]
pub struct QueueStanding {
    pub queue: Queue,
    pub label: &'static str,
    pub formatted_rank: String,
    pub style_key: &'static str,
    pub rank: Option<usize>,
}

/// Everything the profile page shows for a member
#[derive(Debug, Clone, Serialize)]
pub struct MemberProfile {
    pub game: Game,
    pub name: String,
    pub initials: String,
    /// Style of the game's default queue, used for the avatar
    pub style_key: &'static str,
    pub standings: Vec<QueueStanding>,
    pub images: Vec<String>,
    pub fallback_image: &'static str,
}

/// Sorting, formatting and lookup over a roster
pub struct Leaderboard {
    provider: Arc<dyn RosterProvider>,
    engine: RankingEngine,
}

impl Leaderboard {
    pub fn new(provider: Arc<dyn RosterProvider>, engine: RankingEngine) -> Self {
        Self { provider, engine }
    }

    /// Leaderboard over the built-in roster with names collated for `locale`
    pub fn with_static_roster(locale: &str) -> Self {
        Self::new(
            Arc::new(StaticRosterProvider::new()),
            RankingEngine::for_locale(locale),
        )
    }

    pub fn engine(&self) -> &RankingEngine {
        &self.engine
    }

    /// Members of `game` ordered by their `queue` record
    pub fn sorted_members(&self, game: Game, queue: Queue, direction: SortDirection) -> Vec<&Member> {
        if !game.supports(queue) {
            warn!(
                "Queue {} is not tracked for {}; every member ranks as unranked",
                queue, game
            );
        }

        let members = self.provider.members(game);
        self.engine
            .sort(members, |member| member.rank(queue), direction)
    }

    /// Full leaderboard for one game and queue.
    ///
    /// Row rank numbers are competitive ranks (1 is the best member) whatever
    /// order the rows are listed in.
    pub fn sorted_leaderboard(
        &self,
        game: Game,
        queue: Queue,
        direction: SortDirection,
    ) -> Vec<LeaderboardRow<'_>> {
        let mut rows: Vec<LeaderboardRow<'_>> = self
            .sorted_members(game, queue, SortDirection::Descending)
            .into_iter()
            .enumerate()
            .map(|(index, member)| {
                let record = member.rank(queue).unwrap_or(&UNRANKED);
                LeaderboardRow::new(index + 1, member, record)
            })
            .collect();

        if direction == SortDirection::Ascending {
            rows.sort_by(|a, b| {
                self.engine.compare(
                    RankedEntry::new(a.name, a.record),
                    RankedEntry::new(b.name, b.record),
                    direction,
                )
            });
        }
        rows
    }

    /// The best `n` members, highest first
    pub fn top_n(&self, n: usize, game: Game, queue: Queue) -> Vec<LeaderboardRow<'_>> {
        let mut rows = self.sorted_leaderboard(game, queue, SortDirection::Descending);
        rows.truncate(n);
        rows
    }

    /// Rows whose name contains `filter`, ignoring case.
    ///
    /// Rank numbers are those of the full leaderboard.
    pub fn search(
        &self,
        game: Game,
        queue: Queue,
        direction: SortDirection,
        filter: &str,
    ) -> Vec<LeaderboardRow<'_>> {
        let rows = self.sorted_leaderboard(game, queue, direction);
        let needle = filter.to_lowercase();
        if needle.is_empty() {
            return rows;
        }

        let total = rows.len();
        let matched: Vec<_> = rows
            .into_iter()
            .filter(|row| row.name.to_lowercase().contains(&needle))
            .collect();
        debug!("Search {:?} kept {} of {} rows", filter, matched.len(), total);
        matched
    }

    /// Exact-name lookup; `None` is the not-found result
    pub fn lookup(&self, game: Game, name: &str) -> Option<&Member> {
        self.provider.find_member(game, name)
    }

    /// Like `lookup`, with not-found turned into an error
    pub fn require_member(&self, game: Game, name: &str) -> Result<&Member> {
        self.lookup(game, name).ok_or_else(|| {
            LeaderboardError::MemberNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Position of `name` on the full descending leaderboard
    pub fn rank_of(&self, game: Game, queue: Queue, name: &str) -> Option<usize> {
        let sorted = self.sorted_members(game, queue, SortDirection::Descending);
        rank_index(&sorted, name)
    }

    /// Profile data for one member, or `None` if they are not on the roster
    pub fn profile(&self, game: Game, name: &str) -> Option<MemberProfile> {
        let member = self.lookup(game, name)?;

        let standings = game
            .queues()
            .iter()
            .map(|&queue| {
                let record = member.rank(queue).unwrap_or(&UNRANKED);
                QueueStanding {
                    queue,
                    label: queue.label(),
                    formatted_rank: format_rank(record),
                    style_key: style_key_for(&record.tier),
                    rank: self.rank_of(game, queue, &member.name),
                }
            })
            .collect();

        let primary = member.rank(game.default_queue()).unwrap_or(&UNRANKED);

        Some(MemberProfile {
            game,
            name: member.name.clone(),
            initials: assets::initials(&member.name),
            style_key: style_key_for(&primary.tier),
            standings,
            images: assets::stats_images(game, &member.name),
            fallback_image: assets::fallback_image(game),
        })
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(
            Arc::new(StaticRosterProvider::new()),
            RankingEngine::default(),
        )
    }
}
