//! Common types used throughout the leaderboard

use crate::ranking::{Ranked, RankRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Display name of a member; also the lookup key
pub type MemberName = String;

/// Game title with its own leaderboard
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Game {
    /// Teamfight Tactics
    Tft,
    /// League of Legends
    Lol,
}

impl Game {
    /// Queues tracked for this game
    pub fn queues(self) -> &'static [Queue] {
        match self {
            Game::Tft => &[Queue::Ranked],
            Game::Lol => &[Queue::Solo, Queue::Flex],
        }
    }

    /// Queue the leaderboard sorts by when none is chosen
    pub fn default_queue(self) -> Queue {
        self.queues()[0]
    }

    pub fn supports(self, queue: Queue) -> bool {
        self.queues().contains(&queue)
    }

    pub fn title(self) -> &'static str {
        match self {
            Game::Tft => "Teamfight Tactics",
            Game::Lol => "League of Legends",
        }
    }
}

/// Ranked queue a record belongs to
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Queue {
    Ranked,
    Solo,
    Flex,
}

impl Queue {
    pub fn label(self) -> &'static str {
        match self {
            Queue::Ranked => "Ranked",
            Queue::Solo => "Solo/Duo",
            Queue::Flex => "Flex",
        }
    }
}

/// A roster member with one rank record per queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: MemberName,
    pub ranks: BTreeMap<Queue, RankRecord>,
}

impl Member {
    pub fn new(name: impl Into<MemberName>, ranks: impl IntoIterator<Item = (Queue, RankRecord)>) -> Self {
        Self {
            name: name.into(),
            ranks: ranks.into_iter().collect(),
        }
    }

    /// Record for a queue, if the member has one
    pub fn rank(&self, queue: Queue) -> Option<&RankRecord> {
        self.ranks.get(&queue)
    }
}

impl Ranked for Member {
    fn display_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::Tier;

    #[test]
    fn test_game_queues() {
        assert_eq!(Game::Tft.default_queue(), Queue::Ranked);
        assert_eq!(Game::Lol.default_queue(), Queue::Solo);
        assert!(Game::Lol.supports(Queue::Flex));
        assert!(!Game::Tft.supports(Queue::Solo));
    }

    #[test]
    fn test_game_and_queue_parsing() {
        assert_eq!("tft".parse::<Game>().unwrap(), Game::Tft);
        assert_eq!("LoL".parse::<Game>().unwrap(), Game::Lol);
        assert!("chess".parse::<Game>().is_err());
        assert_eq!("flex".parse::<Queue>().unwrap(), Queue::Flex);
        assert_eq!(Queue::Solo.to_string(), "solo");
        assert_eq!(Queue::Solo.label(), "Solo/Duo");
    }

    #[test]
    fn test_member_rank() {
        let member = Member::new(
            "Kua",
            [
                (Queue::Solo, RankRecord::new(Tier::Master, None, 97)),
                (Queue::Flex, RankRecord::new(Tier::Master, None, 8)),
            ],
        );
        assert_eq!(member.rank(Queue::Solo).map(|r| r.lp), Some(97));
        assert_eq!(member.rank(Queue::Ranked), None);
        assert_eq!(member.display_name(), "Kua");
    }
}
