//! Asset naming helpers for the page views
//!
//! Display names keep their accents, so image filenames go through a fixed
//! name-to-slug table instead of being derived from the name directly.

use crate::types::Game;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref SLUGS: HashMap<&'static str, &'static str> = [
        ("Su", "su"),
        ("Yun", "yun"),
        ("Xệ", "xe"),
        ("a Tứn", "a-tun"),
        ("Đại Tá", "dai-ta"),
        ("Zibi", "zibi"),
        ("Kua", "kua"),
        ("Đồng Nai", "dong-nai"),
        ("Hycan", "hycan"),
        ("Bun", "bun"),
        ("Cupid", "cupid"),
        ("bánh mỳ", "banh-my"),
        ("Gà", "ga"),
    ]
    .into_iter()
    .collect();
}

/// Number of stats screenshots on a League of Legends profile
pub const LOL_STATS_IMAGES: usize = 3;

/// Asset identifier for a member name.
///
/// Names missing from the table are lowercased with each whitespace run
/// replaced by a single `-`.
pub fn slug_for(name: &str) -> String {
    if let Some(slug) = SLUGS.get(name) {
        return slug.to_string();
    }

    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// Avatar initials: the first two letters of a single word, otherwise the
/// first letter of the first two words
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split(' ').filter(|w| !w.is_empty()).collect();
    if words.len() == 1 {
        let head: String = words[0].chars().take(2).collect();
        return head.to_uppercase();
    }

    let firsts: String = words.iter().filter_map(|w| w.chars().next()).collect();
    firsts.to_uppercase().chars().take(2).collect()
}

/// Stats screenshot paths for a member's profile page
pub fn stats_images(game: Game, name: &str) -> Vec<String> {
    let slug = slug_for(name);
    match game {
        Game::Tft => vec![format!("assets/stats/{}.png", slug)],
        Game::Lol => (1..=LOL_STATS_IMAGES)
            .map(|n| format!("assets/lol/{}-{}.png", slug, n))
            .collect(),
    }
}

/// Image shown when a stats screenshot fails to load
pub fn fallback_image(game: Game) -> &'static str {
    match game {
        Game::Tft => "assets/stats/default.png",
        Game::Lol => "assets/lol/default.png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_table() {
        assert_eq!(slug_for("Đồng Nai"), "dong-nai");
        assert_eq!(slug_for("bánh mỳ"), "banh-my");
        assert_eq!(slug_for("Xệ"), "xe");
    }

    #[test]
    fn test_slug_fallback() {
        assert_eq!(slug_for("New Member"), "new-member");
        assert_eq!(slug_for("Two  \t Spaces"), "two-spaces");
        assert_eq!(slug_for("Solo"), "solo");
        assert_eq!(slug_for(""), "");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Yun"), "YU");
        assert_eq!(initials("Xệ"), "XỆ");
        assert_eq!(initials("a Tứn"), "AT");
        assert_eq!(initials("bánh mỳ"), "BM");
        assert_eq!(initials("One Two Three"), "OT");
        assert_eq!(initials("Q"), "Q");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_stats_images() {
        assert_eq!(stats_images(Game::Tft, "Gà"), vec!["assets/stats/ga.png"]);
        assert_eq!(
            stats_images(Game::Lol, "Su"),
            vec![
                "assets/lol/su-1.png",
                "assets/lol/su-2.png",
                "assets/lol/su-3.png"
            ]
        );
        assert_eq!(fallback_image(Game::Lol), "assets/lol/default.png");
    }
}
