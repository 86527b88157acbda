//! Plain-text rendering of leaderboard output for the terminal

use crate::leaderboard::{LeaderboardRow, MemberProfile};
use crate::types::{Game, Queue};
use std::fmt::{self, Write};

/// Leaderboard table with the rank, name, rank string and table cells
pub fn leaderboard_table(game: Game, queue: Queue, rows: &[LeaderboardRow<'_>]) -> String {
    render(|out| write_leaderboard_table(out, game, queue, rows))
}

/// Numbered top snapshot
pub fn top_list(game: Game, queue: Queue, rows: &[LeaderboardRow<'_>]) -> String {
    render(|out| write_top_list(out, game, queue, rows))
}

/// Member profile card
pub fn profile_card(profile: &MemberProfile) -> String {
    render(|out| write_profile_card(out, profile))
}

/// Run a writer against a fresh buffer; writing into a `String` never fails
fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    write(&mut out).ok();
    out
}

fn write_leaderboard_table(
    out: &mut String,
    game: Game,
    queue: Queue,
    rows: &[LeaderboardRow<'_>],
) -> fmt::Result {
    writeln!(out, "{} — {}", game.title(), queue.label())?;

    if rows.is_empty() {
        return writeln!(out, "No members found.");
    }

    let name_width = column_width(rows.iter().map(|row| row.name), "Name");
    let rank_width = column_width(rows.iter().map(|row| row.formatted_rank.as_str()), "Rank");

    writeln!(
        out,
        "{:>4}  {:<name_width$}  {:<rank_width$}  {:<8}  {:>6}",
        "#", "Name", "Rank", "Division", "LP"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:>4}  {:<name_width$}  {:<rank_width$}  {:<8}  {:>6}",
            row.rank, row.name, row.formatted_rank, row.division, row.lp
        )?;
    }
    Ok(())
}

fn write_top_list(
    out: &mut String,
    game: Game,
    queue: Queue,
    rows: &[LeaderboardRow<'_>],
) -> fmt::Result {
    writeln!(out, "Top {} — {} {}", rows.len(), game.title(), queue.label())?;
    for (index, row) in rows.iter().enumerate() {
        writeln!(out, "  #{} {}  {}", index + 1, row.name, row.formatted_rank)?;
    }
    Ok(())
}

fn write_profile_card(out: &mut String, profile: &MemberProfile) -> fmt::Result {
    writeln!(out, "[{}] {} ({})", profile.initials, profile.name, profile.game.title())?;
    for standing in &profile.standings {
        let rank = standing
            .rank
            .map(|rank| format!("#{}", rank))
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "  {}: {} ({})", standing.label, standing.formatted_rank, rank)?;
    }
    writeln!(out, "  Stats: {}", profile.images.join(", "))
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|value| value.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}
