//! Leaderboard gate - admission and retention policy
//!
//! Pure functions over the full stored collection (all games mixed):
//!
//! - [`standings`]: one entry per player (their best), highest first, top 10.
//! - [`qualifies`]: whether a score would make that list.
//! - [`admit`]: insert an entry and enforce the retention policy for its game.
//!
//! Ties rank by submission order: of two equal scores, the earlier one stays
//! above. A player's best entry is their earliest entry with the highest
//! score.

use std::collections::HashMap;

use crate::entry::LeaderboardEntry;
use crate::types::{GameKind, LEADERBOARD_CAPACITY};

/// Best entry per player for `game`, as (submission index, entry).
fn best_per_player<'a>(
    game: GameKind,
    entries: &'a [LeaderboardEntry],
) -> Vec<(usize, &'a LeaderboardEntry)> {
    let mut best: Vec<(usize, &LeaderboardEntry)> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for (index, entry) in entries.iter().enumerate().filter(|(_, e)| e.game == game) {
        match by_name.get(entry.name.as_str()) {
            Some(&slot) => {
                if entry.points > best[slot].1.points {
                    best[slot] = (index, entry);
                }
            }
            None => {
                by_name.insert(entry.name.as_str(), best.len());
                best.push((index, entry));
            }
        }
    }

    best.sort_by(|a, b| b.1.points.cmp(&a.1.points).then(a.0.cmp(&b.0)));
    best.truncate(LEADERBOARD_CAPACITY);
    best
}

/// Top-10 list for `game`.
pub fn standings(game: GameKind, entries: &[LeaderboardEntry]) -> Vec<LeaderboardEntry> {
    best_per_player(game, entries)
        .into_iter()
        .map(|(_, e)| e.clone())
        .collect()
}

/// True if `points` would enter the top 10 for `game`.
///
/// Any score qualifies while fewer than 10 players are listed; after that it
/// must beat the 10th place strictly.
pub fn qualifies(game: GameKind, points: u32, entries: &[LeaderboardEntry]) -> bool {
    let top = best_per_player(game, entries);
    if top.len() < LEADERBOARD_CAPACITY {
        return true;
    }
    top.last().is_some_and(|(_, last)| points > last.points)
}

/// Append `entry` and re-apply the retention policy for its game.
///
/// Entries of other games are kept untouched and in order; the entry's game
/// is reduced to its standings.
pub fn admit(entry: LeaderboardEntry, mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    let game = entry.game;
    entries.push(entry);

    let kept = standings(game, &entries);
    entries.retain(|e| e.game != game);
    entries.extend(kept);
    entries
}

/// Highest score `name` has stored for `game`, if any.
pub fn personal_best(game: GameKind, name: &str, entries: &[LeaderboardEntry]) -> Option<u32> {
    entries
        .iter()
        .filter(|e| e.game == game && e.name == name)
        .map(|e| e.points)
        .max()
}

/// 1-based position of `name` in the standings for `game`.
pub fn rank_of(game: GameKind, name: &str, entries: &[LeaderboardEntry]) -> Option<usize> {
    best_per_player(game, entries)
        .iter()
        .position(|(_, e)| e.name == name)
        .map(|i| i + 1)
}
