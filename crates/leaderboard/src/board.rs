//! Leaderboard backed by a key-value store.

use crate::entry::LeaderboardEntry;
use crate::gate;
use crate::store::{KeyValueStore, StoreError, LEADERBOARD_KEY, PLAYER_NAME_KEY};
use crate::types::GameKind;

/// Result of offering a finished session to the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Stored; 1-based place in the game's standings.
    Admitted { name: String, rank: usize },
    /// The score does not beat the current 10th place.
    NotQualified,
    /// The player already holds an equal or better entry for this game.
    NotImproved { best: u32 },
    /// Neither the stored setup name nor the given name is usable.
    BlankName,
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Leaderboard<S> {
    store: S,
}

impl<S: KeyValueStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every stored entry, all games.
    ///
    /// A missing slot is empty. A slot that is not a JSON array of entries is
    /// treated as empty too.
    pub fn entries(&self) -> Vec<LeaderboardEntry> {
        let Some(raw) = self.store.get(LEADERBOARD_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "leaderboard slot is malformed, treating it as empty");
                Vec::new()
            }
        }
    }

    pub fn standings(&self, game: GameKind) -> Vec<LeaderboardEntry> {
        gate::standings(game, &self.entries())
    }

    pub fn qualifies(&self, game: GameKind, points: u32) -> bool {
        gate::qualifies(game, points, &self.entries())
    }

    /// Offer a finished session's score.
    ///
    /// The stored setup name wins over `name` when it is not blank.
    pub fn submit(
        &mut self,
        name: &str,
        game: GameKind,
        points: u32,
        level: Option<u32>,
    ) -> Result<Admission, StoreError> {
        let stored = self.store.get(PLAYER_NAME_KEY);
        let player = match stored.as_deref().map(str::trim) {
            Some(stored) if !stored.is_empty() => stored.to_string(),
            _ => name.trim().to_string(),
        };
        if player.is_empty() {
            return Ok(Admission::BlankName);
        }

        let entries = self.entries();
        if let Some(best) = gate::personal_best(game, &player, &entries) {
            if best >= points {
                tracing::debug!(player = %player, game = game.as_str(), points, best, "score does not beat personal best");
                return Ok(Admission::NotImproved { best });
            }
        }
        if !gate::qualifies(game, points, &entries) {
            tracing::debug!(game = game.as_str(), points, "score does not qualify");
            return Ok(Admission::NotQualified);
        }

        let entry = LeaderboardEntry::dated_today(player.clone(), game, points, level);
        let entries = gate::admit(entry, entries);
        let rank = gate::rank_of(game, &player, &entries).unwrap_or(0);
        self.store.set(LEADERBOARD_KEY, serde_json::to_string(&entries)?)?;

        tracing::info!(player = %player, game = game.as_str(), points, rank, "leaderboard entry admitted");
        Ok(Admission::Admitted { name: player, rank })
    }
}
