//! Translation deck - level progression without repeats
//!
//! The deck tracks which words of the current level have been answered.
//! Draws only pick unanswered words; when the level's pool is exhausted the
//! pool is recycled (the used set is cleared) rather than ending the game.
//!
//! The level is derived from the score: `score / POINTS_PER_LEVEL + 1`,
//! capped at [`MAX_TRANSLATION_LEVEL`]. A level change clears the used set.

use std::collections::BTreeSet;

use crate::pools::{translations_for_level, TranslationItem};
use crate::rng::SimpleRng;
use crate::types::{MAX_TRANSLATION_LEVEL, POINTS_PER_LEVEL};

/// Level reached with `score` correct answers.
///
/// ```
/// use kids_quiz_core::deck::level_for_score;
///
/// assert_eq!(level_for_score(0), 1);
/// assert_eq!(level_for_score(9), 1);
/// assert_eq!(level_for_score(10), 2);
/// assert_eq!(level_for_score(500), 3);
/// ```
pub fn level_for_score(score: u32) -> u32 {
    (score / POINTS_PER_LEVEL + 1).min(MAX_TRANSLATION_LEVEL)
}

/// Result of drawing a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckDraw {
    pub item: &'static TranslationItem,
    /// Position within the level's pool.
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDeck {
    level: u32,
    used: BTreeSet<usize>,
    recycles: u32,
}

impl TranslationDeck {
    pub fn new() -> Self {
        Self {
            level: 1,
            used: BTreeSet::new(),
            recycles: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Pool slots of the current level answered since the last reset.
    pub fn used(&self) -> &BTreeSet<usize> {
        &self.used
    }

    /// How many times an exhausted pool has been recycled.
    pub fn recycles(&self) -> u32 {
        self.recycles
    }

    /// Record that the word in `slot` has been answered.
    pub fn mark_used(&mut self, slot: usize) {
        self.used.insert(slot);
    }

    /// Re-derive the level from `score`. Returns true if the level changed.
    pub fn sync_level(&mut self, score: u32) -> bool {
        let level = level_for_score(score);
        if level == self.level {
            return false;
        }
        self.level = level;
        self.used.clear();
        true
    }

    /// Draw an unanswered word from the current level.
    ///
    /// Returns `None` only if the level has no words at all.
    pub fn draw(&mut self, rng: &mut SimpleRng) -> Option<DeckDraw> {
        let pool: Vec<&'static TranslationItem> = translations_for_level(self.level).collect();
        if pool.is_empty() {
            return None;
        }

        let mut open: Vec<usize> = (0..pool.len())
            .filter(|i| !self.used.contains(i))
            .collect();
        if open.is_empty() {
            self.used.clear();
            self.recycles = self.recycles.saturating_add(1);
            open = (0..pool.len()).collect();
        }

        let slot = open[rng.index(open.len())];
        Some(DeckDraw { item: pool[slot], slot })
    }
}

impl Default for TranslationDeck {
    fn default() -> Self {
        Self::new()
    }
}
