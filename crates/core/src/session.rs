//! Session state module - the single mutable record of one play-through
//!
//! A [`SessionState`] is created when a game starts and replaced (never
//! recycled) when the player restarts. Every mutation goes through the
//! operations below, and each of them leaves the state valid:
//!
//! - `hearts` stays in `0..=MAX_HEARTS`; reaching 0 sets `game_over` in the
//!   same call.
//! - Once `game_over` is set, no operation changes score, hearts, countdown
//!   or the current question.
//! - The countdown only moves while the timer is enabled and the game is live.

use std::collections::BTreeSet;

use crate::deck::TranslationDeck;
use crate::question::Question;
use crate::types::{GameKind, DEFAULT_MAX_TIME_SECONDS, MAX_HEARTS, MAX_TIME_CEILING_SECONDS};

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// Nothing happened (timer disabled, game over, or already at zero).
    Idle,
    /// One second elapsed; seconds remaining.
    Running(u32),
    /// This tick took the countdown to zero. The caller decides what
    /// "time's up" means and ends the session.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    kind: GameKind,
    player_name: String,
    score: u32,
    hearts: u8,
    timer_enabled: bool,
    max_time: u32,
    time_left: u32,
    current_question: Option<Question>,
    game_over: bool,
    /// Present for translation sessions only.
    deck: Option<TranslationDeck>,
}

impl SessionState {
    /// Fresh session with the default countdown length.
    pub fn new(kind: GameKind, player_name: impl Into<String>, timer_enabled: bool) -> Self {
        Self::with_max_time(kind, player_name, timer_enabled, DEFAULT_MAX_TIME_SECONDS)
    }

    /// Fresh session with a countdown of `max_time` seconds per question,
    /// clamped to `1..=MAX_TIME_CEILING_SECONDS`.
    pub fn with_max_time(
        kind: GameKind,
        player_name: impl Into<String>,
        timer_enabled: bool,
        max_time: u32,
    ) -> Self {
        let max_time = max_time.clamp(1, MAX_TIME_CEILING_SECONDS);
        Self {
            kind,
            player_name: player_name.into(),
            score: 0,
            hearts: MAX_HEARTS,
            timer_enabled,
            max_time,
            time_left: max_time,
            current_question: None,
            game_over: false,
            deck: kind.is_leveled().then(TranslationDeck::new),
        }
    }

    /// Reinitialize every field to its default.
    ///
    /// Game kind and countdown length carry over; the rest is replaced.
    pub fn reset(&mut self, player_name: impl Into<String>, timer_enabled: bool) {
        *self = Self::with_max_time(self.kind, player_name, timer_enabled, self.max_time);
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hearts(&self) -> u8 {
        self.hearts
    }

    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    pub fn max_time(&self) -> u32 {
        self.max_time
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Translation level, for leveled games.
    pub fn current_level(&self) -> Option<u32> {
        self.deck.as_ref().map(TranslationDeck::level)
    }

    /// Answered pool slots of the current translation level.
    pub fn used_indices(&self) -> Option<&BTreeSet<usize>> {
        self.deck.as_ref().map(TranslationDeck::used)
    }

    /// Times the current session's translation pool has been recycled.
    pub fn pool_recycles(&self) -> Option<u32> {
        self.deck.as_ref().map(TranslationDeck::recycles)
    }

    pub(crate) fn deck_mut(&mut self) -> Option<&mut TranslationDeck> {
        self.deck.as_mut()
    }

    /// True once an enabled countdown has reached zero.
    pub fn time_expired(&self) -> bool {
        self.timer_enabled && self.time_left == 0
    }

    /// Replace the current question. Ignored after game over.
    pub fn set_current_question(&mut self, question: Question) -> bool {
        if self.game_over {
            return false;
        }
        self.current_question = Some(question);
        true
    }

    /// Score one correct answer.
    pub fn record_correct_answer(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.score = self.score.saturating_add(1);
        true
    }

    /// Take one heart; losing the last one ends the game.
    pub fn record_incorrect_answer(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.hearts = self.hearts.saturating_sub(1);
        if self.hearts == 0 {
            self.game_over = true;
        }
        true
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero does not end the game by itself; see [`TimerTick::Expired`].
    pub fn tick_timer(&mut self) -> TimerTick {
        if !self.timer_enabled || self.game_over || self.time_left == 0 {
            return TimerTick::Idle;
        }
        self.time_left -= 1;
        if self.time_left == 0 {
            TimerTick::Expired
        } else {
            TimerTick::Running(self.time_left)
        }
    }

    /// Restart the countdown, clamped to `0..=max_time`. Ignored after game over.
    pub fn set_time_left(&mut self, seconds: u32) -> bool {
        if self.game_over {
            return false;
        }
        self.time_left = seconds.min(self.max_time);
        true
    }

    /// End the session. Terminal.
    pub fn end_session(&mut self) {
        self.game_over = true;
    }
}
