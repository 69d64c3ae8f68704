//! Read-only view of a session for rendering.

use crate::question::{Auxiliary, Question};
use crate::round::RoundPhase;
use crate::session::SessionState;
use crate::types::{GameKind, MAX_HEARTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub kind: GameKind,
    pub player_name: String,
    pub score: u32,
    pub hearts: u8,
    pub max_hearts: u8,
    pub timer_enabled: bool,
    pub time_left: u32,
    pub max_time: u32,
    pub level: Option<u32>,
    pub question: Option<Question>,
    pub phase: RoundPhase,
}

impl SessionSnapshot {
    pub fn capture(session: &SessionState, phase: RoundPhase) -> Self {
        Self {
            kind: session.kind(),
            player_name: session.player_name().to_string(),
            score: session.score(),
            hearts: session.hearts(),
            max_hearts: MAX_HEARTS,
            timer_enabled: session.timer_enabled(),
            time_left: session.time_left(),
            max_time: session.max_time(),
            level: session.current_level(),
            question: session.current_question().cloned(),
            phase,
        }
    }

    pub fn prompt(&self) -> Option<String> {
        self.question.as_ref().map(Question::prompt)
    }

    pub fn auxiliary(&self) -> Option<Auxiliary> {
        self.question.as_ref().and_then(Question::auxiliary)
    }

    /// The expected answer, while it is being revealed.
    pub fn revealed_answer(&self) -> Option<String> {
        match self.phase {
            RoundPhase::Revealing => self
                .question
                .as_ref()
                .map(|q| q.expected_answer().to_string()),
            _ => None,
        }
    }

    pub fn game_over(&self) -> bool {
        matches!(self.phase, RoundPhase::Ended(_))
    }

    /// Countdown progress in `0.0..=1.0`.
    pub fn time_fraction(&self) -> f32 {
        if self.max_time == 0 {
            return 0.0;
        }
        self.time_left as f32 / self.max_time as f32
    }
}
