//! Round controller - one question lifecycle at a time
//!
//! The controller owns the [`SessionState`] exclusively and moves each round
//! through `AwaitingAnswer -> Judging -> (Advancing | Ending)`:
//!
//! - **AwaitingAnswer**: one answer is accepted per question. Blank answers
//!   are rejected without touching the state.
//! - **Judging**: exactly one of `record_correct_answer` /
//!   `record_incorrect_answer` runs.
//! - **Advancing**: the countdown restarts and a new question is installed.
//!   After an incorrect answer, games with
//!   [`AdvancePolicy::RevealThenContinue`] stop in [`RoundPhase::Revealing`]
//!   until [`RoundController::continue_round`] is called.
//! - **Ending**: hearts exhausted, countdown expired, no question available,
//!   or the player left. Only [`RoundController::restart`] leaves this state.
//!
//! Submissions and ticks are serialized by the caller. An answer that is
//! submitted before a tick takes the countdown to zero is judged normally;
//! after time-up every submission is ignored.

use std::time::{Duration, Instant};

use crate::generator::QuestionGenerator;
use crate::question::{ExpectedAnswer, Question};
use crate::session::{SessionState, TimerTick};
use crate::snapshot::SessionSnapshot;
use crate::ticker::Ticker;
use crate::types::{AdvancePolicy, GameKind, DEFAULT_MAX_TIME_SECONDS, TICK_MS};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    HeartsExhausted,
    TimeUp,
    /// No question could be generated.
    PoolExhausted,
    /// The player left mid-game.
    Abandoned,
}

impl EndReason {
    /// Whether the final score may be offered to the leaderboard.
    pub fn is_scored(&self) -> bool {
        !matches!(self, EndReason::Abandoned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    AwaitingAnswer,
    /// An incorrect answer's expected answer is on screen.
    Revealing,
    Ended(EndReason),
}

/// Result of judging one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    pub correct: bool,
    pub expected: ExpectedAnswer,
    /// New translation level, if this answer crossed a level boundary.
    pub level_up: Option<u32>,
    /// The translation pool ran out and was recycled to draw the next word.
    pub pool_recycled: bool,
    /// Phase after the judgement was applied.
    pub phase: RoundPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only answer; nothing changed.
    Blank,
    /// No question is awaiting an answer; nothing changed.
    Ignored,
    Judged(Judgement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Idle,
    /// Seconds remaining after the tick.
    Running(u32),
    /// The countdown ran out and the session ended.
    TimeUp,
}

#[derive(Debug, Clone)]
pub struct RoundController {
    session: SessionState,
    generator: QuestionGenerator,
    ticker: Ticker,
    revealing: bool,
    end_reason: Option<EndReason>,
    started: bool,
}

impl RoundController {
    pub fn new(kind: GameKind, player_name: impl Into<String>, timer_enabled: bool, seed: u32) -> Self {
        Self::with_max_time(kind, player_name, timer_enabled, DEFAULT_MAX_TIME_SECONDS, seed)
    }

    pub fn with_max_time(
        kind: GameKind,
        player_name: impl Into<String>,
        timer_enabled: bool,
        max_time: u32,
        seed: u32,
    ) -> Self {
        Self {
            session: SessionState::with_max_time(kind, player_name, timer_enabled, max_time),
            generator: QuestionGenerator::new(seed),
            ticker: Ticker::new(Duration::from_millis(TICK_MS as u64)),
            revealing: false,
            end_reason: None,
            started: false,
        }
    }

    /// Install the first question and start the countdown.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.advance();
    }

    /// Replace the session with a fresh one for the same player and start it.
    ///
    /// The question generator carries on from where it was, so a replay does
    /// not repeat the previous session's questions.
    pub fn restart(&mut self) {
        let name = self.session.player_name().to_string();
        let timer_enabled = self.session.timer_enabled();
        self.session.reset(name, timer_enabled);
        self.revealing = false;
        self.end_reason = None;
        self.ticker.disarm();
        self.started = false;
        self.start();
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn kind(&self) -> GameKind {
        self.session.kind()
    }

    pub fn phase(&self) -> RoundPhase {
        match self.end_reason {
            Some(reason) => RoundPhase::Ended(reason),
            None if self.revealing => RoundPhase::Revealing,
            None => RoundPhase::AwaitingAnswer,
        }
    }

    pub fn is_over(&self) -> bool {
        self.end_reason.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Put a specific question in front of the player.
    ///
    /// Resets the countdown and clears any reveal. Ignored once the session
    /// has ended.
    pub fn present(&mut self, question: Question) -> bool {
        if self.is_over() || !self.session.set_current_question(question) {
            return false;
        }
        self.started = true;
        self.revealing = false;
        self.restart_countdown();
        true
    }

    /// Judge one answer for the current question.
    pub fn submit(&mut self, answer: &str) -> SubmitOutcome {
        if self.is_over() || self.revealing {
            return SubmitOutcome::Ignored;
        }
        if self.session.time_expired() {
            self.expire();
            return SubmitOutcome::Ignored;
        }
        let Some(question) = self.session.current_question() else {
            return SubmitOutcome::Ignored;
        };
        if answer.trim().is_empty() {
            return SubmitOutcome::Blank;
        }

        let correct = question.is_correct(answer);
        let expected = question.expected_answer();
        let slot = match *question {
            Question::TranslationWord { slot, .. } => Some(slot),
            _ => None,
        };

        if correct {
            self.session.record_correct_answer();
        } else {
            self.session.record_incorrect_answer();
        }

        let score = self.session.score();
        let level_up = self.session.deck_mut().and_then(|deck| {
            if let Some(slot) = slot {
                deck.mark_used(slot);
            }
            deck.sync_level(score).then(|| deck.level())
        });

        let recycles = self.session.pool_recycles();
        if self.session.game_over() {
            self.end(EndReason::HeartsExhausted);
        } else if correct || self.kind().advance_policy() == AdvancePolicy::AutoAdvance {
            self.advance();
        } else {
            self.revealing = true;
            self.ticker.disarm();
        }

        SubmitOutcome::Judged(Judgement {
            correct,
            expected,
            level_up,
            pool_recycled: self.session.pool_recycles() != recycles,
            phase: self.phase(),
        })
    }

    /// Leave the reveal step and move to the next question.
    pub fn continue_round(&mut self) -> bool {
        if !self.revealing || self.is_over() {
            return false;
        }
        self.advance();
        true
    }

    /// Apply one second of countdown.
    pub fn tick(&mut self) -> TickEvent {
        if self.is_over() || self.revealing || !self.started {
            return TickEvent::Idle;
        }
        match self.session.tick_timer() {
            TimerTick::Idle => TickEvent::Idle,
            TimerTick::Running(left) => TickEvent::Running(left),
            TimerTick::Expired => {
                self.expire();
                TickEvent::TimeUp
            }
        }
    }

    /// Apply every tick that has come due by `now`.
    pub fn poll_timer(&mut self, now: Instant) -> TickEvent {
        let due = self.ticker.poll(now);
        let mut last = TickEvent::Idle;
        for _ in 0..due {
            last = self.tick();
            if last == TickEvent::TimeUp {
                break;
            }
        }
        last
    }

    /// How long the caller may wait for input before the next tick is due.
    pub fn timer_timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.ticker.timeout(now, idle)
    }

    /// Whether a countdown tick is scheduled.
    pub fn timer_armed(&self) -> bool {
        self.ticker.is_armed()
    }

    /// End the session because the player left.
    pub fn abandon(&mut self) {
        if !self.is_over() {
            self.end(EndReason::Abandoned);
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session, self.phase())
    }

    fn advance(&mut self) {
        let kind = self.session.kind();
        let next = self.generator.next_question(kind, self.session.deck_mut());

        match next {
            Some(question) => {
                self.session.set_current_question(question);
                self.revealing = false;
                self.restart_countdown();
            }
            None => self.end(EndReason::PoolExhausted),
        }
    }

    fn restart_countdown(&mut self) {
        let max = self.session.max_time();
        self.session.set_time_left(max);
        if self.session.timer_enabled() {
            self.ticker.arm();
        } else {
            self.ticker.disarm();
        }
    }

    /// Time's up: the countdown already reads zero, now finalize.
    fn expire(&mut self) {
        self.end(EndReason::TimeUp);
    }

    fn end(&mut self, reason: EndReason) {
        self.session.end_session();
        self.end_reason = Some(reason);
        self.revealing = false;
        self.ticker.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_HEARTS;

    fn wrong_answer(c: &RoundController) -> &'static str {
        match c.session().current_question().map(Question::expected_answer) {
            Some(ExpectedAnswer::Number(_)) => "not a number",
            _ => "definitely wrong",
        }
    }

    #[test]
    fn start_installs_a_question_and_arms_the_timer() {
        let mut c = RoundController::new(GameKind::Math, "Noa", true, 1);
        assert!(c.session().current_question().is_none());
        assert!(!c.timer_armed());

        c.start();
        assert!(c.session().current_question().is_some());
        assert_eq!(c.phase(), RoundPhase::AwaitingAnswer);
        assert!(c.timer_armed());
    }

    #[test]
    fn timer_stays_disarmed_when_disabled() {
        let mut c = RoundController::new(GameKind::Math, "Noa", false, 1);
        c.start();
        assert!(!c.timer_armed());
        assert_eq!(c.tick(), TickEvent::Idle);
    }

    #[test]
    fn submit_before_start_is_ignored() {
        let mut c = RoundController::new(GameKind::Math, "Noa", true, 1);
        assert_eq!(c.submit("4"), SubmitOutcome::Ignored);
        assert_eq!(c.session().score(), 0);
    }

    #[test]
    fn blank_answers_change_nothing() {
        let mut c = RoundController::new(GameKind::Letters, "Noa", true, 1);
        c.start();
        c.tick();
        let before = c.session().clone();

        assert_eq!(c.submit(""), SubmitOutcome::Blank);
        assert_eq!(c.submit("   \t"), SubmitOutcome::Blank);
        assert_eq!(c.session(), &before);
    }

    #[test]
    fn correct_answer_scores_and_advances() {
        let mut c = RoundController::new(GameKind::Math, "Noa", true, 1);
        c.start();
        c.present(Question::arithmetic(100, &[7, 9]).unwrap());
        c.tick();

        let SubmitOutcome::Judged(j) = c.submit("63") else {
            panic!("expected a judgement");
        };
        assert!(j.correct);
        assert_eq!(j.phase, RoundPhase::AwaitingAnswer);
        assert_eq!(c.session().score(), 1);
        assert_eq!(c.session().hearts(), MAX_HEARTS);
        assert_eq!(c.session().time_left(), DEFAULT_MAX_TIME_SECONDS);
        assert_ne!(c.session().current_question().map(Question::id), Some(100));
    }

    #[test]
    fn vocabulary_reveals_then_continues() {
        let mut c = RoundController::new(GameKind::Vocabulary, "Noa", true, 3);
        c.start();
        let first = c.session().current_question().cloned().unwrap();

        let SubmitOutcome::Judged(j) = c.submit("zzz") else {
            panic!("expected a judgement");
        };
        assert!(!j.correct);
        assert_eq!(j.phase, RoundPhase::Revealing);
        assert_eq!(j.expected, first.expected_answer());
        assert_eq!(c.session().hearts(), MAX_HEARTS - 1);

        // Question stays put, answers and ticks are ignored while revealing.
        assert_eq!(c.session().current_question(), Some(&first));
        assert_eq!(c.submit(&first.prompt()), SubmitOutcome::Ignored);
        assert_eq!(c.tick(), TickEvent::Idle);
        assert!(!c.timer_armed());

        assert!(c.continue_round());
        assert_eq!(c.phase(), RoundPhase::AwaitingAnswer);
        assert_ne!(c.session().current_question().map(Question::id), Some(first.id()));
        assert!(c.timer_armed());
        assert!(!c.continue_round());
    }

    #[test]
    fn auto_advance_games_move_on_after_a_miss() {
        for kind in [GameKind::Math, GameKind::Letters, GameKind::Translation] {
            let mut c = RoundController::new(kind, "Noa", false, 9);
            c.start();
            let id = c.session().current_question().map(Question::id);
            let answer = wrong_answer(&c);
            let SubmitOutcome::Judged(j) = c.submit(answer) else {
                panic!("expected a judgement for {kind:?}");
            };
            assert!(!j.correct);
            assert_eq!(j.phase, RoundPhase::AwaitingAnswer, "{kind:?}");
            assert_ne!(c.session().current_question().map(Question::id), id);
        }
    }

    #[test]
    fn losing_the_last_heart_ends_without_reveal() {
        let mut c = RoundController::new(GameKind::Vocabulary, "Noa", false, 5);
        c.start();
        for _ in 0..2 {
            c.submit("zzz");
            assert!(c.continue_round());
        }
        let SubmitOutcome::Judged(j) = c.submit("zzz") else {
            panic!("expected a judgement");
        };
        assert_eq!(j.phase, RoundPhase::Ended(EndReason::HeartsExhausted));
        assert!(c.session().game_over());
        assert!(!c.continue_round());
    }

    #[test]
    fn time_up_ends_the_session_and_blocks_answers() {
        let mut c = RoundController::with_max_time(GameKind::Math, "Noa", true, 3, 1);
        c.start();
        assert_eq!(c.tick(), TickEvent::Running(2));
        assert_eq!(c.tick(), TickEvent::Running(1));
        assert_eq!(c.tick(), TickEvent::TimeUp);

        assert_eq!(c.phase(), RoundPhase::Ended(EndReason::TimeUp));
        assert!(!c.timer_armed());
        assert_eq!(c.submit("1"), SubmitOutcome::Ignored);
        assert_eq!(c.tick(), TickEvent::Idle);
    }

    #[test]
    fn answer_in_the_last_second_is_honored() {
        let mut c = RoundController::with_max_time(GameKind::Math, "Noa", true, 2, 1);
        c.start();
        c.present(Question::arithmetic(50, &[3, 4]).unwrap());
        assert_eq!(c.tick(), TickEvent::Running(1));

        let SubmitOutcome::Judged(j) = c.submit("12") else {
            panic!("expected a judgement");
        };
        assert!(j.correct);
        assert_eq!(c.session().time_left(), 2);
        assert_eq!(c.tick(), TickEvent::Running(1));
    }

    #[test]
    fn poll_timer_applies_due_ticks() {
        let mut c = RoundController::with_max_time(GameKind::Letters, "Noa", true, 5, 1);
        c.start();
        let t0 = Instant::now();
        assert_eq!(c.poll_timer(t0), TickEvent::Idle);
        assert_eq!(c.poll_timer(t0 + Duration::from_millis(2100)), TickEvent::Running(3));
        assert_eq!(c.poll_timer(t0 + Duration::from_secs(60)), TickEvent::TimeUp);
        assert_eq!(c.session().time_left(), 0);
    }

    #[test]
    fn abandon_is_terminal_and_unscored() {
        let mut c = RoundController::new(GameKind::Letters, "Noa", true, 1);
        c.start();
        c.abandon();
        assert_eq!(c.phase(), RoundPhase::Ended(EndReason::Abandoned));
        assert!(!EndReason::Abandoned.is_scored());
        assert!(EndReason::TimeUp.is_scored());
        assert!(!c.present(Question::arithmetic(1, &[1, 1]).unwrap()));
    }

    #[test]
    fn restart_builds_a_fresh_session() {
        let mut c = RoundController::new(GameKind::Translation, "Noa", true, 4);
        c.start();
        let answer = c
            .session()
            .current_question()
            .map(|q| q.expected_answer().to_string())
            .unwrap();
        c.submit(&answer);
        c.abandon();

        c.restart();
        assert_eq!(c.phase(), RoundPhase::AwaitingAnswer);
        assert_eq!(c.session().score(), 0);
        assert_eq!(c.session().hearts(), MAX_HEARTS);
        assert_eq!(c.session().current_level(), Some(1));
        assert!(c.session().used_indices().is_some_and(|u| u.is_empty()));
        assert!(c.session().current_question().is_some());
        assert_eq!(c.session().player_name(), "Noa");
    }
}
