//! One game screen: the round, the typed answer and the game-over panel.
//!
//! [`QuizApp`] is the glue between terminal input and the core. It never
//! touches the terminal itself, so the binary's loop stays thin and the
//! whole flow can be driven from tests with a [`MemoryStore`].
//!
//! [`MemoryStore`]: crate::leaderboard::MemoryStore

use std::time::{Duration, Instant};

use crate::core::{RoundController, RoundPhase, SubmitOutcome, TickEvent};
use crate::input::{AnswerBuffer, InputMode, QuizInput};
use crate::leaderboard::{Admission, KeyValueStore, Leaderboard, LeaderboardEntry};
use crate::term::{FrameBuffer, GameOverPanel, QuizFrame, QuizView, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct QuizApp<S> {
    round: RoundController,
    answer: AnswerBuffer,
    board: Leaderboard<S>,
    standings: Vec<LeaderboardEntry>,
    notice: Option<String>,
    finished: bool,
}

impl<S: KeyValueStore> QuizApp<S> {
    pub fn new(round: RoundController, board: Leaderboard<S>) -> Self {
        Self {
            round,
            answer: AnswerBuffer::new(),
            board,
            standings: Vec::new(),
            notice: None,
            finished: false,
        }
    }

    pub fn start(&mut self) {
        let session = self.round.session();
        tracing::info!(
            game = self.round.kind().as_str(),
            player = session.player_name(),
            timer = session.timer_enabled(),
            "session started"
        );
        self.round.start();
        self.finish_if_over();
    }

    pub fn round(&self) -> &RoundController {
        &self.round
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.board
    }

    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn standings(&self) -> &[LeaderboardEntry] {
        &self.standings
    }

    pub fn mode(&self) -> InputMode {
        match self.round.phase() {
            RoundPhase::AwaitingAnswer => InputMode::Answering,
            RoundPhase::Revealing => InputMode::Revealing,
            RoundPhase::Ended(_) => InputMode::GameOver,
        }
    }

    pub fn handle(&mut self, input: QuizInput) -> Flow {
        match input {
            QuizInput::Quit => {
                if !self.round.is_over() {
                    tracing::info!(score = self.round.session().score(), "session abandoned");
                    self.round.abandon();
                }
                return Flow::Quit;
            }
            QuizInput::Char(c) => {
                if self.mode() == InputMode::Answering {
                    self.answer.push(c);
                }
            }
            QuizInput::Backspace => {
                self.answer.pop();
            }
            QuizInput::Submit => self.submit(),
            QuizInput::Continue => {
                self.round.continue_round();
            }
            QuizInput::Restart => self.restart(),
        }
        Flow::Continue
    }

    /// Apply countdown ticks that came due by `now`.
    pub fn poll_timer(&mut self, now: Instant) {
        if self.round.poll_timer(now) == TickEvent::TimeUp {
            tracing::info!(score = self.round.session().score(), "time is up");
        }
        self.finish_if_over();
    }

    /// How long the caller may block on input.
    pub fn timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.round.timer_timeout(now, idle)
    }

    pub fn render_into(&self, view: &QuizView, viewport: Viewport, fb: &mut FrameBuffer) {
        let snapshot = self.round.snapshot();
        let frame = QuizFrame {
            snapshot: &snapshot,
            answer: self.answer.as_str(),
            game_over: GameOverPanel {
                notice: self.notice.as_deref(),
                standings: &self.standings,
            },
        };
        view.render_into(&frame, viewport, fb);
    }

    fn submit(&mut self) {
        if self.mode() != InputMode::Answering || self.answer.is_blank() {
            return;
        }
        let text = self.answer.take();
        match self.round.submit(&text) {
            SubmitOutcome::Judged(judgement) => {
                tracing::debug!(correct = judgement.correct, expected = %judgement.expected, "answer judged");
                if let Some(level) = judgement.level_up {
                    tracing::info!(level, "translation level changed");
                }
                if judgement.pool_recycled {
                    tracing::info!("translation pool exhausted, recycling words");
                }
            }
            SubmitOutcome::Blank | SubmitOutcome::Ignored => {}
        }
        self.finish_if_over();
    }

    fn restart(&mut self) {
        if !self.round.is_over() {
            return;
        }
        self.round.restart();
        self.answer.clear();
        self.standings.clear();
        self.notice = None;
        self.finished = false;
        tracing::info!(game = self.round.kind().as_str(), "session restarted");
    }

    /// Offer the final score once, when the session has just ended.
    fn finish_if_over(&mut self) {
        let Some(reason) = self.round.end_reason() else {
            return;
        };
        if self.finished {
            return;
        }
        self.finished = true;
        self.answer.clear();

        let session = self.round.session();
        let game = session.kind();
        let points = session.score();
        tracing::info!(game = game.as_str(), points, reason = ?reason, "session ended");

        if !reason.is_scored() {
            return;
        }

        let player = session.player_name().to_string();
        let level = session.current_level();
        self.notice = Some(match self.board.submit(&player, game, points, level) {
            Ok(Admission::Admitted { rank, .. }) => format!("New high score! You are #{rank}"),
            Ok(Admission::NotQualified) => "Not in the top 10 this time".to_string(),
            Ok(Admission::NotImproved { best }) => format!("Your best is still {best}"),
            Ok(Admission::BlankName) => "No player name, score not saved".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to save leaderboard entry");
                "Could not save the score".to_string()
            }
        });
        self.standings = self.board.standings(game);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EndReason, Question};
    use crate::leaderboard::MemoryStore;
    use crate::types::GameKind;

    fn app(kind: GameKind, timer: bool) -> QuizApp<MemoryStore> {
        let round = RoundController::new(kind, "Noa", timer, 3);
        let mut app = QuizApp::new(round, Leaderboard::new(MemoryStore::new()));
        app.start();
        app
    }

    fn type_answer(app: &mut QuizApp<MemoryStore>, text: &str) {
        for c in text.chars() {
            app.handle(QuizInput::Char(c));
        }
        app.handle(QuizInput::Submit);
    }

    #[test]
    fn typed_answers_are_submitted_and_cleared() {
        let mut app = app(GameKind::Math, false);
        app.round.present(Question::arithmetic(1, &[6, 7]).unwrap());

        type_answer(&mut app, "42");
        assert_eq!(app.round().session().score(), 1);
        assert_eq!(app.answer(), "");
    }

    #[test]
    fn blank_submissions_keep_the_buffer() {
        let mut app = app(GameKind::Letters, false);
        app.handle(QuizInput::Char(' '));
        app.handle(QuizInput::Submit);
        assert_eq!(app.answer(), " ");
        assert_eq!(app.round().session().hearts(), 3);
    }

    #[test]
    fn game_over_submits_the_score_once() {
        let mut app = app(GameKind::Letters, false);
        for _ in 0..3 {
            type_answer(&mut app, "no");
        }
        assert_eq!(app.mode(), InputMode::GameOver);
        assert_eq!(app.notice(), Some("New high score! You are #1"));
        assert_eq!(app.standings().len(), 1);

        app.poll_timer(Instant::now());
        assert_eq!(app.leaderboard().entries().len(), 1);
    }

    #[test]
    fn repeat_score_without_improvement_is_not_announced() {
        let mut app = app(GameKind::Letters, false);
        for _ in 0..3 {
            type_answer(&mut app, "no");
        }
        assert_eq!(app.notice(), Some("New high score! You are #1"));

        app.handle(QuizInput::Restart);
        for _ in 0..3 {
            type_answer(&mut app, "no");
        }
        assert_eq!(app.mode(), InputMode::GameOver);
        assert_eq!(app.notice(), Some("Your best is still 0"));
        assert_eq!(app.leaderboard().entries().len(), 1);
    }

    #[test]
    fn restart_clears_the_panel() {
        let mut app = app(GameKind::Vocabulary, false);
        for _ in 0..3 {
            type_answer(&mut app, "zzz");
            app.handle(QuizInput::Continue);
        }
        assert_eq!(app.mode(), InputMode::GameOver);

        app.handle(QuizInput::Restart);
        assert_eq!(app.mode(), InputMode::Answering);
        assert!(app.notice().is_none());
        assert!(app.standings().is_empty());
        assert_eq!(app.round().session().hearts(), 3);
    }

    #[test]
    fn quitting_mid_game_is_not_scored() {
        let mut app = app(GameKind::Math, true);
        assert_eq!(app.handle(QuizInput::Quit), Flow::Quit);
        assert!(app.round().is_over());
        assert!(!app.round().timer_armed());
        assert!(app.leaderboard().entries().is_empty());
    }

    #[test]
    fn time_up_is_scored() {
        let round = RoundController::with_max_time(GameKind::Math, "Noa", true, 2, 3);
        let mut app = QuizApp::new(round, Leaderboard::new(MemoryStore::new()));
        app.start();

        let t0 = Instant::now();
        app.poll_timer(t0);
        app.poll_timer(t0 + Duration::from_secs(5));
        assert_eq!(app.round().end_reason(), Some(EndReason::TimeUp));
        assert_eq!(app.leaderboard().entries().len(), 1);
    }
}
