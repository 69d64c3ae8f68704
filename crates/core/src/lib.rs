//! Core quiz logic - pure, deterministic, and testable
//!
//! This crate contains the question generators, the session state machine and
//! the round lifecycle. It has **no dependencies** on terminal, storage, or
//! logging, which makes it:
//!
//! - **Deterministic**: the same seed asks the same questions in the same order
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: any front-end can drive it through [`RoundController`]
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG used for every random draw
//! - [`letters`]: alphabet neighbours with wraparound
//! - [`pools`]: fixed spelling and translation word lists
//! - [`question`]: the `Question` sum type and answer judging
//! - [`deck`]: translation levels and the no-repeat used set
//! - [`generator`]: one generator per game kind
//! - [`session`]: `SessionState` and its transitions
//! - [`ticker`]: wall-clock to one-second tick scheduling
//! - [`round`]: `RoundController`, the per-question state machine
//! - [`snapshot`]: read-only view for rendering
//!
//! # Game Rules
//!
//! - **Hearts**: 3 per session; every incorrect answer takes one, the last one
//!   ends the game
//! - **Score**: +1 per correct answer, never decreases
//! - **Countdown**: optional, 20 seconds per question, restarted for each new
//!   question; running out ends the game
//! - **Advancing**: spelling pauses on a wrong answer to show the word, the
//!   other games move on immediately
//! - **Levels**: translation climbs one level every 10 points, up to level 3,
//!   without repeating a word inside a level
//!
//! # Example
//!
//! ```
//! use kids_quiz_core::{Question, RoundController, SubmitOutcome};
//! use kids_quiz_types::GameKind;
//!
//! let mut round = RoundController::new(GameKind::Math, "Noa", true, 12345);
//! round.start();
//!
//! round.present(Question::arithmetic(1, &[7, 9]).unwrap());
//! let SubmitOutcome::Judged(judgement) = round.submit("63") else {
//!     panic!("answer should be judged");
//! };
//! assert!(judgement.correct);
//! assert_eq!(round.session().score(), 1);
//! ```

pub mod deck;
pub mod generator;
pub mod letters;
pub mod pools;
pub mod question;
pub mod rng;
pub mod round;
pub mod session;
pub mod snapshot;
pub mod ticker;

pub use kids_quiz_types as types;

// Re-export commonly used types for convenience
pub use deck::{level_for_score, TranslationDeck};
pub use generator::QuestionGenerator;
pub use letters::{letter_after, letter_before};
pub use question::{Auxiliary, ExpectedAnswer, Question};
pub use rng::SimpleRng;
pub use round::{EndReason, Judgement, RoundController, RoundPhase, SubmitOutcome, TickEvent};
pub use session::{SessionState, TimerTick};
pub use snapshot::SessionSnapshot;
pub use ticker::Ticker;
