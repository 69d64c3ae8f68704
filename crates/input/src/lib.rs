//! Terminal input module.
//!
//! This module is independent of any UI framework beyond `crossterm` events.
//! It maps key events into [`QuizInput`] values for the current
//! [`InputMode`] and keeps the answer being typed in a bounded
//! [`AnswerBuffer`].

pub mod answer;
pub mod map;

pub use kids_quiz_types as types;

pub use answer::AnswerBuffer;
pub use map::{handle_key_event, should_quit, InputMode, QuizInput};
