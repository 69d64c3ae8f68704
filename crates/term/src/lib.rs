//! Terminal "quiz renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget/layout
//! libraries and renders into a simple framebuffer that is flushed to a
//! terminal backend.
//!
//! - [`QuizView`] is pure: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal and only writes changed rows

pub mod fb;
pub mod quiz_view;
pub mod renderer;

pub use kids_quiz_core as core;
pub use kids_quiz_leaderboard as leaderboard;
pub use kids_quiz_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use quiz_view::{GameOverPanel, QuizFrame, QuizView, Viewport};
pub use renderer::{encode_full_into, encode_rows_into, TerminalRenderer};
