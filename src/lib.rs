//! Kids Quiz (workspace facade crate).
//!
//! Re-exports the member crates as `kids_quiz::{core,input,leaderboard,term,types}`
//! and hosts the pieces of the terminal binary that are worth testing on their
//! own: configuration and the per-screen app state.

pub mod app;
pub mod config;

pub use kids_quiz_core as core;
pub use kids_quiz_input as input;
pub use kids_quiz_leaderboard as leaderboard;
pub use kids_quiz_term as term;
pub use kids_quiz_types as types;
