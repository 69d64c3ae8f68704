//! Leaderboard - top-10 high scores per game
//!
//! The leaderboard lives in a single key-value slot (`gameLeaderboard`) as a
//! JSON array of [`LeaderboardEntry`] records, next to the setup slots
//! `playerName` and `timerEnabled`. The storage engine is a collaborator
//! behind [`KeyValueStore`].
//!
//! Admission policy (see [`gate`]):
//!
//! - at most one entry per player per game, their best score
//! - sorted by points, highest first, earlier submissions winning ties
//! - at most 10 entries per game
//!
//! Malformed stored data never fails a caller; it reads as an empty list.

pub mod board;
pub mod entry;
pub mod gate;
pub mod settings;
pub mod store;

pub use kids_quiz_types as types;

pub use board::{Admission, Leaderboard};
pub use entry::LeaderboardEntry;
pub use gate::{admit, qualifies, standings};
pub use settings::{save_player_name, save_timer_enabled, SettingsError, Setup};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
