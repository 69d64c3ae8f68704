//! Shared types module - game kinds, directions and tuning constants
//!
//! This module defines the vocabulary every other crate speaks. All types are
//! plain data with no behavior beyond parsing and naming, so they can be used
//! from the core logic, the leaderboard store and the terminal front-end alike.
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_HEARTS` | 3 | Lives at session start |
//! | `DEFAULT_MAX_TIME_SECONDS` | 20 | Countdown per question |
//! | `TICK_MS` | 1000 | Countdown resolution |
//! | `LEADERBOARD_CAPACITY` | 10 | Entries kept per game |
//! | `POINTS_PER_LEVEL` | 10 | Correct answers per translation level |
//! | `MAX_TRANSLATION_LEVEL` | 3 | Highest translation level |
//!
//! # Examples
//!
//! ```
//! use kids_quiz_types::{AdvancePolicy, Direction, GameKind};
//!
//! let kind = GameKind::from_str("english-letters").unwrap();
//! assert_eq!(kind, GameKind::Letters);
//! assert_eq!(kind.display_name(), "English Letters");
//!
//! // Spelling pauses on a wrong answer to show the word.
//! assert_eq!(GameKind::Vocabulary.advance_policy(), AdvancePolicy::RevealThenContinue);
//! assert_eq!(GameKind::Math.advance_policy(), AdvancePolicy::AutoAdvance);
//!
//! assert_eq!(Direction::Before.as_str(), "before");
//! ```

use serde::{Deserialize, Serialize};

/// Hearts (lives) at the start of every session.
pub const MAX_HEARTS: u8 = 3;

/// Default countdown per question, in seconds.
pub const DEFAULT_MAX_TIME_SECONDS: u32 = 20;

/// Upper bound accepted for a configured countdown.
pub const MAX_TIME_CEILING_SECONDS: u32 = 300;

/// Countdown tick interval in milliseconds (one second).
pub const TICK_MS: u32 = 1000;

/// Number of entries retained per game on the leaderboard.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Correct answers needed to climb one translation level.
pub const POINTS_PER_LEVEL: u32 = 10;

/// Highest translation level.
pub const MAX_TRANSLATION_LEVEL: u32 = 3;

/// Largest operand drawn for multiplication questions (inclusive).
pub const ARITHMETIC_MAX_OPERAND: u32 = 12;

/// Chance, in percent, that a multiplication question gets a third operand.
pub const THIRD_OPERAND_PERCENT: u32 = 30;

/// The four mini-games.
///
/// The serialized names are the ones stored in the persisted leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    #[serde(rename = "math")]
    Math,
    #[serde(rename = "english-letters")]
    Letters,
    #[serde(rename = "english-vocabulary")]
    Vocabulary,
    #[serde(rename = "english-translation")]
    Translation,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Math,
        GameKind::Letters,
        GameKind::Vocabulary,
        GameKind::Translation,
    ];

    /// Parse a game kind from its stored name or a short alias.
    ///
    /// ```
    /// use kids_quiz_types::GameKind;
    ///
    /// assert_eq!(GameKind::from_str("math"), Some(GameKind::Math));
    /// assert_eq!(GameKind::from_str("Translation"), Some(GameKind::Translation));
    /// assert_eq!(GameKind::from_str("chess"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "math" | "multiplication" => Some(GameKind::Math),
            "english-letters" | "letters" => Some(GameKind::Letters),
            "english-vocabulary" | "vocabulary" | "spelling" => Some(GameKind::Vocabulary),
            "english-translation" | "translation" => Some(GameKind::Translation),
            _ => None,
        }
    }

    /// Stored name, as used in the leaderboard `game` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Math => "math",
            GameKind::Letters => "english-letters",
            GameKind::Vocabulary => "english-vocabulary",
            GameKind::Translation => "english-translation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameKind::Math => "Mathematics",
            GameKind::Letters => "English Letters",
            GameKind::Vocabulary => "English Vocabulary",
            GameKind::Translation => "English Translation",
        }
    }

    /// How a round moves on after an incorrect answer.
    pub fn advance_policy(&self) -> AdvancePolicy {
        match self {
            GameKind::Vocabulary => AdvancePolicy::RevealThenContinue,
            GameKind::Math | GameKind::Letters | GameKind::Translation => {
                AdvancePolicy::AutoAdvance
            }
        }
    }

    /// Whether this game tracks a difficulty level.
    pub fn is_leveled(&self) -> bool {
        matches!(self, GameKind::Translation)
    }
}

/// Which neighbour of a letter the player is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Before,
    After,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Before => "before",
            Direction::After => "after",
        }
    }
}

/// What happens after an incorrect answer.
///
/// - `AutoAdvance`: the next question is installed immediately.
/// - `RevealThenContinue`: the expected answer stays on screen until the
///   player explicitly continues.
///
/// Correct answers always advance immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvancePolicy {
    AutoAdvance,
    RevealThenContinue,
}
