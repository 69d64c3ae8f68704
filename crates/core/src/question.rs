//! Question module - one immutable question per round
//!
//! Each game kind has its own variant carrying exactly the data it needs.
//! The expected answer is derived from that data, so it can never drift from
//! what the player was shown.

use std::fmt;

use arrayvec::ArrayVec;

use crate::letters::neighbour;
use crate::types::{Direction, GameKind};

/// Operands of a multiplication question (two or three factors).
pub type Operands = ArrayVec<u32, 3>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Arithmetic {
        id: u64,
        operands: Operands,
    },
    LetterAdjacency {
        id: u64,
        letter: char,
        direction: Direction,
    },
    VocabularyWord {
        id: u64,
        word: &'static str,
        icon: &'static str,
    },
    TranslationWord {
        id: u64,
        english: &'static str,
        hebrew: &'static str,
        level: u32,
        /// Position within its level's pool.
        slot: usize,
    },
}

/// Side data shown next to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auxiliary {
    Direction(Direction),
    Icon(&'static str),
    Level(u32),
}

/// The answer a question expects, with its comparison rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedAnswer {
    /// Numeric equality.
    Number(u64),
    /// Case-insensitive, single letter.
    Letter(char),
    /// Case-insensitive word.
    Word(&'static str),
    /// Exact match; the target script has no case.
    Exact(&'static str),
}

impl ExpectedAnswer {
    /// Judge a submitted answer.
    ///
    /// Surrounding whitespace is ignored except for [`ExpectedAnswer::Exact`].
    pub fn accepts(&self, answer: &str) -> bool {
        match *self {
            ExpectedAnswer::Number(n) => answer.trim().parse::<u64>().is_ok_and(|v| v == n),
            ExpectedAnswer::Letter(c) => {
                let mut chars = answer.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(got), None) => got.eq_ignore_ascii_case(&c),
                    _ => false,
                }
            }
            ExpectedAnswer::Word(w) => answer.trim().to_lowercase() == w.to_lowercase(),
            ExpectedAnswer::Exact(s) => answer == s,
        }
    }
}

impl fmt::Display for ExpectedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedAnswer::Number(n) => write!(f, "{n}"),
            ExpectedAnswer::Letter(c) => write!(f, "{c}"),
            ExpectedAnswer::Word(w) | ExpectedAnswer::Exact(w) => f.write_str(w),
        }
    }
}

impl Question {
    /// Build a multiplication question from two or three operands.
    ///
    /// ```
    /// use kids_quiz_core::question::{ExpectedAnswer, Question};
    ///
    /// let q = Question::arithmetic(1, &[7, 9]).unwrap();
    /// assert_eq!(q.prompt(), "7 × 9");
    /// assert_eq!(q.expected_answer(), ExpectedAnswer::Number(63));
    /// assert!(Question::arithmetic(2, &[7]).is_none());
    /// ```
    pub fn arithmetic(id: u64, factors: &[u32]) -> Option<Self> {
        if !(2..=3).contains(&factors.len()) {
            return None;
        }
        let operands: Operands = factors.iter().copied().collect();
        Some(Question::Arithmetic { id, operands })
    }

    pub fn id(&self) -> u64 {
        match *self {
            Question::Arithmetic { id, .. }
            | Question::LetterAdjacency { id, .. }
            | Question::VocabularyWord { id, .. }
            | Question::TranslationWord { id, .. } => id,
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Question::Arithmetic { .. } => GameKind::Math,
            Question::LetterAdjacency { .. } => GameKind::Letters,
            Question::VocabularyWord { .. } => GameKind::Vocabulary,
            Question::TranslationWord { .. } => GameKind::Translation,
        }
    }

    /// Display content: the expression, the letter, or the source word.
    pub fn prompt(&self) -> String {
        match self {
            Question::Arithmetic { operands, .. } => {
                let mut out = String::new();
                for (i, n) in operands.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" × ");
                    }
                    out.push_str(&n.to_string());
                }
                out
            }
            Question::LetterAdjacency { letter, .. } => letter.to_string(),
            Question::VocabularyWord { word, .. } => (*word).to_string(),
            Question::TranslationWord { english, .. } => (*english).to_string(),
        }
    }

    pub fn auxiliary(&self) -> Option<Auxiliary> {
        match *self {
            Question::Arithmetic { .. } => None,
            Question::LetterAdjacency { direction, .. } => Some(Auxiliary::Direction(direction)),
            Question::VocabularyWord { icon, .. } => Some(Auxiliary::Icon(icon)),
            Question::TranslationWord { level, .. } => Some(Auxiliary::Level(level)),
        }
    }

    pub fn expected_answer(&self) -> ExpectedAnswer {
        match self {
            Question::Arithmetic { operands, .. } => {
                ExpectedAnswer::Number(operands.iter().map(|&n| n as u64).product())
            }
            Question::LetterAdjacency {
                letter, direction, ..
            } => {
                // Generators only draw ASCII letters; a hand-built question with
                // anything else expects the character itself.
                ExpectedAnswer::Letter(neighbour(*letter, *direction).unwrap_or(*letter))
            }
            Question::VocabularyWord { word, .. } => ExpectedAnswer::Word(word),
            Question::TranslationWord { hebrew, .. } => ExpectedAnswer::Exact(hebrew),
        }
    }

    /// Whether `answer` is correct for this question.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.expected_answer().accepts(answer)
    }
}
