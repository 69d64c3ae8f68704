//! Bounded line editor for typed answers.

use arrayvec::ArrayString;

/// Longest answer, in bytes. Every pool word fits with room to spare.
pub const ANSWER_CAPACITY: usize = 32;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerBuffer {
    text: ArrayString<ANSWER_CAPACITY>,
}

impl AnswerBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. Returns false (and drops it) when full.
    pub fn push(&mut self, c: char) -> bool {
        self.text.try_push(c).is_ok()
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True if there is nothing worth submitting.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Take the text out, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        let out = self.text.to_string();
        self.text.clear();
        out
    }
}
