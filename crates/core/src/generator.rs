//! Question generators, one per game kind.
//!
//! Generators read only fixed pools and ranges. The translation generator is
//! the exception: it draws from a [`TranslationDeck`] owned by the session.

use crate::deck::TranslationDeck;
use crate::letters::ALPHABET;
use crate::pools::VOCABULARY;
use crate::question::{Operands, Question};
use crate::rng::SimpleRng;
use crate::types::{Direction, GameKind, ARITHMETIC_MAX_OPERAND, THIRD_OPERAND_PERCENT};

#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    rng: SimpleRng,
    next_id: u64,
}

impl QuestionGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 1,
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Next question for `kind`.
    ///
    /// Translation questions need the session's deck. Returns `None` when a
    /// translation question is asked for without a deck, or the deck has
    /// nothing to draw from.
    pub fn next_question(
        &mut self,
        kind: GameKind,
        deck: Option<&mut TranslationDeck>,
    ) -> Option<Question> {
        match kind {
            GameKind::Math => Some(self.arithmetic()),
            GameKind::Letters => Some(self.letter()),
            GameKind::Vocabulary => Some(self.vocabulary()),
            GameKind::Translation => self.translation(deck?),
        }
    }

    /// Two factors from `0..=12`, with a 30% chance of a third.
    pub fn arithmetic(&mut self) -> Question {
        let mut operands = Operands::new();
        operands.push(self.rng.next_inclusive(0, ARITHMETIC_MAX_OPERAND));
        operands.push(self.rng.next_inclusive(0, ARITHMETIC_MAX_OPERAND));
        if self.rng.chance(THIRD_OPERAND_PERCENT) {
            operands.push(self.rng.next_inclusive(0, ARITHMETIC_MAX_OPERAND));
        }

        Question::Arithmetic {
            id: self.take_id(),
            operands,
        }
    }

    /// One of the 52 letters (case is part of the draw) and a direction.
    pub fn letter(&mut self) -> Question {
        let letter = ALPHABET[self.rng.index(ALPHABET.len())];
        let direction = if self.rng.chance(50) {
            Direction::Before
        } else {
            Direction::After
        };

        Question::LetterAdjacency {
            id: self.take_id(),
            letter,
            direction,
        }
    }

    pub fn vocabulary(&mut self) -> Question {
        let item = VOCABULARY[self.rng.index(VOCABULARY.len())];
        Question::VocabularyWord {
            id: self.take_id(),
            word: item.word,
            icon: item.icon,
        }
    }

    pub fn translation(&mut self, deck: &mut TranslationDeck) -> Option<Question> {
        let draw = deck.draw(&mut self.rng)?;
        Some(Question::TranslationWord {
            id: self.take_id(),
            english: draw.item.english,
            hebrew: draw.item.hebrew,
            level: draw.item.level,
            slot: draw.slot,
        })
    }
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::ExpectedAnswer;
    use crate::types::MAX_TRANSLATION_LEVEL;

    #[test]
    fn arithmetic_operands_are_in_range_and_product_matches() {
        let mut gen = QuestionGenerator::new(11);
        let mut saw_three = false;
        let mut saw_two = false;

        for _ in 0..500 {
            let q = gen.arithmetic();
            let Question::Arithmetic { ref operands, .. } = q else {
                panic!("expected arithmetic question");
            };
            assert!(operands.iter().all(|&n| n <= ARITHMETIC_MAX_OPERAND));
            match operands.len() {
                2 => saw_two = true,
                3 => saw_three = true,
                n => panic!("unexpected operand count {n}"),
            }
            let product: u64 = operands.iter().map(|&n| n as u64).product();
            assert_eq!(q.expected_answer(), ExpectedAnswer::Number(product));
        }

        assert!(saw_two && saw_three);
    }

    #[test]
    fn letters_cover_both_cases_and_directions() {
        let mut gen = QuestionGenerator::new(17);
        let (mut upper, mut lower, mut before, mut after) = (false, false, false, false);

        for _ in 0..400 {
            let Question::LetterAdjacency {
                letter, direction, ..
            } = gen.letter()
            else {
                panic!("expected letter question");
            };
            upper |= letter.is_ascii_uppercase();
            lower |= letter.is_ascii_lowercase();
            before |= direction == Direction::Before;
            after |= direction == Direction::After;
        }

        assert!(upper && lower && before && after);
    }

    #[test]
    fn vocabulary_words_come_from_the_pool() {
        let mut gen = QuestionGenerator::new(23);
        for _ in 0..50 {
            let q = gen.vocabulary();
            let Question::VocabularyWord { word, icon, .. } = q else {
                panic!("expected vocabulary question");
            };
            assert!(VOCABULARY.iter().any(|i| i.word == word && i.icon == icon));
        }
    }

    #[test]
    fn translation_draws_from_the_deck_level() {
        let mut gen = QuestionGenerator::new(31);
        let mut deck = TranslationDeck::new();
        deck.sync_level(20);

        let q = gen.translation(&mut deck).unwrap();
        let Question::TranslationWord { level, .. } = q else {
            panic!("expected translation question");
        };
        assert_eq!(level, MAX_TRANSLATION_LEVEL);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut gen = QuestionGenerator::new(1);
        let mut deck = TranslationDeck::new();
        let mut last = 0;
        for kind in GameKind::ALL.iter().cycle().take(40) {
            let q = gen.next_question(*kind, Some(&mut deck)).unwrap();
            assert_eq!(q.kind(), *kind);
            assert!(q.id() > last);
            last = q.id();
        }
    }

    #[test]
    fn translation_without_a_deck_yields_nothing() {
        let mut gen = QuestionGenerator::new(1);
        assert!(gen.next_question(GameKind::Translation, None).is_none());
        assert!(gen.next_question(GameKind::Math, None).is_some());
    }

    #[test]
    fn same_seed_same_questions() {
        let mut a = QuestionGenerator::new(777);
        let mut b = QuestionGenerator::new(777);
        for _ in 0..20 {
            assert_eq!(a.arithmetic(), b.arithmetic());
            assert_eq!(a.letter(), b.letter());
        }
    }
}
