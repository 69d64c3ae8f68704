//! Alphabet neighbours with wraparound.
//!
//! Upper and lower case are separate 26-letter rings: the letter before `A`
//! is `Z`, the letter after `z` is `a`. No letter is special-cased.

use crate::types::Direction;

/// The 52 letters a letter question can be built from, upper case first.
pub const ALPHABET: [char; 52] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Letter preceding `c` in its ring, or `None` if `c` is not an ASCII letter.
pub fn letter_before(c: char) -> Option<char> {
    neighbour(c, Direction::Before)
}

/// Letter following `c` in its ring, or `None` if `c` is not an ASCII letter.
pub fn letter_after(c: char) -> Option<char> {
    neighbour(c, Direction::After)
}

pub fn neighbour(c: char, direction: Direction) -> Option<char> {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return None;
    };

    let offset = c as u8 - base;
    let shifted = match direction {
        Direction::Before => (offset + 25) % 26,
        Direction::After => (offset + 1) % 26,
    };
    Some((base + shifted) as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_ring_boundaries() {
        assert_eq!(letter_before('A'), Some('Z'));
        assert_eq!(letter_before('a'), Some('z'));
        assert_eq!(letter_after('Z'), Some('A'));
        assert_eq!(letter_after('z'), Some('a'));
    }

    #[test]
    fn interior_letters_are_adjacent_code_points() {
        for &c in ALPHABET.iter() {
            if !matches!(c, 'A' | 'a') {
                assert_eq!(letter_before(c), char::from_u32(c as u32 - 1));
            }
            if !matches!(c, 'Z' | 'z') {
                assert_eq!(letter_after(c), char::from_u32(c as u32 + 1));
            }
        }
    }

    #[test]
    fn h_follows_the_general_rule() {
        assert_eq!(letter_after('H'), Some('I'));
        assert_eq!(letter_before('H'), Some('G'));
        assert_eq!(letter_after('h'), Some('i'));
        assert_eq!(letter_before('h'), Some('g'));
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(letter_after('m'), Some('n'));
        assert_eq!(letter_after('M'), Some('N'));
    }

    #[test]
    fn non_letters_have_no_neighbour() {
        assert_eq!(letter_before('1'), None);
        assert_eq!(letter_after(' '), None);
        assert_eq!(letter_after('é'), None);
    }

    #[test]
    fn alphabet_has_every_letter_once() {
        let mut sorted = ALPHABET;
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        assert!(ALPHABET.iter().all(|c| c.is_ascii_alphabetic()));
    }
}
