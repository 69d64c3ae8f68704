//! Fixed word pools for the spelling and translation games.

/// A spelling word and the icon shown in place of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyItem {
    pub word: &'static str,
    pub icon: &'static str,
}

/// An English word, its Hebrew translation and its difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationItem {
    pub english: &'static str,
    pub hebrew: &'static str,
    pub level: u32,
}

const fn vocab(word: &'static str, icon: &'static str) -> VocabularyItem {
    VocabularyItem { word, icon }
}

const fn pair(english: &'static str, hebrew: &'static str, level: u32) -> TranslationItem {
    TranslationItem {
        english,
        hebrew,
        level,
    }
}

pub const VOCABULARY: &[VocabularyItem] = &[
    vocab("apple", "apple-alt"),
    vocab("banana", "carrot"),
    vocab("cat", "cat"),
    vocab("dog", "dog"),
    vocab("elephant", "otter"),
    vocab("fish", "fish"),
    vocab("giraffe", "paw"),
    vocab("house", "house"),
    vocab("ice cream", "ice-cream"),
    vocab("juice", "glass-water"),
    vocab("king", "chess-king"),
    vocab("lion", "cat"),
    vocab("monkey", "paw"),
    vocab("nest", "feather"),
    vocab("orange", "lemon"),
    vocab("pencil", "pencil"),
    vocab("queen", "chess-queen"),
    vocab("rabbit", "paw"),
    vocab("snake", "worm"),
    vocab("tiger", "cat"),
];

pub const TRANSLATIONS: &[TranslationItem] = &[
    // Level 1
    pair("hello", "שלום", 1),
    pair("bye", "להתראות", 1),
    pair("yes", "כן", 1),
    pair("no", "לא", 1),
    pair("please", "בבקשה", 1),
    pair("thank you", "תודה", 1),
    pair("water", "מים", 1),
    pair("bread", "לחם", 1),
    pair("house", "בית", 1),
    pair("good", "טוב", 1),
    // Level 2
    pair("book", "ספר", 2),
    pair("table", "שולחן", 2),
    pair("chair", "כיסא", 2),
    pair("door", "דלת", 2),
    pair("window", "חלון", 2),
    pair("car", "מכונית", 2),
    pair("food", "אוכל", 2),
    pair("day", "יום", 2),
    pair("night", "לילה", 2),
    pair("friend", "חבר", 2),
    // Level 3
    pair("computer", "מחשב", 3),
    pair("telephone", "טלפון", 3),
    pair("television", "טלוויזיה", 3),
    pair("newspaper", "עיתון", 3),
    pair("restaurant", "מסעדה", 3),
    pair("hospital", "בית חולים", 3),
    pair("university", "אוניברסיטה", 3),
    pair("library", "ספרייה", 3),
    pair("shopping", "קניות", 3),
    pair("weather", "מזג אוויר", 3),
];

/// Translation pairs of one level, in pool order.
pub fn translations_for_level(level: u32) -> impl Iterator<Item = &'static TranslationItem> {
    TRANSLATIONS.iter().filter(move |item| item.level == level)
}
