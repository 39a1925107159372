//! Provides all of tongyin's core functionality.

pub mod convert;
pub mod dictionary;
pub mod error;
pub mod pick;
pub mod service;
pub mod source;

pub use convert::{convert_text, convert_text_detailed, Conversion};
pub use dictionary::{DictionaryStats, HomophoneClass, HomophoneIndex};
pub use error::{DictionaryError, DictionaryResult, UnavailableReason};
pub use pick::{Picker, RandomPicker};
pub use service::Dictionary;
pub use source::{DictionarySource, FileSource, HttpSource, StaticSource};

/// Checks whether the character is a Chinese character eligible for substitution.
pub fn is_chinese(c: char) -> bool {
    // the commonly used part of the CJK Unified Ideographs block
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// Checks whether the text contains at least one substitutable character.
pub fn contains_chinese(text: &str) -> bool {
    text.chars().any(is_chinese)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recognises_chinese() {
        assert!(!is_chinese('k'));
        assert!(!is_chinese('え'));
        assert!(!is_chinese('，'));
        assert!(is_chinese('妈'));
        assert!(is_chinese('\u{4E00}'));
        assert!(is_chinese('\u{9FA5}'));
    }

    #[test]
    fn range_is_not_the_full_block() {
        assert!(!is_chinese('\u{9FA6}'));
        assert!(!is_chinese('\u{4DFF}'));
        // CJK Extension B
        assert!(!is_chinese('\u{20000}'));
    }

    #[test]
    fn finds_chinese_in_mixed_text() {
        assert!(contains_chinese("hello 世界"));
        assert!(!contains_chinese("hello world 123"));
        assert!(!contains_chinese(""));
    }
}
