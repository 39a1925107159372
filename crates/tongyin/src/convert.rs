//! Substitutes Chinese characters with randomly chosen homophones.

use crate::{dictionary::HomophoneIndex, is_chinese, pick::Picker};
use std::collections::{hash_map::Entry, HashMap};

/// The result of converting a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub text: String,
    /// The characters that were replaced and their replacements,
    /// in the order the characters first appear in the input.
    pub replacements: Vec<(char, String)>,
}

/// Replaces every Chinese character in the text that has at least one other homophone
/// with one picked among them. Each occurrence of the same character gets the same replacement.
/// Anything else in the text is left as is.
pub fn convert_text(index: &HomophoneIndex, text: &str, picker: impl Picker) -> String {
    convert_text_detailed(index, text, picker).text
}

/// Like `convert_text`, but also reports which characters were replaced.
pub fn convert_text_detailed(
    index: &HomophoneIndex,
    text: &str,
    mut picker: impl Picker,
) -> Conversion {
    // pick a replacement for each distinct character in the order of first appearance
    let mut substitutions = HashMap::<char, Option<&str>>::new();
    let mut replacements = Vec::new();
    for c in text.chars().filter(|c| is_chinese(*c)) {
        if let Entry::Vacant(entry) = substitutions.entry(c) {
            let replacement = pick_replacement(index, c, &mut picker);
            if let Some(replacement) = replacement {
                tracing::trace!("{c} -> {replacement}");
                replacements.push((c, replacement.to_string()));
            }
            entry.insert(replacement);
        }
    }

    if replacements.is_empty() {
        return Conversion {
            text: text.to_string(),
            replacements,
        };
    }

    // a single pass so that replacements are never replaced again
    let mut converted = String::with_capacity(text.len());
    for c in text.chars() {
        match substitutions.get(&c).copied().flatten() {
            Some(replacement) => converted.push_str(replacement),
            None => converted.push(c),
        }
    }
    Conversion {
        text: converted,
        replacements,
    }
}

// None if the character has no homophones other than itself
fn pick_replacement<'i>(
    index: &'i HomophoneIndex,
    c: char,
    picker: &mut impl Picker,
) -> Option<&'i str> {
    let mut buf = [0; 4];
    let c = &*c.encode_utf8(&mut buf);
    let candidates = index
        .class_for_str(c)
        .iter()
        .map(String::as_str)
        .filter(|m| *m != c)
        .collect::<Vec<_>>();
    if candidates.is_empty() {
        None
    } else {
        Some(picker.pick(&candidates))
    }
}
