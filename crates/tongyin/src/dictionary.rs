//! Models and parses the homophone dictionary.
//!
//! The dictionary is a UTF-8 text file formatted as one homophone class per line:
//! `{pinyin}\t{character_1}\t{character_2}...`

use std::collections::{hash_map::Entry, HashMap};

/// Characters that share one pinyin reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomophoneClass {
    pub pinyin: String,
    /// In the order they appear in the dictionary, duplicates included.
    pub members: Vec<String>,
}

/// Counts describing a loaded dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DictionaryStats {
    /// The number of distinct pinyin keys.
    pub class_count: usize,
    /// The sum of the member counts of every class.
    pub total_char_count: usize,
}

/// A parsed homophone dictionary with a precomputed character to class mapping.
#[derive(Debug, Clone, Default)]
pub struct HomophoneIndex {
    // in the order the keys were first seen
    classes: Vec<HomophoneClass>,
    pinyin_to_class: HashMap<String, usize>,
    member_to_class: HashMap<String, usize>,
}

impl HomophoneIndex {
    /// Parses the dictionary text. Blank and malformed lines are skipped, so this never fails.
    ///
    /// When a pinyin key appears on several lines, the last line's members replace the
    /// earlier ones while the class keeps the position where the key was first seen.
    pub fn parse(text: &str) -> Self {
        let mut classes: Vec<HomophoneClass> = Vec::new();
        let mut pinyin_to_class = HashMap::<String, usize>::new();

        for (line_idx, line) in text.split('\n').enumerate() {
            let Some((pinyin, members)) = parse_line(line) else {
                if !line.trim().is_empty() {
                    tracing::trace!("Skipping malformed line {}: {line:?}", line_idx + 1);
                }
                continue;
            };
            match pinyin_to_class.entry(pinyin.to_string()) {
                Entry::Occupied(entry) => {
                    tracing::trace!("Replacing the class for duplicate key {pinyin}");
                    classes[*entry.get()].members = members;
                }
                Entry::Vacant(entry) => {
                    entry.insert(classes.len());
                    classes.push(HomophoneClass {
                        pinyin: pinyin.to_string(),
                        members,
                    });
                }
            }
        }

        // built after parsing so that replaced classes don't leave stale entries behind
        let mut member_to_class = HashMap::new();
        for (class_idx, class) in classes.iter().enumerate() {
            for member in &class.members {
                member_to_class.entry(member.clone()).or_insert(class_idx);
            }
        }

        Self {
            classes,
            pinyin_to_class,
            member_to_class,
        }
    }

    /// Returns the members of the class containing the character,
    /// or an empty slice if the dictionary doesn't contain it.
    pub fn class_for(&self, c: char) -> &[String] {
        let mut buf = [0; 4];
        self.class_for_str(c.encode_utf8(&mut buf))
    }

    /// Like `class_for`, for members that are given as strings.
    pub fn class_for_str(&self, member: &str) -> &[String] {
        self.member_to_class
            .get(member)
            .map(|&idx| self.classes[idx].members.as_slice())
            .unwrap_or_default()
    }

    pub fn class(&self, pinyin: &str) -> Option<&HomophoneClass> {
        self.pinyin_to_class
            .get(pinyin)
            .map(|&idx| &self.classes[idx])
    }

    pub fn classes(&self) -> impl Iterator<Item = &HomophoneClass> {
        self.classes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            class_count: self.classes.len(),
            total_char_count: self.classes.iter().map(|c| c.members.len()).sum(),
        }
    }
}

// returns None for blank lines and lines without a key or members
// empty fields are not members, so such lines count fewer characters than they have fields
fn parse_line(line: &str) -> Option<(&str, Vec<String>)> {
    let mut fields = line.trim().split('\t');
    let pinyin = fields.next().filter(|p| !p.is_empty())?;
    let members = fields
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect::<Vec<_>>();
    if members.is_empty() {
        return None;
    }
    Some((pinyin, members))
}

#[cfg(test)]
mod test {
    use super::*;

    const DICTIONARY: &str = "ma\t妈\t麻\t马\nyi\t你\t铱\t伊\nhao\t号\n";

    #[test]
    fn parses_classes() {
        let index = HomophoneIndex::parse(DICTIONARY);
        let ma = index.class("ma").unwrap();
        assert_eq!(ma.pinyin, "ma");
        assert_eq!(ma.members, ["妈", "麻", "马"]);
        assert_eq!(index.class("hao").unwrap().members, ["号"]);
        assert!(index.class("ni").is_none());
    }

    #[test]
    fn counts_stats() {
        let index = HomophoneIndex::parse(DICTIONARY);
        assert_eq!(
            index.stats(),
            DictionaryStats {
                class_count: 3,
                total_char_count: 7,
            }
        );
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let index = HomophoneIndex::parse("\n   \nma\nmi\t\t\n\tfoo\nba\t八\n");
        let pinyin = index.classes().map(|c| c.pinyin.as_str()).collect::<Vec<_>>();
        assert_eq!(pinyin, ["ba"]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let index = HomophoneIndex::parse("ma\t妈\t马\r\nba\t八\t巴\r\n");
        assert_eq!(index.class("ma").unwrap().members, ["妈", "马"]);
        assert_eq!(index.class("ba").unwrap().members, ["八", "巴"]);
    }

    #[test]
    fn keeps_duplicate_members() {
        let index = HomophoneIndex::parse("ma\t妈\t马\t马");
        assert_eq!(index.class("ma").unwrap().members, ["妈", "马", "马"]);
        assert_eq!(index.stats().total_char_count, 3);
    }

    #[test]
    fn later_duplicate_key_wins() {
        let index = HomophoneIndex::parse("ma\t妈\t麻\nba\t八\nma\t马\t码");
        assert_eq!(index.class("ma").unwrap().members, ["马", "码"]);
        assert_eq!(index.stats().class_count, 2);
        // the replaced members no longer belong to any class
        assert!(index.class_for('妈').is_empty());
        assert_eq!(index.class_for('码'), ["马", "码"]);
        // the class keeps its original position
        let pinyin = index.classes().map(|c| c.pinyin.as_str()).collect::<Vec<_>>();
        assert_eq!(pinyin, ["ma", "ba"]);
    }

    #[test]
    fn reverse_lookup() {
        let index = HomophoneIndex::parse(DICTIONARY);
        assert_eq!(index.class_for('麻'), ["妈", "麻", "马"]);
        assert_eq!(index.class_for('伊'), ["你", "铱", "伊"]);
        assert!(index.class_for('好').is_empty());
        assert!(index.class_for('a').is_empty());
    }

    #[test]
    fn heteronym_resolves_to_first_class() {
        let index = HomophoneIndex::parse("hang\t行\t航\nxing\t行\t星");
        assert_eq!(index.class_for('行'), ["行", "航"]);
        assert_eq!(index.class_for('星'), ["行", "星"]);
    }

    #[test]
    fn empty_fields_are_not_members() {
        let index = HomophoneIndex::parse("ma\t妈\t\t马");
        assert_eq!(index.class("ma").unwrap().members, ["妈", "马"]);
        assert_eq!(index.stats().total_char_count, 2);
    }

    #[test]
    fn empty_dictionary() {
        let index = HomophoneIndex::parse("");
        assert!(index.is_empty());
        assert_eq!(index.stats(), DictionaryStats::default());
    }
}
