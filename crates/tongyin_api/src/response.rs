//! Types for responses from the backend to the frontend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryStats {
    pub pinyin_count: usize,
    pub char_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Converted {
    pub text: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stats_use_frontend_field_names() {
        let stats = DictionaryStats {
            pinyin_count: 2,
            char_count: 6,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json, serde_json::json!({ "pinyinCount": 2, "charCount": 6 }));
    }
}
