use serde::{Deserialize, Serialize};

const TEXT_DATA_VERSION: i32 = 1;

/// A title and a note attached to a photo.
///
/// Title and note are persisted as a pair: the archived form contains either both
/// or neither, so a record with only one of them set is written as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTextData", into = "RawTextData")]
pub struct TextData {
    pub title: Option<String>,
    pub note: Option<String>,
}

impl TextData {
    pub fn new(title: Option<String>, note: Option<String>) -> Self {
        Self { title, note }
    }
}

/// 磁盘上的 TextData 形式。
#[derive(Serialize, Deserialize)]
struct RawTextData {
    #[serde(rename = "Version", default)]
    version: i32,
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "Note", default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl From<TextData> for RawTextData {
    fn from(value: TextData) -> Self {
        match (value.title, value.note) {
            (Some(title), Some(note)) => RawTextData {
                version: TEXT_DATA_VERSION,
                title: Some(title),
                note: Some(note),
            },
            _ => RawTextData {
                version: TEXT_DATA_VERSION,
                title: None,
                note: None,
            },
        }
    }
}

impl From<RawTextData> for TextData {
    fn from(raw: RawTextData) -> Self {
        match (raw.title, raw.note) {
            (Some(title), Some(note)) => TextData::new(Some(title), Some(note)),
            _ => TextData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_complete_pair() {
        let text = TextData::new(Some("Beach".to_string()), Some("Sunset at six".to_string()));
        let value = serde_json::to_value(&text).unwrap();
        assert_eq!(value, json!({"Version": 1, "Title": "Beach", "Note": "Sunset at six"}));
    }

    #[test]
    fn test_serialize_half_pair_writes_neither() {
        let text = TextData::new(Some("Beach".to_string()), None);
        let value = serde_json::to_value(&text).unwrap();
        assert_eq!(value, json!({"Version": 1}));
    }

    #[test]
    fn test_deserialize_half_pair_is_empty() {
        let text: TextData = serde_json::from_value(json!({"Version": 1, "Note": "orphan"})).unwrap();
        assert_eq!(text, TextData::default());
    }

    #[test]
    fn test_deserialize_without_version() {
        let text: TextData = serde_json::from_value(json!({"Title": "a", "Note": "b"})).unwrap();
        assert_eq!(text.title.as_deref(), Some("a"));
        assert_eq!(text.note.as_deref(), Some("b"));
    }
}
