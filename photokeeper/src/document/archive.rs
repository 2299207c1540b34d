//! Keyed, versioned encoding of a single record.
//!
//! An archive is a JSON object with two keys: `Version`, the envelope version, and
//! `Data`, the archived record. Decoding separates two kinds of failure. Bytes that
//! are not an archive at all are an error. An archive whose `Data` is missing or of
//! another type decodes to `None`, which callers replace with an empty default.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use crate::common::constants::{CURRENT_ARCHIVE_VERSION, DATA_KEY, VERSION_KEY};

/// Defines errors that can occur while encoding or decoding an archive.
//
// // 定义在编码或解码归档时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The bytes are not a well-formed archive.
    //
    // // 字节不是格式正确的归档。
    #[error("Malformed archive: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The archive is well-formed JSON but not an object.
    //
    // // 归档是合法 JSON，但不是对象。
    #[error("Malformed archive: expected an object at the top level")]
    NotAnObject,

    /// The archive was written by a newer version of the format.
    //
    // // 归档由更新版本的格式写入。
    #[error("Unsupported archive version: found {found}, but this library supports version {supported}.")]
    UnsupportedVersion { supported: u32, found: u64 },

    /// The record could not be encoded.
    //
    // // 无法编码该记录。
    #[error("Failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Archives `record` under the data key.
pub fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, ArchiveError> {
    let data = serde_json::to_value(record).map_err(ArchiveError::Encode)?;

    let mut envelope = Map::new();
    envelope.insert(VERSION_KEY.to_string(), Value::from(CURRENT_ARCHIVE_VERSION));
    envelope.insert(DATA_KEY.to_string(), data);

    serde_json::to_vec(&Value::Object(envelope)).map_err(ArchiveError::Encode)
}

/// Decodes the record stored under the data key.
///
/// Returns `Ok(None)` when the key is absent or holds a value that is not a `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, ArchiveError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Object(mut envelope) = value else {
        return Err(ArchiveError::NotAnObject);
    };

    // 没有版本号的归档按当前版本处理
    if let Some(found) = envelope.get(VERSION_KEY).and_then(Value::as_u64) {
        if found > u64::from(CURRENT_ARCHIVE_VERSION) {
            return Err(ArchiveError::UnsupportedVersion {
                supported: CURRENT_ARCHIVE_VERSION,
                found,
            });
        }
    }

    let Some(data) = envelope.remove(DATA_KEY) else {
        return Ok(None);
    };
    Ok(serde_json::from_value(data).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_envelope_layout() {
        let bytes = encode(&Sample { name: "x".into() }).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({"Version": 1, "Data": {"name": "x"}}));
    }

    #[test]
    fn test_decode_encoded_record() {
        let bytes = encode(&Sample { name: "x".into() }).unwrap();
        let decoded: Option<Sample> = decode(&bytes).unwrap();
        assert_eq!(decoded, Some(Sample { name: "x".into() }));
    }

    #[test]
    fn test_missing_data_key_is_none() {
        let decoded: Option<Sample> = decode(br#"{"Version": 1}"#).unwrap();
        assert_eq!(decoded, None);
    }

    #[test]
    fn test_wrong_type_is_none() {
        let decoded: Option<Sample> = decode(br#"{"Version": 1, "Data": [1, 2, 3]}"#).unwrap();
        assert_eq!(decoded, None);
    }

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let result: Result<Option<Sample>, _> = decode(&[0xde, 0xad, 0xbe, 0xef]);
        assert!(matches!(result, Err(ArchiveError::Malformed(_))));
    }

    #[test]
    fn test_top_level_array_is_malformed() {
        let result: Result<Option<Sample>, _> = decode(b"[]");
        assert!(matches!(result, Err(ArchiveError::NotAnObject)));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let result: Result<Option<Sample>, _> =
            decode(br#"{"Version": 7, "Data": {"name": "x"}}"#);
        assert!(matches!(
            result,
            Err(ArchiveError::UnsupportedVersion { supported: 1, found: 7 })
        ));
    }
}
