//! Opaque cursors and global identifiers.
//!
//! Both are base64 encoded strings. They are stable for the lifetime of a
//! deployment but carry no guarantee beyond that, so nothing should persist
//! them.
pub mod error;
mod global_id;

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

pub use error::*;
pub use global_id::*;

const CURSOR_PREFIX: &str = "arrayconnection:";

/// Encodes a zero-based offset into an opaque cursor.
pub fn encode_cursor(offset: usize) -> String {
    general_purpose::STANDARD_NO_PAD.encode(format!("{CURSOR_PREFIX}{offset}"))
}

/// Decodes a cursor produced by [`encode_cursor`].
///
/// Cursors arrive from untrusted requests so every failure is reported as
/// [`CursorError::Malformed`].
pub fn decode_cursor(cursor: &str) -> Result<usize, CursorError> {
    let malformed = || CursorError::Malformed(cursor.to_string());
    let bytes = general_purpose::STANDARD_NO_PAD
        .decode(cursor.as_bytes())
        .map_err(|_| malformed())?;
    let decoded = String::from_utf8(bytes).map_err(|_| malformed())?;
    let offset = decoded.strip_prefix(CURSOR_PREFIX).ok_or_else(malformed)?;
    // `usize::from_str` accepts a leading '+', which encode_cursor never emits
    if offset.is_empty() || !offset.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    offset.parse().map_err(|_| malformed())
}

/// A position within one specific ordering.
///
/// Comparing cursors taken from different orderings is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCursor(usize);

impl OffsetCursor {
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    pub fn offset(&self) -> usize {
        self.0
    }

    pub fn encode(&self) -> String {
        encode_cursor(self.0)
    }

    pub fn decode(cursor: &str) -> Result<Self, CursorError> {
        decode_cursor(cursor).map(Self)
    }
}

impl From<usize> for OffsetCursor {
    fn from(offset: usize) -> Self {
        Self(offset)
    }
}

impl std::fmt::Display for OffsetCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl std::str::FromStr for OffsetCursor {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for OffsetCursor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for OffsetCursor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_round_trip() {
        for offset in [0, 1, 2, 9, 10, 255, 65_536, usize::MAX] {
            assert_eq!(decode_cursor(&encode_cursor(offset)), Ok(offset));
        }
    }

    #[test]
    fn cursor_is_deterministic() {
        assert_eq!(encode_cursor(3), encode_cursor(3));
        assert_ne!(encode_cursor(3), encode_cursor(4));
    }

    #[test]
    fn garbage_cursors_are_malformed() {
        let not_a_number = general_purpose::STANDARD_NO_PAD.encode("arrayconnection:abc");
        let signed = general_purpose::STANDARD_NO_PAD.encode("arrayconnection:+3");
        let negative = general_purpose::STANDARD_NO_PAD.encode("arrayconnection:-1");
        let wrong_prefix = general_purpose::STANDARD_NO_PAD.encode("offset:3");
        let overflow =
            general_purpose::STANDARD_NO_PAD.encode("arrayconnection:99999999999999999999999");
        for input in [
            "",
            "not-a-cursor",
            "%%%",
            not_a_number.as_str(),
            signed.as_str(),
            negative.as_str(),
            wrong_prefix.as_str(),
            overflow.as_str(),
        ] {
            assert_eq!(
                decode_cursor(input),
                Err(CursorError::Malformed(input.to_string()))
            );
        }
    }

    #[test]
    fn offset_cursor_serializes_as_encoded_string() -> anyhow::Result<()> {
        let cursor = OffsetCursor::new(7);
        let json = serde_json::to_string(&cursor)?;
        assert_eq!(json, format!("\"{}\"", encode_cursor(7)));
        let back: OffsetCursor = serde_json::from_str(&json)?;
        assert_eq!(back, cursor);
        assert!(serde_json::from_str::<OffsetCursor>("\"nope\"").is_err());
        Ok(())
    }
}
