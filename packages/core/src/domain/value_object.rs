//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{alphabet::RoomIdAlphabet, error::ValueObjectError};

/// Number of characters in a room identifier.
pub const ROOM_ID_LENGTH: usize = 6;

/// Room identifier value object.
///
/// Represents the short code of a room: exactly [`ROOM_ID_LENGTH`] characters
/// from `A-Z0-9`. A `RoomId` can only be constructed from valid input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Arguments
    ///
    /// * `id` - The room identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        let len = id.chars().count();
        if len != ROOM_ID_LENGTH {
            tracing::debug!(room_id = %id, len, "rejected room id with wrong length");
            return Err(ValueObjectError::RoomIdInvalidLength {
                expected: ROOM_ID_LENGTH,
                actual: len,
            });
        }
        if let Some((position, character)) = id
            .chars()
            .enumerate()
            .find(|(_, c)| !RoomIdAlphabet::contains(*c))
        {
            tracing::debug!(room_id = %id, position, "rejected room id with invalid character");
            return Err(ValueObjectError::RoomIdInvalidCharacter {
                character,
                position,
            });
        }
        Ok(Self(id))
    }

    /// Wrap a string already known to satisfy the invariant.
    pub(crate) fn from_generated(id: String) -> Self {
        debug_assert!(Self::is_valid(&id));
        Self(id)
    }

    /// Check whether `candidate` has the shape of a room identifier.
    ///
    /// No trimming or case folding is applied.
    pub fn is_valid(candidate: &str) -> bool {
        // Every alphabet symbol is one ASCII byte, so byte length equals char length here.
        candidate.len() == ROOM_ID_LENGTH
            && candidate.chars().all(RoomIdAlphabet::contains)
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RoomId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for RoomId {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

/// Validate an untrusted candidate, e.g. a URL path segment.
pub fn validate(candidate: &str) -> bool {
    RoomId::is_valid(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_new_success() {
        // テスト項目: 有効なルーム ID を作成できる
        // given (前提条件):
        let id = "A1B2C3".to_string();

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "A1B2C3");
    }

    #[test]
    fn test_room_id_new_empty_fails() {
        // テスト項目: 空のルーム ID は作成できない
        // given (前提条件):
        let id = "".to_string();

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::RoomIdEmpty);
    }

    #[test]
    fn test_room_id_new_wrong_length_fails() {
        // テスト項目: 6 文字以外のルーム ID は作成できない
        // when (操作):
        let short = RoomId::new("ABC12".to_string());
        let long = RoomId::new("ABCDEFG".to_string());

        // then (期待する結果):
        assert_eq!(
            short.unwrap_err(),
            ValueObjectError::RoomIdInvalidLength {
                expected: 6,
                actual: 5
            }
        );
        assert_eq!(
            long.unwrap_err(),
            ValueObjectError::RoomIdInvalidLength {
                expected: 6,
                actual: 7
            }
        );
    }

    #[test]
    fn test_room_id_new_invalid_character_fails() {
        // テスト項目: アルファベット外の文字を含むルーム ID は作成できない
        // when (操作):
        let lower = RoomId::new("abc123".to_string());
        let symbol = RoomId::new("AB-123".to_string());

        // then (期待する結果):
        assert_eq!(
            lower.unwrap_err(),
            ValueObjectError::RoomIdInvalidCharacter {
                character: 'a',
                position: 0
            }
        );
        assert_eq!(
            symbol.unwrap_err(),
            ValueObjectError::RoomIdInvalidCharacter {
                character: '-',
                position: 2
            }
        );
    }

    #[test]
    fn test_room_id_new_counts_characters_not_bytes() {
        // テスト項目: マルチバイト文字は文字数で数えられる（6 バイトでも 5 文字なら不正）
        // given (前提条件):
        let id = "ÄBCDE".to_string();
        assert_eq!(id.len(), 6);

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::RoomIdInvalidLength {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_validate_examples() {
        // テスト項目: validate は形状のみを判定する
        // then (期待する結果):
        assert!(validate("A1B2C3"));
        assert!(validate("ZZZZZZ"));
        assert!(validate("000000"));
        assert!(!validate(""));
        assert!(!validate("ABC12"));
        assert!(!validate("ABCDEFG"));
        assert!(!validate("abc123"));
        assert!(!validate("AB-123"));
        assert!(!validate("ÄBCDE"));
        assert!(!validate(" A1B2C"));
        assert!(!validate("A1B2C3\n"));
    }

    #[test]
    fn test_validate_does_not_fold_case() {
        // テスト項目: 1 文字でも小文字が含まれていれば不正
        // then (期待する結果):
        assert!(!validate("A1B2Cz"));
        assert!(validate("A1B2CZ"));
    }

    #[test]
    fn test_room_id_equality() {
        // テスト項目: 同じ値を持つ RoomId は等価
        // given (前提条件):
        let id1 = RoomId::new("ROOM01".to_string()).unwrap();
        let id2: RoomId = "ROOM01".parse().unwrap();
        let id3 = RoomId::try_from("ROOM02").unwrap();

        // then (期待する結果):
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_room_id_serde() {
        // テスト項目: RoomId は JSON 文字列としてシリアライズされ、不正な値はデシリアライズできない
        // given (前提条件):
        let id = RoomId::new("A1B2C3".to_string()).unwrap();

        // when (操作):
        let json = serde_json::to_string(&id).unwrap();
        let invalid = serde_json::from_str::<RoomId>("\"abc123\"");

        // then (期待する結果):
        assert_eq!(json, "\"A1B2C3\"");
        assert_eq!(serde_json::from_str::<RoomId>(&json).unwrap(), id);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_room_id_display_and_into_string() {
        // テスト項目: Display と into_string は内部の文字列をそのまま返す
        // given (前提条件):
        let id = RoomId::new("XYZ789".to_string()).unwrap();

        // then (期待する結果):
        assert_eq!(id.to_string(), "XYZ789");
        assert_eq!(id.as_ref(), "XYZ789");
        assert_eq!(String::from(id.clone()), "XYZ789");
        assert_eq!(id.into_string(), "XYZ789");
    }
}
