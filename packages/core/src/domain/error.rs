//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// RoomId has the wrong number of characters
    #[error("RoomId must be exactly {expected} characters (got {actual})")]
    RoomIdInvalidLength { expected: usize, actual: usize },

    /// RoomId contains a character outside A-Z / 0-9
    #[error("RoomId contains invalid character {character:?} at position {position}")]
    RoomIdInvalidCharacter { character: char, position: usize },
}
