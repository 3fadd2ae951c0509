//! Domain layer for room identifiers.
//!
//! This module contains the identifier rules and is independent of any
//! front end (CLI, HTTP handlers, templates).

pub mod alphabet;
pub mod error;
pub mod factory;
pub mod value_object;

pub use alphabet::{ALPHABET, RoomIdAlphabet};
pub use error::ValueObjectError;
pub use factory::{RoomIdFactory, generate, generate_with};
pub use value_object::{ROOM_ID_LENGTH, RoomId, validate};
