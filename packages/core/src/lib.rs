//! Short room identifier library.
//!
//! Generates and validates the six-character codes (`A-Z`, `0-9`) that label
//! rooms in a host application. Both operations are stateless; uniqueness and
//! persistence are left to the caller.
//!
//! ```
//! use roomcode_core::{RoomIdFactory, generate, validate};
//!
//! let code = generate(6);
//! assert!(validate(&code));
//!
//! let room_id = RoomIdFactory::generate();
//! assert_eq!(room_id.as_str().len(), 6);
//! ```

pub mod domain;

pub use domain::{
    ALPHABET, ROOM_ID_LENGTH, RoomId, RoomIdAlphabet, RoomIdFactory, ValueObjectError, generate,
    generate_with, validate,
};
