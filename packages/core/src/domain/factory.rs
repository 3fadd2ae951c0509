//! Domain factories for creating room identifiers.

use rand::Rng;

use super::{RoomId, alphabet::RoomIdAlphabet, value_object::ROOM_ID_LENGTH};

/// Produce `length` symbols drawn independently from the alphabet using `rng`.
///
/// A `length` of zero yields an empty string.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length).map(|_| rng.sample(RoomIdAlphabet)).collect()
}

/// Produce a random code of `length` symbols using the thread-local RNG.
///
/// Not a security token, and not guaranteed unique. Callers that need
/// uniqueness re-generate on collision themselves.
pub fn generate(length: usize) -> String {
    let code = generate_with(&mut rand::thread_rng(), length);
    tracing::trace!(length, code = %code, "generated room code");
    code
}

/// Factory for generating RoomId instances.
///
/// This factory encapsulates the logic for generating new room identifiers,
/// separating the generation concern from the validation logic in RoomId.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId of the default length.
    pub fn generate() -> RoomId {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a new RoomId from a caller-supplied RNG.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> RoomId {
        RoomId::from_generated(generate_with(rng, ROOM_ID_LENGTH))
    }

    /// Generate `count` independent RoomIds. Duplicates are not filtered.
    pub fn generate_many(count: usize) -> Vec<RoomId> {
        let mut rng = rand::thread_rng();
        let ids: Vec<RoomId> = (0..count).map(|_| Self::generate_with(&mut rng)).collect();
        tracing::debug!(count = ids.len(), "generated room ids");
        ids
    }
}
