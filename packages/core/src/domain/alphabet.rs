//! The symbol set room identifiers are drawn from.

use rand::{Rng, distributions::Distribution};

/// Uppercase Latin letters followed by decimal digits.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Uniform distribution over [`ALPHABET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomIdAlphabet;

impl RoomIdAlphabet {
    /// Whether `c` belongs to the alphabet. Case-sensitive.
    pub fn contains(c: char) -> bool {
        c.is_ascii_uppercase() || c.is_ascii_digit()
    }
}

impl Distribution<char> for RoomIdAlphabet {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        let idx = rng.gen_range(0..ALPHABET.len());
        char::from(ALPHABET[idx])
    }
}
