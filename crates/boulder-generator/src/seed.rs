use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`BoardSeed`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// The rejected character.
        ch: char,
        /// Character offset within the text.
        offset: usize,
    },
}

/// A 256-bit seed that makes board generation reproducible.
///
/// Seeds are written as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use boulder_generator::BoardSeed;
///
/// let seed: BoardSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff"
///     .parse()?;
/// assert_eq!(seed.to_string().parse::<BoardSeed>()?, seed);
/// assert_ne!(seed.derive(0), seed.derive(1));
/// # Ok::<(), boulder_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the `index`-th child seed as `SHA-256(seed || index)`.
    ///
    /// Used to give every generation attempt of one refinement run its own
    /// reproducible seed.
    #[must_use]
    pub fn derive(&self, index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(index.to_le_bytes());
        Self(hasher.finalize().into())
    }

    /// Creates the random generator seeded by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().collect::<Vec<_>>();
        if chars.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: chars.len() });
        }
        let mut bytes = [0; 32];
        for (i, (byte, pair)) in bytes.iter_mut().zip(chars.chunks_exact(2)).enumerate() {
            *byte = (hex_digit(pair[0], 2 * i)? << 4) | hex_digit(pair[1], 2 * i + 1)?;
        }
        Ok(Self(bytes))
    }
}

fn hex_digit(ch: char, offset: usize) -> Result<u8, SeedParseError> {
    ch.to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
        .ok_or(SeedParseError::InvalidDigit { ch, offset })
}

#[cfg(test)]
mod tests {
    use rand::RngExt as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed = BoardSeed::from_str(SEED).unwrap();
        assert_eq!(seed.to_string(), SEED);
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);

        let upper = BoardSeed::from_str(&SEED.to_uppercase()).unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            BoardSeed::from_str("abc"),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", &SEED[..63]);
        assert_eq!(
            BoardSeed::from_str(&bad),
            Err(SeedParseError::InvalidDigit { ch: 'g', offset: 63 })
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let seed = BoardSeed::from_str(SEED).unwrap();
        assert_eq!(seed.derive(7), seed.derive(7));
        assert_ne!(seed.derive(7), seed.derive(8));
        assert_ne!(seed.derive(0), seed);
    }

    #[test]
    fn test_rng_is_reproducible() {
        let seed = BoardSeed::from_str(SEED).unwrap();
        let a: [u64; 4] = seed.rng().random();
        let b: [u64; 4] = seed.rng().random();
        assert_eq!(a, b);
        assert_ne!(BoardSeed::random(), BoardSeed::random());
    }
}
