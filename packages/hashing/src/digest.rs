//! Digest value type

use crate::engine::{DIGEST_LEN, STATE_WORDS};

/// A finished 32-byte SHA-256 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; DIGEST_LEN],
}

impl Digest {
    /// Wrap raw digest bytes
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self { bytes }
    }

    /// Serialize 8 state words big-endian
    #[must_use]
    pub fn from_words(words: &[u32; STATE_WORDS]) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self { bytes }
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.bytes
    }

    /// Unwrap into the byte array
    #[must_use]
    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.bytes
    }

    /// Copy into a `Vec<u8>`
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Always 32
    #[must_use]
    pub fn len(&self) -> usize {
        DIGEST_LEN
    }

    /// Always `false`; a digest has a fixed length
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.bytes
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.bytes.to_vec()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<[u8; DIGEST_LEN]> for Digest {
    fn eq(&self, other: &[u8; DIGEST_LEN]) -> bool {
        &self.bytes == other
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Digest(")?;
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_serialize_big_endian() {
        let digest = Digest::from_words(&[0xdeadbeef, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&digest.as_bytes()[..4], &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(digest.as_bytes()[31], 1);
        assert_eq!(digest.len(), 32);
    }

    #[test]
    fn debug_is_lowercase_hex() {
        let digest = Digest::new([0xab; DIGEST_LEN]);
        assert_eq!(format!("{digest:?}"), format!("Digest({})", "ab".repeat(32)));
    }
}
