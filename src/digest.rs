//! SHA-256 digests of payloads.

use sha2::{Digest as _, Sha256};

use crate::core::DIGEST_LEN;
use crate::error::{Error, Result};

/// SHA-256 fingerprint of a byte sequence. Always 32 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap a digest computed elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] unless `bytes` is exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| {
            Error::decode(
                "digest_from_slice",
                format!("expected {} bytes, got {}", DIGEST_LEN, bytes.len()),
            )
        })?;
        Ok(Digest(arr))
    }

    /// The 32 raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, as printed by `sha256sum`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the SHA-256 digest of `bytes`.
///
/// The result matches command-line tools only if `bytes` carries no extra
/// framing, such as the trailing newline a shell pipeline adds.
pub fn digest(bytes: &[u8]) -> Digest {
    Digest(Sha256::digest(bytes).into())
}
