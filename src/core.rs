use base64::{engine::general_purpose, Engine as _};

/// RSA modulus size used for every generated key.
pub const KEY_BITS: usize = 4096;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Appended to a private key path to name its public key file.
pub const PUBLIC_KEY_SUFFIX: &str = ".pub";

/// PEM label of a PKCS#1 private key block.
pub const PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// PEM label of a public key block.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// An RSA-PSS signature.
///
/// Carries no algorithm metadata: SHA-256, PSS and the maximal salt length
/// are implied. A 4096-bit key produces 512 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Signature length in bytes, equal to the modulus size of the signing key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for a zero-length signature, which verification treats as missing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Standard base64 with padding and no line breaks.
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.0)
    }

    /// Consume the signature and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Signature {
    fn from(bytes: Vec<u8>) -> Self {
        Signature(bytes)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base64())
    }
}
