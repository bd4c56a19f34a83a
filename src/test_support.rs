use std::sync::OnceLock;

use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::keygen::generate_key_pair_with_bits;

/// A 2048-bit pair shared by tests that don't care about the production key size.
pub(crate) fn shared_key_pair() -> &'static (RsaPrivateKey, RsaPublicKey) {
    static PAIR: OnceLock<(RsaPrivateKey, RsaPublicKey)> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair_with_bits("test", 2048).unwrap())
}

/// A second, independent pair for wrong-key checks.
pub(crate) fn other_key_pair() -> &'static (RsaPrivateKey, RsaPublicKey) {
    static PAIR: OnceLock<(RsaPrivateKey, RsaPublicKey)> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair_with_bits("test", 2048).unwrap())
}
