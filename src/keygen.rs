//! RSA key pair generation.

use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::core::KEY_BITS;
use crate::error::{Error, Result};

/// Generate a new 4096-bit RSA key pair from the operating system's CSPRNG.
///
/// The public key is also contained in the private key; it is returned
/// separately for convenience.
///
/// # Errors
///
/// Returns [`Error::Generation`] if the random source or prime search fails.
pub fn generate_key_pair() -> Result<(RsaPrivateKey, RsaPublicKey)> {
    generate_key_pair_with_bits("generate_key_pair", KEY_BITS)
}

pub(crate) fn generate_key_pair_with_bits(
    op: &'static str,
    bits: usize,
) -> Result<(RsaPrivateKey, RsaPublicKey)> {
    let mut rng = OsRng;
    let private_key =
        RsaPrivateKey::new(&mut rng, bits).map_err(|source| Error::Generation { op, source })?;
    let public_key = RsaPublicKey::from(&private_key);
    Ok((private_key, public_key))
}
