//! RSA-PSS signing of digests.

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pss, RsaPrivateKey};
use sha2::Sha256;

use crate::core::{Signature, DIGEST_LEN};
use crate::digest::Digest;
use crate::error::{Error, Result};

/// Maximal PSS salt length for a modulus of `modulus_bits` bits with SHA-256.
///
/// Returns `None` when the modulus cannot hold the hash plus two bytes of padding.
pub(crate) fn pss_salt_len(modulus_bits: usize) -> Option<usize> {
    let em_len = (modulus_bits.checked_sub(1)? + 7) / 8;
    em_len.checked_sub(DIGEST_LEN + 2)
}

/// Sign `digest` with RSA-PSS (SHA-256, maximal salt length).
///
/// A `None` key disables signing: the call succeeds and returns `Ok(None)`.
///
/// # Errors
///
/// Returns [`Error::Signing`] if the key is too small or the primitive fails.
pub fn sign(private_key: Option<&RsaPrivateKey>, digest: &Digest) -> Result<Option<Signature>> {
    let Some(private_key) = private_key else {
        return Ok(None);
    };

    let salt_len = pss_salt_len(private_key.n().bits()).ok_or_else(|| Error::Signing {
        op: "sign",
        reason: format!(
            "{}-bit modulus is too small for a SHA-256 PSS signature",
            private_key.n().bits()
        ),
    })?;

    let padding = Pss::new_blinded_with_salt::<Sha256>(salt_len);
    let bytes = private_key
        .sign_with_rng(&mut OsRng, padding, digest.as_ref())
        .map_err(|e| Error::Signing {
            op: "sign",
            reason: e.to_string(),
        })?;

    Ok(Some(Signature::from(bytes)))
}

/// Like [`sign`], but returns the signature as standard base64.
///
/// With no key the result is an empty string.
pub fn sign_to_base64(private_key: Option<&RsaPrivateKey>, digest: &Digest) -> Result<String> {
    Ok(sign(private_key, digest)?
        .map(|sig| sig.to_base64())
        .unwrap_or_default())
}
