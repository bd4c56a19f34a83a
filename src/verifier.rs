//! RSA-PSS verification against the original message.

use base64::{engine::general_purpose, Engine as _};
use rsa::traits::PublicKeyParts;
use rsa::{Pss, RsaPublicKey};
use sha2::Sha256;

use crate::digest::digest;
use crate::error::{Error, Result, VerificationFailure};
use crate::signer::pss_salt_len;

/// Verify `signature` over `message` with `public_key`.
///
/// The digest is recomputed from `message`; callers never supply one. An
/// empty signature is treated the same as a missing one. Only the maximal
/// PSS salt length for the key is accepted; a signature made with any other
/// salt length (e.g. 32 bytes) is rejected as a mismatch.
///
/// # Errors
///
/// Returns [`Error::Verification`] with the reason the signature was rejected.
pub fn verify(
    public_key: Option<&RsaPublicKey>,
    signature: Option<&[u8]>,
    message: &[u8],
) -> Result<()> {
    verify_as("verify", public_key, signature, message)
}

/// Decode a base64 signature and [`verify`] it.
pub fn verify_from_base64(
    public_key: Option<&RsaPublicKey>,
    signature_b64: &str,
    message: &[u8],
) -> Result<()> {
    const OP: &str = "verify_from_base64";
    let signature = general_purpose::STANDARD
        .decode(signature_b64)
        .map_err(|_| Error::verification(OP, VerificationFailure::Encoding))?;
    verify_as(OP, public_key, Some(signature.as_slice()), message)
}

fn verify_as(
    op: &'static str,
    public_key: Option<&RsaPublicKey>,
    signature: Option<&[u8]>,
    message: &[u8],
) -> Result<()> {
    let public_key =
        public_key.ok_or_else(|| Error::verification(op, VerificationFailure::MissingKey))?;
    let signature = match signature {
        Some(sig) if !sig.is_empty() => sig,
        _ => return Err(Error::verification(op, VerificationFailure::MissingSignature)),
    };

    let recomputed = digest(message);
    tracing::debug!(op, digest = %recomputed, "recalculated digest for message");

    let salt_len = pss_salt_len(public_key.n().bits())
        .ok_or_else(|| Error::verification(op, VerificationFailure::Mismatch))?;
    public_key
        .verify(
            Pss::new_with_salt::<Sha256>(salt_len),
            recomputed.as_ref(),
            signature,
        )
        .map_err(|_| Error::verification(op, VerificationFailure::Mismatch))
}
