//! PEM armoring of RSA keys.
//!
//! Private keys are stored as PKCS#1 (`RSA PRIVATE KEY`), public keys as
//! PKIX `SubjectPublicKeyInfo` (`PUBLIC KEY`). Existing key files use this
//! mixed layout, so it must not change. Public key bodies are read as PKCS#1
//! first and PKIX second.

use pem::{EncodeConfig, LineEnding, Pem};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::core::{PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL};
use crate::error::{Error, Result};

/// Parse the first PEM block in `input` as a PKCS#1 RSA private key.
///
/// Text before the first block and anything after it are ignored.
pub fn decode_private_key(input: &[u8]) -> Result<RsaPrivateKey> {
    const OP: &str = "decode_private_key";
    let block = first_block(OP, input, PRIVATE_KEY_LABEL)?;
    RsaPrivateKey::from_pkcs1_der(block.contents())
        .map_err(|e| Error::decode(OP, format!("failed to parse PEM block: {}", e)))
}

/// Parse the first PEM block in `input` as an RSA public key.
pub fn decode_public_key(input: &[u8]) -> Result<RsaPublicKey> {
    const OP: &str = "decode_public_key";
    let block = first_block(OP, input, PUBLIC_KEY_LABEL)?;
    let der = block.contents();
    RsaPublicKey::from_pkcs1_der(der)
        .or_else(|_| RsaPublicKey::from_public_key_der(der))
        .map_err(|e| Error::decode(OP, format!("failed to parse PEM block: {}", e)))
}

/// Encode a private key as a PKCS#1 `RSA PRIVATE KEY` PEM block.
pub fn encode_private_key(key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let der = key
        .to_pkcs1_der()
        .map_err(|e| Error::decode("encode_private_key", e.to_string()))?;
    Ok(armor(PRIVATE_KEY_LABEL, der.as_bytes()))
}

/// Encode a public key as a PKIX `PUBLIC KEY` PEM block.
pub fn encode_public_key(key: &RsaPublicKey) -> Result<Vec<u8>> {
    let der = key
        .to_public_key_der()
        .map_err(|e| Error::decode("encode_public_key", e.to_string()))?;
    tracing::debug!(len = der.as_bytes().len(), "encoded public key");
    Ok(armor(PUBLIC_KEY_LABEL, der.as_bytes()))
}

fn first_block(op: &'static str, input: &[u8], label: &str) -> Result<Pem> {
    let block = pem::parse(input).map_err(|e| {
        Error::decode(
            op,
            format!("failed to decode PEM block containing {}: {}", label, e),
        )
    })?;
    if block.tag() != label {
        return Err(Error::decode(
            op,
            format!("expected PEM block {:?}, found {:?}", label, block.tag()),
        ));
    }
    Ok(block)
}

fn armor(label: &str, der: &[u8]) -> Vec<u8> {
    let config = EncodeConfig::new().set_line_ending(LineEnding::LF);
    pem::encode_config(&Pem::new(label, der), config).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_support::{other_key_pair, shared_key_pair};

    fn assert_armored(text: &str, label: &str) {
        let begin = format!("-----BEGIN {}-----\n", label);
        let end = format!("-----END {}-----\n", label);
        assert!(text.starts_with(&begin), "bad header: {}", text);
        assert!(text.ends_with(&end), "bad footer: {}", text);
        assert!(!text.contains('\r'));

        let body: Vec<&str> = text.lines().skip(1).collect();
        let body = &body[..body.len() - 1];
        assert!(body.iter().all(|line| line.len() <= 64));
        assert!(body[..body.len() - 1].iter().all(|line| line.len() == 64));
    }

    #[test]
    fn test_private_key_roundtrip() {
        let (private_key, _) = shared_key_pair();
        let pem = encode_private_key(private_key).unwrap();
        assert_armored(std::str::from_utf8(&pem).unwrap(), "RSA PRIVATE KEY");
        assert_eq!(&decode_private_key(&pem).unwrap(), private_key);
    }

    #[test]
    fn test_public_key_roundtrip() {
        let (_, public_key) = shared_key_pair();
        let pem = encode_public_key(public_key).unwrap();
        assert_armored(std::str::from_utf8(&pem).unwrap(), "PUBLIC KEY");
        assert_eq!(&decode_public_key(&pem).unwrap(), public_key);
    }

    #[test]
    fn test_public_key_body_is_pkix() {
        let (_, public_key) = shared_key_pair();
        let block = pem::parse(encode_public_key(public_key).unwrap()).unwrap();
        assert_eq!(
            &RsaPublicKey::from_public_key_der(block.contents()).unwrap(),
            public_key
        );
        assert!(RsaPublicKey::from_pkcs1_der(block.contents()).is_err());
    }

    #[test]
    fn test_public_key_accepts_pkcs1_body() {
        use rsa::pkcs1::EncodeRsaPublicKey;

        let (_, public_key) = shared_key_pair();
        let der = public_key.to_pkcs1_der().unwrap();
        let pem = armor(PUBLIC_KEY_LABEL, der.as_bytes());
        assert_eq!(&decode_public_key(&pem).unwrap(), public_key);
    }

    #[test]
    fn test_only_first_block_is_used() {
        let (private_key, _) = shared_key_pair();
        let (other_private, _) = other_key_pair();
        let mut buf = encode_private_key(private_key).unwrap();
        buf.extend(encode_private_key(other_private).unwrap());
        assert_eq!(&decode_private_key(&buf).unwrap(), private_key);
    }

    #[test]
    fn test_leading_text_is_skipped() {
        let (private_key, public_key) = shared_key_pair();

        let mut buf = b"comment line\n\n".to_vec();
        buf.extend(encode_private_key(private_key).unwrap());
        assert_eq!(&decode_private_key(&buf).unwrap(), private_key);

        let mut buf = b"# server signing key\n".to_vec();
        buf.extend(encode_public_key(public_key).unwrap());
        assert_eq!(&decode_public_key(&buf).unwrap(), public_key);
    }

    #[test]
    fn test_wrong_label_rejected() {
        let (private_key, public_key) = shared_key_pair();
        let private_pem = encode_private_key(private_key).unwrap();
        let public_pem = encode_public_key(public_key).unwrap();

        let err = decode_public_key(&private_pem).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DecodeFailed);
        assert_eq!(err.operation(), "decode_public_key");

        let err = decode_private_key(&public_pem).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DecodeFailed);
        assert_eq!(err.operation(), "decode_private_key");
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(decode_private_key(b"not a key").is_err());
        assert!(decode_public_key(b"").is_err());

        let bogus = armor(PRIVATE_KEY_LABEL, b"\x30\x03\x02\x01\x00");
        let err = decode_private_key(&bogus).unwrap_err();
        assert!(err.to_string().contains("failed to parse PEM block"));
    }
}
