//! # payloadsig
//!
//! RSA-PSS signatures for arbitrary byte payloads, such as HTTP response
//! bodies, with PEM key files on disk.
//!
//! The crate composes existing primitives and adds no cryptography of its own:
//! SHA-256 digests, RSA-PSS with the maximal salt length, PKCS#1 private keys
//! and PKIX public keys in PEM armor.
//!
//! ## Features
//!
//! - **Key Generation**: 4096-bit RSA key pairs from the OS random source
//! - **Key Files**: `<path>` and `<path>.pub`, never overwritten
//! - **Signing**: RSA-PSS over the SHA-256 digest of a payload, raw or base64
//! - **Verification**: digests are always recomputed from the original message
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use payloadsig::{create_key_pair_files, digest, load_private_key, load_public_key};
//! use payloadsig::{sign_to_base64, verify_from_base64};
//!
//! let paths = create_key_pair_files("/var/lib/app/signing.key").unwrap();
//! let private_key = load_private_key(&paths.private_key).unwrap();
//! let public_key = load_public_key(&paths.public_key).unwrap();
//!
//! let body = br#"{"status":"ok"}"#;
//! let signature = sign_to_base64(Some(&private_key), &digest(body)).unwrap();
//!
//! verify_from_base64(Some(&public_key), &signature, body).unwrap();
//! ```
//!
//! Passing `None` as the private key turns signing into a no-op, so a host
//! can disable signing without branching.
//!
//! ## Digest Compatibility
//!
//! [`Digest::to_hex`] matches `sha256sum` over exactly the same bytes. A
//! trailing newline added by a shell pipeline changes the digest.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Every error
//! names the operation that produced it and maps to a stable [`ErrorCode`].

pub mod codec;
pub mod core;
pub mod digest;
pub mod error;
pub mod keygen;
pub mod keystore;
pub mod signer;
pub mod verifier;

#[cfg(test)]
mod test_support;

pub use codec::{decode_private_key, decode_public_key, encode_private_key, encode_public_key};
pub use crate::core::{Signature, KEY_BITS, PUBLIC_KEY_SUFFIX};
pub use crate::digest::{digest, Digest};
pub use error::{Error, ErrorCode, Result, VerificationFailure};
pub use keygen::generate_key_pair;
pub use keystore::{
    create_key_pair_files, load_private_key, load_public_key, write_key_pair, write_private_key,
    write_public_key, KeyPairPaths,
};
pub use rsa::{RsaPrivateKey, RsaPublicKey};
pub use signer::{sign, sign_to_base64};
pub use verifier::{verify, verify_from_base64};
