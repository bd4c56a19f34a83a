use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure a payloadsig operation can report.
///
/// Variants that can originate from several public functions carry `op`,
/// the name of the operation that failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{op}: I/O error: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{op}: {reason}")]
    Decode { op: &'static str, reason: String },

    #[error("key file {} already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("{op}: key generation failed: {source}")]
    Generation {
        op: &'static str,
        #[source]
        source: rsa::Error,
    },

    #[error("{op}: signing failed: {reason}")]
    Signing { op: &'static str, reason: String },

    #[error("{op}: verification failed: {kind}")]
    Verification {
        op: &'static str,
        kind: VerificationFailure,
    },
}

impl Error {
    pub(crate) fn io(op: &'static str, source: std::io::Error) -> Self {
        Error::Io { op, source }
    }

    pub(crate) fn decode(op: &'static str, reason: impl Into<String>) -> Self {
        Error::Decode {
            op,
            reason: reason.into(),
        }
    }

    pub(crate) fn verification(op: &'static str, kind: VerificationFailure) -> Self {
        Error::Verification { op, kind }
    }

    /// Name of the operation that produced this error.
    pub fn operation(&self) -> &'static str {
        match self {
            Error::Io { op, .. }
            | Error::Decode { op, .. }
            | Error::Generation { op, .. }
            | Error::Signing { op, .. }
            | Error::Verification { op, .. } => *op,
            Error::AlreadyExists { .. } => "create_key_pair_files",
        }
    }

    /// Stable code for reporting this error outside the process.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Io { .. } => ErrorCode::IoError,
            Error::Decode { .. } => ErrorCode::DecodeFailed,
            Error::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            Error::Generation { .. } => ErrorCode::GenerationFailed,
            Error::Signing { .. } => ErrorCode::SigningFailed,
            Error::Verification { kind, .. } => match kind {
                VerificationFailure::MissingKey => ErrorCode::KeyMissing,
                VerificationFailure::MissingSignature => ErrorCode::SignatureMissing,
                VerificationFailure::Encoding => ErrorCode::SignatureEncodingInvalid,
                VerificationFailure::Mismatch => ErrorCode::SignatureInvalid,
            },
        }
    }

    /// The verification failure kind, if this is a verification error.
    pub fn verification_failure(&self) -> Option<VerificationFailure> {
        match self {
            Error::Verification { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Why a signature was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationFailure {
    /// No public key was supplied.
    MissingKey,
    /// No signature (or an empty one) was supplied.
    MissingSignature,
    /// The textual signature is not valid base64.
    Encoding,
    /// The signature does not match the message under this key.
    Mismatch,
}

impl std::fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VerificationFailure::MissingKey => "public key is missing",
            VerificationFailure::MissingSignature => "signature is missing",
            VerificationFailure::Encoding => "signature is not valid base64",
            VerificationFailure::Mismatch => "signature does not match message",
        };
        write!(f, "{}", s)
    }
}

/// Error codes for structured error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "IO_ERROR")]
    IoError,
    #[serde(rename = "DECODE_FAILED")]
    DecodeFailed,
    #[serde(rename = "ALREADY_EXISTS")]
    AlreadyExists,
    #[serde(rename = "GENERATION_FAILED")]
    GenerationFailed,
    #[serde(rename = "SIGNING_FAILED")]
    SigningFailed,
    #[serde(rename = "KEY_MISSING")]
    KeyMissing,
    #[serde(rename = "SIGNATURE_MISSING")]
    SignatureMissing,
    #[serde(rename = "SIGNATURE_ENCODING_INVALID")]
    SignatureEncodingInvalid,
    #[serde(rename = "SIGNATURE_INVALID")]
    SignatureInvalid,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::DecodeFailed => "DECODE_FAILED",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::GenerationFailed => "GENERATION_FAILED",
            ErrorCode::SigningFailed => "SIGNING_FAILED",
            ErrorCode::KeyMissing => "KEY_MISSING",
            ErrorCode::SignatureMissing => "SIGNATURE_MISSING",
            ErrorCode::SignatureEncodingInvalid => "SIGNATURE_ENCODING_INVALID",
            ErrorCode::SignatureInvalid => "SIGNATURE_INVALID",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_codes() {
        let err = Error::verification("verify", VerificationFailure::Mismatch);
        assert_eq!(err.code(), ErrorCode::SignatureInvalid);
        assert_eq!(err.operation(), "verify");
        assert_eq!(
            err.verification_failure(),
            Some(VerificationFailure::Mismatch)
        );

        let err = Error::verification("verify_from_base64", VerificationFailure::Encoding);
        assert_eq!(err.code(), ErrorCode::SignatureEncodingInvalid);
    }

    #[test]
    fn test_display_names_operation() {
        let err = Error::decode("decode_private_key", "no PEM block found");
        assert_eq!(err.to_string(), "decode_private_key: no PEM block found");

        let err = Error::io(
            "load_public_key",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().starts_with("load_public_key: I/O error"));
        assert_eq!(err.code(), ErrorCode::IoError);
    }

    #[test]
    fn test_already_exists_display() {
        let err = Error::AlreadyExists {
            path: PathBuf::from("/tmp/id_rsa"),
        };
        assert_eq!(err.to_string(), "key file /tmp/id_rsa already exists");
        assert_eq!(err.code(), ErrorCode::AlreadyExists);
        assert_eq!(err.verification_failure(), None);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::SignatureMissing).unwrap();
        assert_eq!(json, "\"SIGNATURE_MISSING\"");

        let code: ErrorCode = serde_json::from_str("\"KEY_MISSING\"").unwrap();
        assert_eq!(code, ErrorCode::KeyMissing);
        assert_eq!(code.to_string(), "KEY_MISSING");
    }
}
