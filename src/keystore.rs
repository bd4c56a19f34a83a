//! Reading and writing PEM key files.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::codec::{decode_private_key, decode_public_key, encode_private_key, encode_public_key};
use crate::core::PUBLIC_KEY_SUFFIX;
use crate::error::{Error, Result};
use crate::keygen::generate_key_pair;

/// Locations of a private key file and its companion public key file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPairPaths {
    pub private_key: PathBuf,
    pub public_key: PathBuf,
}

impl KeyPairPaths {
    /// Derive the public key path by appending `.pub` to `private_key`.
    pub fn from_private(private_key: impl AsRef<Path>) -> Self {
        let private_key = private_key.as_ref().to_path_buf();
        let mut public_key = OsString::from(private_key.as_os_str());
        public_key.push(PUBLIC_KEY_SUFFIX);
        Self {
            private_key,
            public_key: PathBuf::from(public_key),
        }
    }
}

/// Load a PEM-encoded PKCS#1 private key from `path`.
pub fn load_private_key(path: impl AsRef<Path>) -> Result<RsaPrivateKey> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading private key");
    let buf = fs::read(path).map_err(|e| Error::io("load_private_key", e))?;
    decode_private_key(&buf)
}

/// Load a PEM-encoded public key from `path`.
pub fn load_public_key(path: impl AsRef<Path>) -> Result<RsaPublicKey> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading public key");
    let buf = fs::read(path).map_err(|e| Error::io("load_public_key", e))?;
    decode_public_key(&buf)
}

/// Write `key` as PEM to a caller-owned writer.
pub fn write_private_key<W: Write>(out: &mut W, key: &RsaPrivateKey) -> Result<()> {
    let pem = encode_private_key(key)?;
    out.write_all(&pem)
        .map_err(|e| Error::io("write_private_key", e))
}

/// Write `key` as PEM to a caller-owned writer.
pub fn write_public_key<W: Write>(out: &mut W, key: &RsaPublicKey) -> Result<()> {
    let pem = encode_public_key(key)?;
    out.write_all(&pem)
        .map_err(|e| Error::io("write_public_key", e))
}

/// Generate a fresh key pair and write each half to its writer.
pub fn write_key_pair<P: Write, Q: Write>(
    private_out: &mut P,
    public_out: &mut Q,
) -> Result<(RsaPrivateKey, RsaPublicKey)> {
    let (private_key, public_key) = generate_key_pair()?;
    write_private_key(private_out, &private_key)?;
    write_public_key(public_out, &public_key)?;
    Ok((private_key, public_key))
}

/// Create `<path>` and `<path>.pub` holding a newly generated key pair.
///
/// Neither file may exist beforehand. Both paths are checked before anything
/// is created, and files are opened with exclusive create, so an existing key
/// is never overwritten. If generation or writing fails, the files created by
/// this call are removed again.
///
/// # Errors
///
/// [`Error::AlreadyExists`] if either file is present, [`Error::Io`] if a
/// file can't be created or written, [`Error::Generation`] if key generation
/// fails.
pub fn create_key_pair_files(path: impl AsRef<Path>) -> Result<KeyPairPaths> {
    let paths = KeyPairPaths::from_private(path);

    for existing in [&paths.private_key, &paths.public_key] {
        if existing.exists() {
            return Err(Error::AlreadyExists {
                path: existing.clone(),
            });
        }
    }

    let mut private_file = create_exclusive(&paths.private_key, true)?;
    let mut public_file = match create_exclusive(&paths.public_key, false) {
        Ok(file) => file,
        Err(e) => {
            drop(private_file);
            remove_partial(&paths.private_key);
            return Err(e);
        }
    };

    let result = write_key_pair(&mut private_file, &mut public_file).and_then(|_| {
        private_file
            .sync_all()
            .and_then(|_| public_file.sync_all())
            .map_err(|e| Error::io("create_key_pair_files", e))
    });
    drop(private_file);
    drop(public_file);

    if let Err(e) = result {
        remove_partial(&paths.private_key);
        remove_partial(&paths.public_key);
        return Err(e);
    }

    tracing::info!(
        private_key = %paths.private_key.display(),
        public_key = %paths.public_key.display(),
        "created key pair files"
    );
    Ok(paths)
}

fn create_exclusive(path: &Path, private: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    if private {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    #[cfg(not(unix))]
    let _ = private;

    options.open(path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => Error::AlreadyExists {
            path: path.to_path_buf(),
        },
        _ => Error::io("create_key_pair_files", e),
    })
}

fn remove_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "failed to remove partial key file");
    }
}
