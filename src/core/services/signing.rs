use std::path::Path;

use crate::core::errors::{Result, SignetError};
use crate::core::models::package::PRIVATE_KEY_BYTES;
use crate::core::services::package_codec;
use crate::core::traits::signature::SignatureBackend;

/// Produces signed packages through a `SignatureBackend`.
pub struct SigningEngine<'a, B: SignatureBackend> {
    backend: &'a B,
}

impl<'a, B: SignatureBackend> SigningEngine<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Sign `payload` under `version`, returning the complete package.
    pub fn sign_bytes(
        &self,
        payload: &[u8],
        private_key: &[u8],
        version: &str,
    ) -> Result<Vec<u8>> {
        package_codec::encode(payload, version, |message| {
            self.backend.sign(message, private_key)
        })
    }

    /// Sign the file at `input` and write the signed package to `output`.
    ///
    /// The key file holds a raw 32-byte private seed; a 64-byte expanded
    /// key is accepted too, in which case only the seed half is used.
    pub fn sign_file(
        &self,
        input: &Path,
        output: &Path,
        private_key_file: &Path,
        version: &str,
    ) -> Result<()> {
        let private_key = load_private_key(private_key_file)?;
        let payload = std::fs::read(input).map_err(|_| SignetError::FileNotFound {
            path: input.to_path_buf(),
        })?;

        let package = self.sign_bytes(&payload, &private_key, version)?;
        std::fs::write(output, package)?;
        Ok(())
    }
}

/// Read a raw private key file, accepting a 32-byte seed or a 64-byte
/// expanded key (seed first).
fn load_private_key(path: &Path) -> Result<Vec<u8>> {
    let raw = std::fs::read(path).map_err(|_| SignetError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    if raw.len() != PRIVATE_KEY_BYTES && raw.len() != 2 * PRIVATE_KEY_BYTES {
        return Err(SignetError::SigningFailed {
            reason: format!(
                "private key file must hold {PRIVATE_KEY_BYTES} or {} bytes, got {}",
                2 * PRIVATE_KEY_BYTES,
                raw.len()
            ),
        });
    }
    Ok(raw[..PRIVATE_KEY_BYTES].to_vec())
}
