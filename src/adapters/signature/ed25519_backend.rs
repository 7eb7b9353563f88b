use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;

use crate::core::errors::{Result, SignetError};
use crate::core::models::package::{PRIVATE_KEY_BYTES, PUBLIC_KEY_BYTES, SIGNATURE_BYTES};

/// Ed25519 implementation of the signature port, via `ed25519-dalek`.
///
/// Keys are raw: a 32-byte seed for signing, a 32-byte compressed
/// point for verification. Signatures are 64 bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519Backend;

impl Ed25519Backend {
    pub fn new() -> Self {
        Self
    }
}

impl crate::core::traits::signature::SignatureBackend for Ed25519Backend {
    fn sign(&self, message: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        let seed: [u8; PRIVATE_KEY_BYTES] =
            private_key
                .try_into()
                .map_err(|_| SignetError::SigningFailed {
                    reason: format!(
                        "private key must be {PRIVATE_KEY_BYTES} bytes, got {}",
                        private_key.len()
                    ),
                })?;
        let signing_key = SigningKey::from_bytes(&seed);
        let signature = signing_key.sign(message);
        debug_assert_eq!(signature.to_bytes().len(), SIGNATURE_BYTES);
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(
        &self,
        message: &[u8],
        signature: &[u8],
        public_key: &[u8; PUBLIC_KEY_BYTES],
    ) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
            return false;
        };
        let Ok(sig_bytes) = <[u8; SIGNATURE_BYTES]>::try_from(signature) else {
            return false;
        };
        let signature = Signature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &signature).is_ok()
    }

    fn generate_keypair(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let signing_key = SigningKey::generate(&mut OsRng);
        let public = signing_key.verifying_key().to_bytes().to_vec();
        let private = signing_key.to_bytes().to_vec();
        Ok((public, private))
    }

    fn name(&self) -> &str {
        "ed25519"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::signature::SignatureBackend;

    #[test]
    fn sign_verify_round_trip() {
        let backend = Ed25519Backend::new();
        let (public, private) = backend.generate_keypair().unwrap();
        let public: [u8; PUBLIC_KEY_BYTES] = public.as_slice().try_into().unwrap();

        let signature = backend.sign(b"update bytes", &private).unwrap();
        assert_eq!(signature.len(), SIGNATURE_BYTES);
        assert!(backend.verify(b"update bytes", &signature, &public));
    }

    #[test]
    fn flipped_message_byte_fails_verification() {
        let backend = Ed25519Backend::new();
        let (public, private) = backend.generate_keypair().unwrap();
        let public: [u8; PUBLIC_KEY_BYTES] = public.as_slice().try_into().unwrap();

        let signature = backend.sign(b"update bytes", &private).unwrap();
        assert!(!backend.verify(b"Update bytes", &signature, &public));
    }

    #[test]
    fn flipped_signature_byte_fails_verification() {
        let backend = Ed25519Backend::new();
        let (public, private) = backend.generate_keypair().unwrap();
        let public: [u8; PUBLIC_KEY_BYTES] = public.as_slice().try_into().unwrap();

        let mut signature = backend.sign(b"update bytes", &private).unwrap();
        signature[10] ^= 0x01;
        assert!(!backend.verify(b"update bytes", &signature, &public));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let backend = Ed25519Backend::new();
        let (_, private) = backend.generate_keypair().unwrap();
        let (other_public, _) = backend.generate_keypair().unwrap();
        let other_public: [u8; PUBLIC_KEY_BYTES] =
            other_public.as_slice().try_into().unwrap();

        let signature = backend.sign(b"update bytes", &private).unwrap();
        assert!(!backend.verify(b"update bytes", &signature, &other_public));
    }

    #[test]
    fn garbage_signature_is_rejected_not_fatal() {
        let backend = Ed25519Backend::new();
        let (public, _) = backend.generate_keypair().unwrap();
        let public: [u8; PUBLIC_KEY_BYTES] = public.as_slice().try_into().unwrap();

        assert!(!backend.verify(b"m", b"too short", &public));
        assert!(!backend.verify(b"m", &[0u8; SIGNATURE_BYTES], &public));
    }
}
