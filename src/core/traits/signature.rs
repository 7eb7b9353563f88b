use crate::core::errors::Result;
use crate::core::models::package::PUBLIC_KEY_BYTES;

/// Port for the signature algorithm.
///
/// The implementation lives in `adapters::signature` (Ed25519Backend).
/// The core layer only depends on this trait, never on a concrete
/// algorithm, so the framing and trust logic stay algorithm-agnostic.
pub trait SignatureBackend: Send + Sync {
    /// Sign `message` with a raw private key, returning the signature
    /// bytes. The length of the result is fixed per algorithm.
    fn sign(&self, message: &[u8], private_key: &[u8]) -> Result<Vec<u8>>;

    /// Check `signature` over `message` under one public key.
    /// Malformed input of any kind is a failed verification, not an error.
    fn verify(
        &self,
        message: &[u8],
        signature: &[u8],
        public_key: &[u8; PUBLIC_KEY_BYTES],
    ) -> bool;

    /// Generate a fresh keypair as `(public, private)` raw bytes.
    fn generate_keypair(&self) -> Result<(Vec<u8>, Vec<u8>)>;

    /// Human-readable name of this backend (e.g. "ed25519").
    fn name(&self) -> &str;
}
