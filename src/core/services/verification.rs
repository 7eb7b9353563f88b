use std::path::Path;

use crate::core::models::package::SIGNATURE_BYTES;
use crate::core::services::package_codec;
use crate::core::services::trust_store::TrustStore;
use crate::core::traits::signature::SignatureBackend;

/// Checks package signatures against a trust store.
///
/// Every failure mode (unreadable file, truncated header, no matching
/// key) comes back as a plain "not verified". Nothing here panics or
/// propagates an error on attacker-controlled input.
pub struct VerificationEngine<'a, B: SignatureBackend> {
    backend: &'a B,
}

impl<'a, B: SignatureBackend> VerificationEngine<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Does any trusted key verify this package's signature?
    pub fn verify(&self, path: &Path, store: &TrustStore) -> bool {
        self.verify_and_identify(path, store).is_some()
    }

    /// As `verify`, but reports who signed it: the name bound to the
    /// first matching key (empty for an unnamed key), or `None` when
    /// no key matches.
    ///
    /// The signed message is everything after the signature, i.e.
    /// `versionField ‖ payload`, so the header version is covered.
    pub fn verify_and_identify(&self, path: &Path, store: &TrustStore) -> Option<String> {
        let bytes = std::fs::read(path).ok()?;
        let header = package_codec::decode_header(bytes.as_slice(), path).ok()?;
        let message = &bytes[SIGNATURE_BYTES..];

        let matched = store
            .iter()
            .find(|entry| self.backend.verify(message, &header.signature, &entry.public_key))?;
        store.resolve_signer(&matched.public_key).map(str::to_string)
    }
}
