use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::core::models::package::PUBLIC_KEY_BYTES;

/// A public key this instance trusts to sign update packages,
/// bound to an optional human-readable signer name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrustedKeyEntry {
    pub public_key: [u8; PUBLIC_KEY_BYTES],
    /// Display name of the signer. Empty means "trusted but unnamed".
    pub name: String,
}

impl TrustedKeyEntry {
    /// The key as the base64 string used in configuration and output.
    pub fn encoded(&self) -> String {
        BASE64.encode(self.public_key)
    }
}

impl std::fmt::Display for TrustedKeyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.encoded())
        } else {
            write!(f, "{} ({})", self.encoded(), self.name)
        }
    }
}
