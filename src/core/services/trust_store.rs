use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::core::errors::{Result, SignetError};
use crate::core::models::package::PUBLIC_KEY_BYTES;
use crate::core::models::trusted_key::TrustedKeyEntry;

/// In-memory registry of the public keys this instance trusts.
///
/// Entries keep insertion order, so verification walks the keys in a
/// deterministic order for a given store. Mutation goes through
/// `add_key` and needs `&mut self`; everything else is read-only and
/// safe to share across threads once construction is done.
#[derive(Debug, Default)]
pub struct TrustStore {
    entries: Vec<TrustedKeyEntry>,
}

impl TrustStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base64-encoded public key under `name`.
    ///
    /// Rules, in order:
    /// - the encoding must decode to exactly 32 bytes;
    /// - re-adding a key with its current name is a no-op success;
    /// - a key that already has a non-empty name keeps it, and the add fails;
    /// - an unnamed key may acquire a name, if no other key holds that name;
    /// - a non-empty name may only ever point at one key.
    ///
    /// The last two rules are what stop a second key from impersonating
    /// an established signer name. Failures never mutate the store.
    pub fn add_key(&mut self, encoded: &str, name: &str) -> Result<()> {
        let public_key = decode_public_key(encoded)?;

        if let Some(pos) = self.position(&public_key) {
            if self.entries[pos].name == name {
                return Ok(());
            }
            if !self.entries[pos].name.is_empty() {
                return Err(SignetError::DuplicateKey {
                    detail: format!(
                        "key already trusted under the name '{}', refusing to rename it to '{}'",
                        self.entries[pos].name, name
                    ),
                });
            }
            if self.name_taken(name) {
                return Err(SignetError::DuplicateKey {
                    detail: format!(
                        "name '{name}' already belongs to a different trusted key"
                    ),
                });
            }
            self.entries[pos].name = name.to_string();
            return Ok(());
        }

        if !name.is_empty() && self.name_taken(name) {
            return Err(SignetError::DuplicateKey {
                detail: format!(
                    "name '{name}' already belongs to a different trusted key"
                ),
            });
        }

        self.entries.push(TrustedKeyEntry {
            public_key,
            name: name.to_string(),
        });
        Ok(())
    }

    /// Is this encoded key trusted? Malformed input is simply "no".
    pub fn has_key(&self, encoded: &str) -> bool {
        match decode_public_key(encoded) {
            Ok(key) => self.position(&key).is_some(),
            Err(_) => false,
        }
    }

    /// The name bound to a trusted key (possibly empty), or `None`
    /// if the key is not trusted.
    pub fn resolve_signer(&self, public_key: &[u8; PUBLIC_KEY_BYTES]) -> Option<&str> {
        self.position(public_key)
            .map(|pos| self.entries[pos].name.as_str())
    }

    /// All trusted keys as base64 strings, in insertion order.
    pub fn export_keys(&self) -> Vec<String> {
        self.entries.iter().map(TrustedKeyEntry::encoded).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrustedKeyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, public_key: &[u8; PUBLIC_KEY_BYTES]) -> Option<usize> {
        self.entries.iter().position(|e| &e.public_key == public_key)
    }

    fn name_taken(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }
}

/// Decode a base64 public key, insisting on exactly 32 raw bytes.
fn decode_public_key(encoded: &str) -> Result<[u8; PUBLIC_KEY_BYTES]> {
    let raw = BASE64
        .decode(encoded.trim())
        .map_err(|e| SignetError::MalformedKey {
            detail: format!("not valid base64: {e}"),
        })?;
    raw.as_slice()
        .try_into()
        .map_err(|_| SignetError::MalformedKey {
            detail: format!(
                "decodes to {} bytes, expected {PUBLIC_KEY_BYTES}",
                raw.len()
            ),
        })
}
