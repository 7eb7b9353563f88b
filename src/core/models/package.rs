/// Length in bytes of an Ed25519 signature at the start of a package.
pub const SIGNATURE_BYTES: usize = 64;

/// Fixed width of the UTF-8, NUL-padded version field.
pub const VERSION_BYTES: usize = 16;

/// Offset at which the payload begins. Signer and verifier must agree
/// on this constant or nothing verifies.
pub const HEADER_BYTES: usize = SIGNATURE_BYTES + VERSION_BYTES;

/// Length in bytes of a raw Ed25519 public key.
pub const PUBLIC_KEY_BYTES: usize = 32;

/// Length in bytes of a raw Ed25519 private seed.
pub const PRIVATE_KEY_BYTES: usize = 32;

/// The fixed-size header decoded from the front of a signed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageHeader {
    pub signature: [u8; SIGNATURE_BYTES],
    pub version_field: [u8; VERSION_BYTES],
}

impl PackageHeader {
    /// The version string carried in the header, truncated at the
    /// first NUL byte. Invalid UTF-8 is replaced rather than rejected;
    /// a version is display data, not a trust decision.
    pub fn version(&self) -> String {
        let end = self
            .version_field
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(VERSION_BYTES);
        String::from_utf8_lossy(&self.version_field[..end]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with_version(field: [u8; VERSION_BYTES]) -> PackageHeader {
        PackageHeader {
            signature: [0u8; SIGNATURE_BYTES],
            version_field: field,
        }
    }

    #[test]
    fn version_stops_at_first_nul() {
        let mut field = [0u8; VERSION_BYTES];
        field[..3].copy_from_slice(b"1.0");
        field[4..11].copy_from_slice(b"ignored");
        assert_eq!(header_with_version(field).version(), "1.0");
    }

    #[test]
    fn version_uses_full_field_without_nul() {
        let field = *b"10.20.30.40.50.6";
        assert_eq!(header_with_version(field).version(), "10.20.30.40.50.6");
    }

    #[test]
    fn all_zero_field_is_empty_version() {
        assert_eq!(header_with_version([0u8; VERSION_BYTES]).version(), "");
    }
}
