use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::errors::{Result, SignetError};
use crate::core::models::package::{
    PackageHeader, HEADER_BYTES, SIGNATURE_BYTES, VERSION_BYTES,
};

/// Build the fixed-width version field: the version truncated to at
/// most 16 bytes (at a char boundary, so the field stays valid UTF-8)
/// and zero-padded to full width.
pub fn encode_version_field(version: &str) -> [u8; VERSION_BYTES] {
    let mut end = version.len().min(VERSION_BYTES);
    while !version.is_char_boundary(end) {
        end -= 1;
    }
    let mut field = [0u8; VERSION_BYTES];
    field[..end].copy_from_slice(&version.as_bytes()[..end]);
    field
}

/// Assemble a signed package: `signature ‖ versionField ‖ payload`.
///
/// The signature is computed over `versionField ‖ payload`, so the
/// header version is covered by the signature along with the payload.
pub fn encode(
    payload: &[u8],
    version: &str,
    sign: impl FnOnce(&[u8]) -> Result<Vec<u8>>,
) -> Result<Vec<u8>> {
    let version_field = encode_version_field(version);

    let mut to_sign = Vec::with_capacity(VERSION_BYTES + payload.len());
    to_sign.extend_from_slice(&version_field);
    to_sign.extend_from_slice(payload);

    let signature = sign(&to_sign)?;
    if signature.len() != SIGNATURE_BYTES {
        return Err(SignetError::SigningFailed {
            reason: format!(
                "backend produced a {}-byte signature, format requires {SIGNATURE_BYTES}",
                signature.len()
            ),
        });
    }

    let mut package = Vec::with_capacity(HEADER_BYTES + payload.len());
    package.extend_from_slice(&signature);
    package.extend_from_slice(&to_sign);
    Ok(package)
}

/// Read the fixed header from the front of a package.
///
/// Anything shorter than `HEADER_BYTES` is a truncation error, surfaced
/// as such rather than as a short read somewhere downstream.
pub fn decode_header(mut reader: impl Read, path: &Path) -> Result<PackageHeader> {
    let mut signature = [0u8; SIGNATURE_BYTES];
    let mut version_field = [0u8; VERSION_BYTES];

    let truncated = |_| SignetError::Truncated {
        path: path.to_path_buf(),
        header_bytes: HEADER_BYTES,
    };
    reader.read_exact(&mut signature).map_err(truncated)?;
    reader.read_exact(&mut version_field).map_err(truncated)?;

    Ok(PackageHeader {
        signature,
        version_field,
    })
}

/// Read the version string from a package's header.
///
/// Returns the empty string on any failure: a missing file, a
/// truncated header, anything. Callers treat "" as "no version
/// present".
pub fn read_version_string(mut reader: impl Read) -> String {
    let mut header = PackageHeader {
        signature: [0u8; SIGNATURE_BYTES],
        version_field: [0u8; VERSION_BYTES],
    };
    if reader.read_exact(&mut header.signature).is_err() {
        return String::new();
    }
    if reader.read_exact(&mut header.version_field).is_err() {
        return String::new();
    }
    header.version()
}

/// `read_version_string` for a file on disk.
pub fn read_version_from_file(path: &Path) -> String {
    match File::open(path) {
        Ok(file) => read_version_string(file),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fake_sign(message: &[u8]) -> Result<Vec<u8>> {
        // Deterministic stand-in: first byte of the message repeated.
        let fill = message.first().copied().unwrap_or(0);
        Ok(vec![fill; SIGNATURE_BYTES])
    }

    #[test]
    fn encode_lays_out_signature_version_payload() {
        let package = encode(b"payload", "1.2.3", fake_sign).unwrap();

        assert_eq!(package.len(), HEADER_BYTES + 7);
        assert_eq!(&package[..SIGNATURE_BYTES], &[b'1'; SIGNATURE_BYTES][..]);
        assert_eq!(&package[SIGNATURE_BYTES..SIGNATURE_BYTES + 5], b"1.2.3");
        assert_eq!(&package[SIGNATURE_BYTES + 5..HEADER_BYTES], &[0u8; 11][..]);
        assert_eq!(&package[HEADER_BYTES..], b"payload");
    }

    #[test]
    fn version_longer_than_field_is_truncated() {
        let field = encode_version_field("1.2.3-withextras999");
        assert_eq!(&field, b"1.2.3-withextras");

        let package = encode(b"x", "1.2.3-withextras999", fake_sign).unwrap();
        let version = read_version_string(Cursor::new(&package));
        assert_eq!(version, "1.2.3-withextras");
    }

    #[test]
    fn multibyte_version_truncates_at_char_boundary() {
        // 15 ASCII bytes followed by a 2-byte char: must not split it.
        let field = encode_version_field("123456789012345é");
        assert_eq!(&field[..15], b"123456789012345");
        assert_eq!(field[15], 0);
    }

    #[test]
    fn embedded_nul_truncates_on_decode() {
        let package = encode(b"x", "1.0\0ignored", fake_sign).unwrap();
        assert_eq!(read_version_string(Cursor::new(&package)), "1.0");
    }

    #[test]
    fn decode_header_round_trips() {
        let package = encode(b"data", "2.0", fake_sign).unwrap();
        let header = decode_header(Cursor::new(&package), Path::new("pkg")).unwrap();

        assert_eq!(header.signature, [b'2'; SIGNATURE_BYTES]);
        assert_eq!(header.version(), "2.0");
    }

    #[test]
    fn short_input_is_a_truncation_error() {
        let result = decode_header(Cursor::new(vec![0u8; HEADER_BYTES - 1]), Path::new("pkg"));
        assert!(matches!(result, Err(SignetError::Truncated { .. })));
    }

    #[test]
    fn short_input_reads_as_no_version() {
        assert_eq!(read_version_string(Cursor::new(vec![0u8; 10])), "");
        assert_eq!(
            read_version_string(Cursor::new(vec![0u8; SIGNATURE_BYTES + 3])),
            ""
        );
    }

    #[test]
    fn missing_file_reads_as_no_version() {
        assert_eq!(read_version_from_file(Path::new("/no/such/file.sud")), "");
    }

    #[test]
    fn wrong_signature_length_is_rejected() {
        let result = encode(b"x", "1.0", |_| Ok(vec![0u8; 40]));
        assert!(matches!(result, Err(SignetError::SigningFailed { .. })));
    }
}
