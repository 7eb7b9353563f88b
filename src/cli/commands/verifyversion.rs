use std::path::Path;

use crate::adapters::archive::zip_comment::ZipCommentReader;
use crate::cli::output;
use crate::core::errors::{Result, SignetError};
use crate::core::models::package::HEADER_BYTES;
use crate::core::services::version_gate::VersionGate;

/// Execute the `signet verifyversion` command.
///
/// Binding only: does the version in the signed header match the
/// version the payload archive embeds in its own comment?
pub fn execute(file: &str) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(SignetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let comments = ZipCommentReader::new();
    let gate = VersionGate::new(&comments);

    let header = gate.extract_version(path);
    if header.is_empty() {
        return Err(SignetError::Truncated {
            path: path.to_path_buf(),
            header_bytes: HEADER_BYTES,
        });
    }

    if !gate.check_version_binding(path, &header) {
        let embedded = gate
            .embedded_version(path)
            .unwrap_or_else(|| "<unreadable>".to_string());
        return Err(SignetError::VersionBindingMismatch { header, embedded });
    }

    output::success(&format!(
        "Version verified: header and payload both say {header}"
    ));
    Ok(())
}
