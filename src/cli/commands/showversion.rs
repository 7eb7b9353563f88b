use std::path::Path;

use crate::cli::output;
use crate::core::errors::{Result, SignetError};
use crate::core::models::package::HEADER_BYTES;
use crate::core::services::package_codec;

/// Execute the `signet showversion` command.
pub fn execute(file: &str) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(SignetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let version = package_codec::read_version_from_file(path);
    if version.is_empty() {
        return Err(SignetError::Truncated {
            path: path.to_path_buf(),
            header_bytes: HEADER_BYTES,
        });
    }

    output::success(&format!("Version: {version}"));
    Ok(())
}
