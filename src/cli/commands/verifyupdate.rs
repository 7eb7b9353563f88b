use std::path::Path;

use crate::cli::output;
use crate::core::errors::{Result, SignetError};
use crate::core::models::package::HEADER_BYTES;
use crate::core::services::{package_codec, version_gate};

/// Execute the `signet verifyupdate` command.
///
/// Freshness only: is the package's header version strictly newer than
/// the current one? Defaults to this binary's own version, the way a
/// self-updating host would call it.
pub fn execute(file: &str, current: Option<&str>) -> Result<()> {
    let current = current.unwrap_or(env!("CARGO_PKG_VERSION"));

    let path = Path::new(file);
    if !path.exists() {
        return Err(SignetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let candidate = package_codec::read_version_from_file(path);
    if candidate.is_empty() {
        return Err(SignetError::Truncated {
            path: path.to_path_buf(),
            header_bytes: HEADER_BYTES,
        });
    }

    if !version_gate::is_newer(current, &candidate) {
        return Err(SignetError::NotNewerVersion {
            current: current.to_string(),
            candidate,
        });
    }

    output::success(&format!(
        "Package version {candidate} is newer than current version {current}"
    ));
    Ok(())
}
