use std::path::Path;

use crate::adapters::archive::zip_comment::ZipCommentReader;
use crate::adapters::signature::ed25519_backend::Ed25519Backend;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::authenticator::UpdateAuthenticator;

/// Execute the `signet extract` command.
///
/// The full pipeline: the package must exist, declare a version, be
/// newer than `--current` (default: this binary's version), carry a
/// payload whose embedded version matches the header, and verify
/// against a trusted key. Only then is the payload written out.
/// `--unchecked` skips all of that and just strips the header.
pub fn execute(
    file: &str,
    output_file: &str,
    current: Option<&str>,
    unchecked: bool,
    config_path: Option<&str>,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = super::load_trust_store(&config);

    let backend = Ed25519Backend::new();
    let comments = ZipCommentReader::new();
    let authenticator = UpdateAuthenticator::new(&store, &backend, &comments);

    let source = Path::new(file);
    let dest = Path::new(output_file);

    if unchecked {
        authenticator.extract_unchecked(source, dest)?;
        output::warning("Extracted WITHOUT verification (--unchecked)");
        output::success(&format!("Payload written to '{output_file}'"));
        return Ok(());
    }

    let current = current.unwrap_or(env!("CARGO_PKG_VERSION"));
    let update = authenticator.authenticate_and_extract(current, source, dest)?;

    if update.signer.is_empty() {
        output::success(&format!(
            "Authenticated update {} (unnamed trusted key)",
            update.version
        ));
    } else {
        output::success(&format!(
            "Authenticated update {} signed by {}",
            update.version, update.signer
        ));
    }
    output::success(&format!("Payload written to '{output_file}'"));
    Ok(())
}
