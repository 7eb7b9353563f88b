use std::path::Path;

use crate::adapters::archive::zip_comment::ZipCommentReader;
use crate::adapters::signature::ed25519_backend::Ed25519Backend;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::authenticator::UpdateAuthenticator;

/// Execute the `signet verifysig` command.
///
/// Signature check only: no freshness comparison, no binding check.
pub fn execute(file: &str, config_path: Option<&str>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = super::load_trust_store(&config);

    let backend = Ed25519Backend::new();
    let comments = ZipCommentReader::new();
    let authenticator = UpdateAuthenticator::new(&store, &backend, &comments);

    authenticator.verify_only(Path::new(file), false)?;
    output::success("Signature VALID");
    Ok(())
}
