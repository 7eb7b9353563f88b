use std::path::Path;

use crate::adapters::signature::ed25519_backend::Ed25519Backend;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::package::VERSION_BYTES;
use crate::core::services::signing::SigningEngine;
use crate::core::traits::signature::SignatureBackend;

/// Execute the `signet sign` command.
pub fn execute(input: &str, output_file: &str, private_key_file: &str, version: &str) -> Result<()> {
    let backend = Ed25519Backend::new();
    let engine = SigningEngine::new(&backend);

    if version.len() > VERSION_BYTES {
        output::warning(&format!(
            "Version '{version}' is longer than {VERSION_BYTES} bytes and will be truncated"
        ));
    }

    engine.sign_file(
        Path::new(input),
        Path::new(output_file),
        Path::new(private_key_file),
        version,
    )?;

    output::success(&format!(
        "Signed '{input}' with {} and wrote '{output_file}'",
        backend.name()
    ));
    Ok(())
}
