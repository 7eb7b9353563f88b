use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::adapters::signature::ed25519_backend::Ed25519Backend;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::traits::signature::SignatureBackend;

/// Execute the `signet keygen` command.
///
/// Writes both halves of a fresh keypair as raw bytes and prints the
/// base64 public key for distribution.
pub fn execute(public_key_out: &str, private_key_out: &str) -> Result<()> {
    let backend = Ed25519Backend::new();
    let (public, private) = backend.generate_keypair()?;

    std::fs::write(private_key_out, &private)?;
    std::fs::write(public_key_out, &public)?;

    output::success(&format!("Private key written to: {private_key_out}"));
    output::success(&format!("Public key written to: {public_key_out}"));
    println!();
    output::note(&format!("Public key (base64): {}", BASE64.encode(&public)));
    output::note("Verifiers trust it with: signet keys add <public-key> --name <signer>");
    Ok(())
}
