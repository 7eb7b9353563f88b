use std::fs::File;
use std::io::{self, Seek, SeekFrom};
use std::path::Path;

use crate::core::errors::{Result, SignetError};
use crate::core::models::package::HEADER_BYTES;
use crate::core::services::trust_store::TrustStore;
use crate::core::services::verification::VerificationEngine;
use crate::core::services::version_gate::{self, VersionGate};
use crate::core::traits::archive::CommentReader;
use crate::core::traits::signature::SignatureBackend;

/// What a successful authentication learned about the package.
#[derive(Debug, Clone)]
pub struct AuthenticatedUpdate {
    /// Version declared in the signed header.
    pub version: String,
    /// Name bound to the matching trusted key; empty for an unnamed key.
    pub signer: String,
}

/// Top-level orchestrator: decides whether a file is a genuine, newer,
/// internally consistent update, and extracts the payload only when
/// every check passes.
pub struct UpdateAuthenticator<'a, B: SignatureBackend, C: CommentReader> {
    trust: &'a TrustStore,
    verifier: VerificationEngine<'a, B>,
    gate: VersionGate<'a, C>,
}

impl<'a, B: SignatureBackend, C: CommentReader> UpdateAuthenticator<'a, B, C> {
    pub fn new(trust: &'a TrustStore, backend: &'a B, comments: &'a C) -> Self {
        Self {
            trust,
            verifier: VerificationEngine::new(backend),
            gate: VersionGate::new(comments),
        }
    }

    /// Run the full pipeline and copy the payload to `dest`.
    ///
    /// Checks run in a fixed order, cheapest first, and every failure
    /// is terminal: existence, header version present, strictly newer
    /// than `current_version`, header matches the payload's embedded
    /// version, signature matches a trusted key, then the copy. Only
    /// the copy step creates `dest`; a copy failure may leave a partial
    /// file there, which the caller should discard.
    pub fn authenticate_and_extract(
        &self,
        current_version: &str,
        source: &Path,
        dest: &Path,
    ) -> Result<AuthenticatedUpdate> {
        if !source.exists() {
            return Err(SignetError::FileNotFound {
                path: source.to_path_buf(),
            });
        }

        let version = self.gate.extract_version(source);
        if version.is_empty() {
            return Err(SignetError::Truncated {
                path: source.to_path_buf(),
                header_bytes: HEADER_BYTES,
            });
        }

        if !version_gate::is_newer(current_version, &version) {
            return Err(SignetError::NotNewerVersion {
                current: current_version.to_string(),
                candidate: version,
            });
        }

        if !self.gate.check_version_binding(source, &version) {
            return Err(self.binding_mismatch(source, version));
        }

        let signer = self
            .verifier
            .verify_and_identify(source, self.trust)
            .ok_or(SignetError::UntrustedSigner)?;

        copy_payload(source, dest)?;
        Ok(AuthenticatedUpdate { version, signer })
    }

    /// Signature-only check (optionally with the binding cross-check),
    /// for tooling that wants a yes/no answer without a freshness
    /// comparison.
    pub fn verify_only(&self, source: &Path, check_binding: bool) -> Result<()> {
        if !source.exists() {
            return Err(SignetError::FileNotFound {
                path: source.to_path_buf(),
            });
        }

        if check_binding {
            let version = self.gate.extract_version(source);
            if version.is_empty() {
                return Err(SignetError::Truncated {
                    path: source.to_path_buf(),
                    header_bytes: HEADER_BYTES,
                });
            }
            if !self.gate.check_version_binding(source, &version) {
                return Err(self.binding_mismatch(source, version));
            }
        }

        if !self.verifier.verify(source, self.trust) {
            return Err(SignetError::UntrustedSigner);
        }
        Ok(())
    }

    fn binding_mismatch(&self, source: &Path, header_version: String) -> SignetError {
        let embedded = self
            .gate
            .embedded_version(source)
            .unwrap_or_else(|| "<unreadable>".to_string());
        SignetError::VersionBindingMismatch {
            header: header_version,
            embedded,
        }
    }

    /// Skip the header and copy the payload with no verification at
    /// all. For tooling that has already authenticated the file, or
    /// explicitly wants the raw payload.
    pub fn extract_unchecked(&self, source: &Path, dest: &Path) -> Result<()> {
        if !source.exists() {
            return Err(SignetError::FileNotFound {
                path: source.to_path_buf(),
            });
        }
        copy_payload(source, dest)
    }
}

/// Copy everything after the fixed header from `source` to `dest`.
fn copy_payload(source: &Path, dest: &Path) -> Result<()> {
    let copy = || -> io::Result<()> {
        let mut input = File::open(source)?;
        input.seek(SeekFrom::Start(HEADER_BYTES as u64))?;
        let mut output = File::create(dest)?;
        io::copy(&mut input, &mut output)?;
        output.sync_all()
    };
    copy().map_err(|e| SignetError::CopyFailed {
        reason: e.to_string(),
    })
}
