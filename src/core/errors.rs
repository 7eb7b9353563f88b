use std::path::PathBuf;

/// All domain errors for Signet.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum SignetError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Truncated or corrupt package: {path}\n\n  \
         A signed package starts with a {header_bytes}-byte header \
         (signature + version field).\n  \
         This file is shorter than that. Re-download it and try again."
    )]
    Truncated { path: PathBuf, header_bytes: usize },

    #[error(
        "Invalid public key encoding: {detail}\n\n  \
         Trusted keys are base64-encoded 32-byte Ed25519 public keys."
    )]
    MalformedKey { detail: String },

    #[error("Key conflict: {detail}")]
    DuplicateKey { detail: String },

    #[error(
        "Unknown signing key or corrupt file\n\n  \
         The package signature does not match any trusted key.\n\n  \
         Solutions:\n    \
         → Check 'signet keys list' for the keys this instance trusts\n    \
         → Add the publisher's key: signet keys add <public-key>\n    \
         → If the key is already trusted, the download is corrupt or tampered with"
    )]
    UntrustedSigner,

    #[error(
        "Package version {candidate} is not newer than current version {current}\n\n  \
         Nothing to do — you already run this version or a later one."
    )]
    NotNewerVersion { current: String, candidate: String },

    #[error(
        "Version mismatch: header says {header}, payload says {embedded}\n\n  \
         The version in the signed header does not match the version embedded\n  \
         in the payload archive. The package was built from inconsistent\n  \
         sources or has been tampered with. It was NOT installed."
    )]
    VersionBindingMismatch { header: String, embedded: String },

    #[error("Unreadable payload metadata: {detail}")]
    PayloadUnreadable { detail: String },

    #[error("Signing failed: {reason}")]
    SigningFailed { reason: String },

    #[error(
        "Error copying payload: {reason}\n\n  \
         The destination file may be incomplete and should be discarded.\n  \
         Check disk space and permissions, then try again."
    )]
    CopyFailed { reason: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SignetError>;
