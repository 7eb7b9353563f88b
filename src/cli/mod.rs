pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Sign your releases. Verify your updates. Trust what you install.
#[derive(Parser, Debug)]
#[command(name = "signet", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to an alternative trust configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new Ed25519 signing keypair
    Keygen {
        /// File to write the raw public key to
        public_key_out: String,
        /// File to write the raw private key to
        private_key_out: String,
    },

    /// Print the version declared in a package header
    Showversion {
        /// Signed package file
        file: String,
    },

    /// Sign a payload into an update package
    Sign {
        /// Payload file to sign
        input: String,
        /// Signed package file to write
        output: String,
        /// File holding the raw private key
        private_key_file: String,
        /// Version to declare in the header (at most 16 bytes)
        version: String,
    },

    /// Check a package signature against the trust store
    Verifysig {
        /// Signed package file
        file: String,
    },

    /// Check whether a package is newer than the current version
    Verifyupdate {
        /// Signed package file
        file: String,
        /// Version to compare against (default: this binary's version)
        #[arg(long)]
        current: Option<String>,
    },

    /// Check that the header version matches the payload's embedded version
    Verifyversion {
        /// Signed package file
        file: String,
    },

    /// Authenticate a package and extract its payload
    Extract {
        /// Signed package file
        file: String,
        /// File to write the payload to
        output: String,
        /// Version to compare against (default: this binary's version)
        #[arg(long)]
        current: Option<String>,
        /// Skip all checks and just strip the header
        #[arg(long)]
        unchecked: bool,
    },

    /// Inspect or extend the trusted key set
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum KeysAction {
    /// List the keys this instance trusts
    List,
    /// Add a trusted key and persist it to the configuration file
    Add {
        /// Base64-encoded public key
        key: String,
        /// Display name for the signer
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Print the trusted keys as bare base64, one per line
    Export,
}
