pub mod extract;
pub mod keygen;
pub mod keys;
pub mod showversion;
pub mod sign;
pub mod verifysig;
pub mod verifyupdate;
pub mod verifyversion;

use std::path::Path;

use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::trust_store::TrustStore;

/// Build the effective trust store for this invocation.
///
/// Entries that fail to register (malformed encoding, key or name
/// conflict) are warned about individually and skipped; one bad entry
/// never takes the whole store down.
pub fn load_trust_store(config: &AppConfig) -> TrustStore {
    let mut store = TrustStore::new();
    for (key, name) in config.trusted_key_sources() {
        if let Err(e) = store.add_key(&key, &name) {
            let first_line = e.to_string().lines().next().unwrap_or_default().to_string();
            output::warning(&format!("Skipping trusted key entry: {first_line}"));
        }
    }
    store
}

/// Load the configuration named on the command line, or the default.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    AppConfig::load(config_path.map(Path::new))
}
