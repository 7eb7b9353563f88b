use std::path::Path;

use sha2::{Digest, Sha256};

use crate::cli::output;
use crate::cli::KeysAction;
use crate::config::app_config::{AppConfig, KeyEntry, TrustSection, DEFAULT_CONFIG_FILE};
use crate::core::errors::Result;

/// Execute the `signet keys` command.
pub fn execute(action: &KeysAction, config_path: Option<&str>) -> Result<()> {
    match action {
        KeysAction::List => execute_list(config_path),
        KeysAction::Add { key, name } => execute_add(key, name, config_path),
        KeysAction::Export => execute_export(config_path),
    }
}

/// Short SHA-256 fingerprint of a raw public key, for eyeballing.
fn fingerprint(public_key: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(public_key);
    let digest = format!("{:x}", hasher.finalize());
    digest[..16].to_string()
}

/// List the effective trust store: configured keys, or the environment
/// list, or the built-in release keys.
fn execute_list(config_path: Option<&str>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = super::load_trust_store(&config);

    if store.is_empty() {
        output::warning("No trusted keys configured.");
        output::note("Run 'signet keys add <public-key>' to add one.");
        return Ok(());
    }

    output::header(&format!("Trusted keys ({})", store.len()));
    for entry in store.iter() {
        println!("  • {entry}  [sha256:{}]", fingerprint(&entry.public_key));
    }
    Ok(())
}

/// Bare base64 keys, one per line, ready for `SIGNET_TRUSTED_KEYS`.
fn execute_export(config_path: Option<&str>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = super::load_trust_store(&config);

    for key in store.export_keys() {
        println!("{key}");
    }
    Ok(())
}

/// Add a key to the trust store and persist the result.
///
/// The key is validated against the live store first, so every
/// registry invariant (encoding, key uniqueness, name uniqueness)
/// applies before anything is written. The saved file carries the full
/// effective key list, which makes the trust set stable even when it
/// previously came from the environment or the built-in defaults.
fn execute_add(key: &str, name: &str, config_path: Option<&str>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let mut store = super::load_trust_store(&config);

    let already_trusted = store.has_key(key);
    store.add_key(key, name)?;

    let updated = AppConfig {
        trust: TrustSection {
            keys: store
                .iter()
                .map(|entry| KeyEntry {
                    key: entry.encoded(),
                    name: entry.name.clone(),
                })
                .collect(),
        },
    };

    let path = config_path.map_or_else(|| Path::new(DEFAULT_CONFIG_FILE), Path::new);
    updated.save(path)?;

    if already_trusted {
        output::success("Key already trusted, configuration refreshed");
    } else if name.is_empty() {
        output::success("Added trusted key");
    } else {
        output::success(&format!("Added trusted key for {name}"));
    }
    output::note(&format!("Trust list saved to {}", path.display()));
    Ok(())
}
