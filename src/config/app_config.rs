use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SignetError};

/// Environment variable holding trusted keys as base64 strings
/// delimited by spaces, commas, or newlines. Used when no
/// configuration file is present; keys from it are unnamed.
pub const TRUSTED_KEYS_ENV: &str = "SIGNET_TRUSTED_KEYS";

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "signet.toml";

/// Release keys built into the binary, used when neither a
/// configuration file nor the environment supplies any.
///
/// These are the keys the project's own releases are signed with.
/// Downstream deployments that sign their own packages replace the
/// trust list via `signet.toml` or `SIGNET_TRUSTED_KEYS`, which
/// override these entirely.
pub const DEFAULT_TRUSTED_KEYS: &[(&str, &str)] = &[
    (
        "eKvUB/TiSll8doOtkqR3YYD/pG9cJr9FxCOXHH8oVOs=",
        "releases@signet.dev",
    ),
    (
        "JHAsj/pBpZNG7AwRuq3rYsDPlut8mj/FOJ8Zp5EVwWA=",
        "backup-signer@signet.dev",
    ),
];

/// Top-level Signet configuration read from `signet.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub trust: TrustSection,
}

/// The `[trust]` section: the keys this instance accepts signatures from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrustSection {
    #[serde(default)]
    pub keys: Vec<KeyEntry>,
}

/// One trusted key in the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyEntry {
    /// Base64-encoded 32-byte Ed25519 public key.
    pub key: String,
    /// Display name of the signer; empty means unnamed.
    #[serde(default)]
    pub name: String,
}

impl AppConfig {
    /// Load configuration from `path`, or from `signet.toml` in the
    /// working directory when no path is given.
    ///
    /// An explicitly named file must exist; the default file is
    /// optional and its absence yields an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Path::new(DEFAULT_CONFIG_FILE).to_path_buf(), false),
        };

        if !config_path.exists() {
            if required {
                return Err(SignetError::FileNotFound { path: config_path });
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        toml::from_str(&content).map_err(|e| SignetError::InvalidConfig {
            detail: format!("failed to parse {}: {e}", config_path.display()),
        })
    }

    /// Write the configuration back to `path` as TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| SignetError::InvalidConfig {
            detail: format!("failed to serialize configuration: {e}"),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The `(key, name)` pairs to seed the trust store from.
    ///
    /// First source wins: configured keys, then the environment
    /// variable, then the built-in release keys. Configured or
    /// environment keys replace the defaults entirely, they do not
    /// extend them.
    pub fn trusted_key_sources(&self) -> Vec<(String, String)> {
        if !self.trust.keys.is_empty() {
            return self
                .trust
                .keys
                .iter()
                .map(|e| (e.key.clone(), e.name.clone()))
                .collect();
        }

        if let Ok(raw) = std::env::var(TRUSTED_KEYS_ENV) {
            let keys: Vec<(String, String)> = raw
                .split([' ', ',', '\n', '\r'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|key| (key.to_string(), String::new()))
                .collect();
            if !keys.is_empty() {
                return keys;
            }
        }

        DEFAULT_TRUSTED_KEYS
            .iter()
            .map(|(key, name)| (key.to_string(), name.to_string()))
            .collect()
    }
}
