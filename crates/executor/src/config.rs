//! Showroom configuration via `showroom.toml`
//!
//! A missing key falls back to its default, so an empty file is a valid
//! config. To change settings, edit the file and restart.

use serde::{Deserialize, Serialize};
use showroom_contract::CONTRACT_NAME;
use showroom_ledger::LedgerConfig;
use std::path::Path;

use crate::{Error, Result};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "showroom.toml";

/// `[ledger]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSection {
    /// Detect stale reads at commit (first committer wins).
    #[serde(default = "default_validate_reads")]
    pub validate_reads: bool,
}

fn default_validate_reads() -> bool {
    true
}

impl Default for LedgerSection {
    fn default() -> Self {
        Self {
            validate_reads: default_validate_reads(),
        }
    }
}

fn default_contract_name() -> String {
    CONTRACT_NAME.to_string()
}

/// Showroom configuration loaded from `showroom.toml`.
///
/// # Example
///
/// ```toml
/// contract_name = "carshowroom"
/// seed_on_open = false
///
/// [ledger]
/// validate_reads = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowroomConfig {
    /// Contract name accepted as a transaction name prefix.
    #[serde(default = "default_contract_name")]
    pub contract_name: String,
    /// Run `initLedger` when the executor is created.
    #[serde(default)]
    pub seed_on_open: bool,
    /// In-memory ledger settings.
    #[serde(default)]
    pub ledger: LedgerSection,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            contract_name: default_contract_name(),
            seed_on_open: false,
            ledger: LedgerSection::default(),
        }
    }
}

impl ShowroomConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Car showroom configuration
#
# Contract name. Transactions may be invoked as "<contract_name>:<name>".
contract_name = "carshowroom"

# Create the sample cars when the executor starts (default: false).
seed_on_open = false

[ledger]
# Reject a commit if anything it read changed since it began (default: true).
# false = last committer wins.
validate_reads = true
"#
    }

    /// Reject values the executor cannot run with.
    pub fn validate(&self) -> Result<()> {
        let name = self.contract_name.as_str();
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument {
                reason: "contract_name must not be empty".to_string(),
            });
        }
        if name.contains(':') {
            return Err(Error::InvalidArgument {
                reason: format!("contract_name '{}' must not contain ':'", name),
            });
        }
        Ok(())
    }

    /// Ledger settings in the form the ledger takes them.
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            validate_reads: self.ledger.validate_reads,
        }
    }

    /// Parse and validate config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ShowroomConfig = toml::from_str(content).map_err(|e| Error::InvalidArgument {
            reason: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidArgument { reason } => Error::InvalidArgument {
                reason: format!("{} ({})", reason, path.display()),
            },
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Io {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::InvalidArgument {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Io {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }
}
