use std::path::{Path, PathBuf};

use kira_types::constants::{
    DEFAULT_HD_PATH, DEFAULT_PREFIX, MNEMONICS_ENV_FILE, PRIV_VALIDATOR_KEY_FILE,
    VALIDATOR_NODE_ID_FILE, VALIDATOR_NODE_KEY_FILE,
};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Default config file name written by `init`.
pub const CONFIG_FILE_NAME: &str = "kira-keygen.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeygenConfig {
    #[serde(default)]
    pub derivation: DerivationConfig,
    #[serde(default)]
    pub files: ArtifactFiles,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inputs to the key-artifact writer besides the mnemonic itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationConfig {
    /// Bech32 address prefix.
    pub prefix: String,
    /// BIP-32 path for account keys, with or without a leading `m/`.
    pub hd_path: String,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            hd_path: DEFAULT_HD_PATH.to_string(),
        }
    }
}

/// File names written into the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactFiles {
    pub validator_node_key: String,
    pub validator_node_id: String,
    pub priv_validator_key: String,
    pub mnemonics_env: String,
}

impl Default for ArtifactFiles {
    fn default() -> Self {
        Self {
            validator_node_key: VALIDATOR_NODE_KEY_FILE.to_string(),
            validator_node_id: VALIDATOR_NODE_ID_FILE.to_string(),
            priv_validator_key: PRIV_VALIDATOR_KEY_FILE.to_string(),
            mnemonics_env: MNEMONICS_ENV_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl KeygenConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config: KeygenConfig = toml::from_str(&contents).map_err(|e| CliError::ConfigError {
            reason: format!("failed to parse config file '{}': {}", path.display(), e),
        })?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Initialize a default configuration file in the given directory.
    pub fn init(dir: &Path) -> Result<PathBuf, CliError> {
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }

        let config = KeygenConfig::default();
        let toml_str = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
            reason: format!("failed to serialize default config: {}", e),
        })?;

        let config_path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, toml_str)?;

        Ok(config_path)
    }

    /// Apply command-line overrides for the derivation inputs.
    pub fn with_overrides(mut self, prefix: Option<String>, hd_path: Option<String>) -> Self {
        if let Some(prefix) = prefix {
            self.derivation.prefix = prefix;
        }
        if let Some(hd_path) = hd_path {
            self.derivation.hd_path = hd_path;
        }
        self
    }
}
