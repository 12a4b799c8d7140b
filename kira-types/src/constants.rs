// ─── Derivation Defaults ─────────────────────────────────────────────────────

/// Bech32 address prefix used when the caller does not override it.
pub const DEFAULT_PREFIX: &str = "kira";

/// BIP-44 path for account keys (Cosmos coin type 118).
pub const DEFAULT_HD_PATH: &str = "44'/118'/0'/0/0";

/// Suffix appended to the prefix for validator operator addresses.
pub const VALOPER_SUFFIX: &str = "valoper";

/// Suffix appended to the prefix for consensus addresses.
pub const VALCONS_SUFFIX: &str = "valcons";

// ─── Sizes ───────────────────────────────────────────────────────────────────

/// Entropy size fed to the BIP-39 encoder (24 words).
pub const ENTROPY_SIZE: usize = 32;

/// Node identifiers and Tendermint addresses are truncated SHA-256 digests.
pub const NODE_ID_SIZE: usize = 20;

// ─── Artifact File Names ─────────────────────────────────────────────────────

pub const VALIDATOR_NODE_KEY_FILE: &str = "validator_node_key.json";
pub const VALIDATOR_NODE_ID_FILE: &str = "validator_node_id.key";
pub const PRIV_VALIDATOR_KEY_FILE: &str = "priv_validator_key.json";
pub const MNEMONICS_ENV_FILE: &str = "mnemonics.env";

// ─── Summary File Keys ───────────────────────────────────────────────────────

pub const ENV_MASTER_MNEMONIC: &str = "MASTER_MNEMONIC";
pub const ENV_VALIDATOR_ADDR_MNEMONIC: &str = "VALIDATOR_ADDR_MNEMONIC";
pub const ENV_VALIDATOR_NODE_MNEMONIC: &str = "VALIDATOR_NODE_MNEMONIC";
pub const ENV_VALIDATOR_NODE_ID: &str = "VALIDATOR_NODE_ID";
pub const ENV_VALIDATOR_VAL_MNEMONIC: &str = "VALIDATOR_VAL_MNEMONIC";
pub const ENV_SIGNER_ADDR_MNEMONIC: &str = "SIGNER_ADDR_MNEMONIC";

// ─── Key File Types ──────────────────────────────────────────────────────────

/// Amino type tag for ed25519 private keys in Tendermint key files.
pub const PRIV_KEY_ED25519_TYPE: &str = "tendermint/PrivKeyEd25519";

/// Amino type tag for ed25519 public keys in Tendermint key files.
pub const PUB_KEY_ED25519_TYPE: &str = "tendermint/PubKeyEd25519";
