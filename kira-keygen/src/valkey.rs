//! Tendermint-compatible validator key files.
//!
//! `node_key.json` carries the p2p identity key, `priv_validator_key.json`
//! the consensus signing key. Both are ed25519 keys seeded from
//! SHA-256(mnemonic), so the same mnemonic always reproduces the same files.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use kira_crypto::address::{consensus_address, derive_account_addresses};
use kira_crypto::keys::{format_node_id, parse_node_id, NodeKeypair};
use kira_crypto::seed::parse_mnemonic;
use kira_types::constants::{PRIV_KEY_ED25519_TYPE, PUB_KEY_ED25519_TYPE};
use kira_types::error::KeygenError;
use kira_types::primitives::NodeId;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::backend::KeyArtifactOutputs;
use crate::config::DerivationConfig;

/// Amino-style `{"type": ..., "value": ...}` key wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

/// On-disk node key file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeKeyFile {
    pub priv_key: KeyValue,
}

/// On-disk priv-validator key file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivValidatorKeyFile {
    pub address: String,
    pub pub_key: KeyValue,
    pub priv_key: KeyValue,
}

fn private_key_value(keypair: &NodeKeypair) -> KeyValue {
    KeyValue {
        key_type: PRIV_KEY_ED25519_TYPE.to_string(),
        value: BASE64.encode(keypair.keypair_bytes()),
    }
}

/// Decode a base64 `seed || pubkey` value and check the halves agree.
fn keypair_from_value(value: &KeyValue) -> Result<NodeKeypair, KeygenError> {
    if value.key_type != PRIV_KEY_ED25519_TYPE {
        return Err(KeygenError::KeyDerivation {
            reason: format!("unsupported key type '{}'", value.key_type),
        });
    }
    let bytes = Zeroizing::new(BASE64.decode(&value.value).map_err(|e| {
        KeygenError::KeyDerivation {
            reason: format!("invalid base64 private key: {}", e),
        }
    })?);
    if bytes.len() != 64 {
        return Err(KeygenError::KeyDerivation {
            reason: format!("expected 64-byte private key, got {} bytes", bytes.len()),
        });
    }
    let mut seed = Zeroizing::new([0u8; 32]);
    seed.copy_from_slice(&bytes[..32]);
    let keypair = NodeKeypair::from_seed(&seed);
    if keypair.public_key()[..] != bytes[32..] {
        return Err(KeygenError::KeyDerivation {
            reason: "public key does not match private key seed".to_string(),
        });
    }
    Ok(keypair)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, KeygenError> {
    let data = Zeroizing::new(std::fs::read_to_string(path).map_err(|e| {
        KeygenError::InvalidPath {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?);
    serde_json::from_str(&data).map_err(|e| KeygenError::KeyDerivation {
        reason: format!("malformed key file '{}': {}", path.display(), e),
    })
}

impl NodeKeyFile {
    pub fn from_keypair(keypair: &NodeKeypair) -> Self {
        Self {
            priv_key: private_key_value(keypair),
        }
    }

    /// Load a node key file from disk.
    pub fn load(path: &Path) -> Result<Self, KeygenError> {
        read_json(path)
    }

    pub fn keypair(&self) -> Result<NodeKeypair, KeygenError> {
        keypair_from_value(&self.priv_key)
    }

    /// Node identifier of the key stored in this file.
    pub fn node_id(&self) -> Result<NodeId, KeygenError> {
        Ok(self.keypair()?.node_id())
    }
}

impl PrivValidatorKeyFile {
    pub fn from_keypair(keypair: &NodeKeypair) -> Self {
        Self {
            address: hex::encode_upper(keypair.node_id()),
            pub_key: KeyValue {
                key_type: PUB_KEY_ED25519_TYPE.to_string(),
                value: BASE64.encode(keypair.public_key()),
            },
            priv_key: private_key_value(keypair),
        }
    }

    /// Load a priv-validator key file from disk.
    pub fn load(path: &Path) -> Result<Self, KeygenError> {
        read_json(path)
    }

    /// Recover the signing keypair, checking the stored address and public key.
    pub fn keypair(&self) -> Result<NodeKeypair, KeygenError> {
        let keypair = keypair_from_value(&self.priv_key)?;
        if self.pub_key.value != BASE64.encode(keypair.public_key())
            || !self.address.eq_ignore_ascii_case(&hex::encode(keypair.node_id()))
        {
            return Err(KeygenError::KeyDerivation {
                reason: "address or public key does not match private key".to_string(),
            });
        }
        Ok(keypair)
    }
}

/// Read the node identifier from either a node id file or a node key file.
pub fn read_node_id(path: &Path) -> Result<NodeId, KeygenError> {
    let data = Zeroizing::new(std::fs::read_to_string(path).map_err(|e| {
        KeygenError::InvalidPath {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?);
    if let Some(id) = parse_node_id(&data) {
        return Ok(id);
    }
    let file: NodeKeyFile = serde_json::from_str(&data).map_err(|e| KeygenError::KeyDerivation {
        reason: format!("'{}' is neither a node id nor a node key file: {}", path.display(), e),
    })?;
    file.node_id()
}

/// Write `contents` to `path`, readable by the owner only.
pub fn write_secret_file(path: &Path, contents: &[u8]) -> Result<(), KeygenError> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
            .map_err(|e| KeygenError::artifact_write(path, e))?;
        // `mode` only applies on creation; tighten files that already existed.
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(|e| KeygenError::artifact_write(path, e))?;
        file.write_all(contents)
            .map_err(|e| KeygenError::artifact_write(path, e))?;
        file.sync_all()
            .map_err(|e| KeygenError::artifact_write(path, e))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, contents).map_err(|e| KeygenError::artifact_write(path, e))?;
    }

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), KeygenError> {
    let data = Zeroizing::new(serde_json::to_string_pretty(value).map_err(|e| {
        KeygenError::artifact_write(path, e)
    })?);
    write_secret_file(path, data.as_bytes())
}

/// Produce the key files requested in `outputs` from one mnemonic.
///
/// The mnemonic, prefix and HD path are all checked before anything is
/// written, so a bad input never leaves a half-written set behind.
pub fn write_key_artifact(
    mnemonic: &str,
    derivation: &DerivationConfig,
    outputs: &KeyArtifactOutputs,
) -> Result<(), KeygenError> {
    let parsed = parse_mnemonic(mnemonic).map_err(|e| KeygenError::KeyDerivation {
        reason: e.to_string(),
    })?;
    let addresses = derive_account_addresses(&parsed, &derivation.hd_path, &derivation.prefix)?;
    let keypair = NodeKeypair::from_mnemonic(&parsed);
    let valcons = consensus_address(&keypair.public_key(), &derivation.prefix)?;

    tracing::debug!(
        account = %addresses.account,
        valoper = %addresses.valoper,
        valcons = %valcons,
        "derived validator addresses"
    );

    if let Some(path) = &outputs.priv_validator_key {
        write_json(path, &PrivValidatorKeyFile::from_keypair(&keypair))?;
        tracing::info!(path = %path.display(), "wrote priv validator key");
    }
    if let Some(path) = &outputs.node_key {
        write_json(path, &NodeKeyFile::from_keypair(&keypair))?;
        tracing::info!(path = %path.display(), "wrote node key");
    }
    if let Some(path) = &outputs.node_id {
        write_secret_file(path, format_node_id(&keypair.node_id()).as_bytes())?;
        tracing::info!(path = %path.display(), "wrote node id");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALIDATOR_NODE_MNEMONIC: &str = "method iron wreck confirm cattle moral warfare found \
        jungle dolphin prefer mansion jazz vibrant sphere sustain west weather rotate oppose \
        pass squirrel convince art";

    fn node_mnemonic() -> String {
        VALIDATOR_NODE_MNEMONIC
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_node_key_file_roundtrip() {
        let kp = NodeKeypair::from_secret(b"node");
        let file = NodeKeyFile::from_keypair(&kp);
        let json = serde_json::to_string(&file).unwrap();
        let parsed: NodeKeyFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.node_id().unwrap(), kp.node_id());
    }

    #[test]
    fn test_node_key_json_shape() {
        let kp = NodeKeypair::from_secret(b"node");
        let value = serde_json::to_value(NodeKeyFile::from_keypair(&kp)).unwrap();
        assert_eq!(value["priv_key"]["type"], "tendermint/PrivKeyEd25519");
        let decoded = BASE64
            .decode(value["priv_key"]["value"].as_str().unwrap())
            .unwrap();
        assert_eq!(decoded.len(), 64);
    }

    #[test]
    fn test_priv_validator_key_shape() {
        let kp = NodeKeypair::from_secret(b"val");
        let file = PrivValidatorKeyFile::from_keypair(&kp);
        assert_eq!(file.address.len(), 40);
        assert_eq!(file.address, file.address.to_uppercase());
        assert_eq!(file.pub_key.key_type, "tendermint/PubKeyEd25519");
        assert_eq!(file.keypair().unwrap().public_key(), kp.public_key());
    }

    #[test]
    fn test_tampered_public_key_rejected() {
        let kp = NodeKeypair::from_secret(b"node");
        let mut bytes = kp.keypair_bytes();
        bytes[63] ^= 0xff;
        let file = NodeKeyFile {
            priv_key: KeyValue {
                key_type: PRIV_KEY_ED25519_TYPE.to_string(),
                value: BASE64.encode(bytes),
            },
        };
        assert!(matches!(file.node_id(), Err(KeygenError::KeyDerivation { .. })));
    }

    #[test]
    fn test_wrong_key_type_rejected() {
        let kp = NodeKeypair::from_secret(b"node");
        let mut file = NodeKeyFile::from_keypair(&kp);
        file.priv_key.key_type = "tendermint/PrivKeySecp256k1".to_string();
        assert!(file.keypair().is_err());
    }

    #[test]
    fn test_write_node_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let outputs = KeyArtifactOutputs {
            node_key: Some(tmp.path().join("node_key.json")),
            node_id: Some(tmp.path().join("node_id.key")),
            ..Default::default()
        };
        write_key_artifact(&node_mnemonic(), &DerivationConfig::default(), &outputs).unwrap();

        let id = std::fs::read_to_string(tmp.path().join("node_id.key")).unwrap();
        assert_eq!(id, "4a76afcb43db2140b81ff088f879a16ca8043ebc");

        let loaded = NodeKeyFile::load(&tmp.path().join("node_key.json")).unwrap();
        assert_eq!(format_node_id(&loaded.node_id().unwrap()), id);
        assert!(!tmp.path().join("priv_validator_key.json").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_key_files_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("priv_validator_key.json");
        let outputs = KeyArtifactOutputs {
            priv_validator_key: Some(path.clone()),
            ..Default::default()
        };
        write_key_artifact(&node_mnemonic(), &DerivationConfig::default(), &outputs).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_read_node_id_from_either_file() {
        let tmp = tempfile::tempdir().unwrap();
        let outputs = KeyArtifactOutputs {
            node_key: Some(tmp.path().join("node_key.json")),
            node_id: Some(tmp.path().join("node_id.key")),
            ..Default::default()
        };
        write_key_artifact(&node_mnemonic(), &DerivationConfig::default(), &outputs).unwrap();

        let from_key = read_node_id(&tmp.path().join("node_key.json")).unwrap();
        let from_id = read_node_id(&tmp.path().join("node_id.key")).unwrap();
        assert_eq!(from_key, from_id);

        std::fs::write(tmp.path().join("junk"), "hello").unwrap();
        assert!(read_node_id(&tmp.path().join("junk")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_loose_file_is_tightened() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("mnemonics.env");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_secret_file(&path, b"new").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_node_id_ignores_input_spacing() {
        let tmp = tempfile::tempdir().unwrap();
        let spaced = node_mnemonic().replace(' ', "   ");
        let outputs = KeyArtifactOutputs {
            node_id: Some(tmp.path().join("node_id.key")),
            ..Default::default()
        };
        write_key_artifact(&spaced, &DerivationConfig::default(), &outputs).unwrap();
        let id = std::fs::read_to_string(tmp.path().join("node_id.key")).unwrap();
        assert_eq!(id, "4a76afcb43db2140b81ff088f879a16ca8043ebc");
    }

    #[test]
    fn test_invalid_mnemonic_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let outputs = KeyArtifactOutputs {
            node_key: Some(tmp.path().join("node_key.json")),
            ..Default::default()
        };
        let result = write_key_artifact("not a mnemonic", &DerivationConfig::default(), &outputs);
        assert!(matches!(result, Err(KeygenError::KeyDerivation { .. })));
        assert!(!tmp.path().join("node_key.json").exists());
    }

    #[test]
    fn test_invalid_hd_path_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let outputs = KeyArtifactOutputs {
            node_key: Some(tmp.path().join("node_key.json")),
            ..Default::default()
        };
        let derivation = DerivationConfig {
            prefix: "kira".to_string(),
            hd_path: "not/a/path".to_string(),
        };
        let result = write_key_artifact(&node_mnemonic(), &derivation, &outputs);
        assert!(matches!(result, Err(KeygenError::KeyDerivation { .. })));
        assert!(!tmp.path().join("node_key.json").exists());
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let outputs = KeyArtifactOutputs {
            node_id: Some("/nonexistent/dir/node_id.key".into()),
            ..Default::default()
        };
        let result = write_key_artifact(&node_mnemonic(), &DerivationConfig::default(), &outputs);
        assert!(matches!(result, Err(KeygenError::ArtifactWrite { .. })));
    }
}
