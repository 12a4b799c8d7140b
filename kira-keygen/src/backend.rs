//! Capabilities the orchestrator borrows from cryptographic libraries and the
//! filesystem.
//!
//! [`StandardBackend`] wires them to `bip39`, `ed25519-dalek` and the on-disk
//! key-file writer. Tests substitute deterministic fakes.

use std::path::{Path, PathBuf};

use kira_crypto::keys::NodeKeypair;
use kira_crypto::seed::{mnemonic_from_entropy, validate_mnemonic};
use kira_types::error::KeygenError;
use kira_types::primitives::{Entropy, NodeId};

use crate::config::DerivationConfig;
use crate::valkey;

/// Which key files a single `write_key_artifact` call should produce.
///
/// A `None` path means that output is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyArtifactOutputs {
    pub priv_validator_key: Option<PathBuf>,
    pub node_key: Option<PathBuf>,
    pub node_id: Option<PathBuf>,
}

impl KeyArtifactOutputs {
    pub fn priv_validator_key(path: PathBuf) -> Self {
        Self {
            priv_validator_key: Some(path),
            ..Default::default()
        }
    }

    pub fn node_key(path: PathBuf) -> Self {
        Self {
            node_key: Some(path),
            ..Default::default()
        }
    }

    pub fn node_id(path: PathBuf) -> Self {
        Self {
            node_id: Some(path),
            ..Default::default()
        }
    }
}

/// External operations the key-set orchestrator depends on.
pub trait KeygenBackend {
    /// Check a phrase against the BIP-39 wordlist and checksum.
    fn validate_mnemonic(&self, phrase: &str) -> Result<(), KeygenError>;

    /// Check that `dir` exists and is a directory.
    fn validate_output_dir(&self, dir: &Path) -> Result<(), KeygenError>;

    /// Encode 32 bytes of entropy as a 24-word phrase.
    fn encode_mnemonic(&self, entropy: &Entropy) -> Result<String, KeygenError>;

    /// Node identifier of the ed25519 key seeded from `secret`.
    fn node_id(&self, secret: &[u8]) -> Result<NodeId, KeygenError>;

    /// Write the key files selected by `outputs` for `mnemonic`.
    fn write_key_artifact(
        &self,
        mnemonic: &str,
        derivation: &DerivationConfig,
        outputs: &KeyArtifactOutputs,
    ) -> Result<(), KeygenError>;
}

/// Production backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBackend;

impl KeygenBackend for StandardBackend {
    fn validate_mnemonic(&self, phrase: &str) -> Result<(), KeygenError> {
        validate_mnemonic(phrase)
    }

    fn validate_output_dir(&self, dir: &Path) -> Result<(), KeygenError> {
        let meta = std::fs::metadata(dir).map_err(|e| KeygenError::InvalidPath {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        if !meta.is_dir() {
            return Err(KeygenError::InvalidPath {
                path: dir.display().to_string(),
                reason: "not a directory".to_string(),
            });
        }
        Ok(())
    }

    fn encode_mnemonic(&self, entropy: &Entropy) -> Result<String, KeygenError> {
        Ok(mnemonic_from_entropy(entropy)?.to_string())
    }

    fn node_id(&self, secret: &[u8]) -> Result<NodeId, KeygenError> {
        Ok(NodeKeypair::from_secret(secret).node_id())
    }

    fn write_key_artifact(
        &self,
        mnemonic: &str,
        derivation: &DerivationConfig,
        outputs: &KeyArtifactOutputs,
    ) -> Result<(), KeygenError> {
        valkey::write_key_artifact(mnemonic, derivation, outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kira_crypto::keys::format_node_id;

    #[test]
    fn test_validate_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(StandardBackend.validate_output_dir(tmp.path()).is_ok());

        let missing = tmp.path().join("missing");
        assert!(matches!(
            StandardBackend.validate_output_dir(&missing),
            Err(KeygenError::InvalidPath { .. })
        ));

        let file = tmp.path().join("file");
        std::fs::write(&file, b"x").unwrap();
        assert!(matches!(
            StandardBackend.validate_output_dir(&file),
            Err(KeygenError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_encode_mnemonic_24_words() {
        let phrase = StandardBackend.encode_mnemonic(&[7u8; 32]).unwrap();
        assert_eq!(phrase.split(' ').count(), 24);
        assert!(StandardBackend.validate_mnemonic(&phrase).is_ok());
    }

    #[test]
    fn test_validate_mnemonic_rejects_garbage() {
        assert!(matches!(
            StandardBackend.validate_mnemonic("abandon abandon"),
            Err(KeygenError::InvalidMnemonic { .. })
        ));
    }

    #[test]
    fn test_node_id_golden() {
        let mnemonic = "method iron wreck confirm cattle moral warfare found jungle dolphin \
            prefer mansion jazz vibrant sphere sustain west weather rotate oppose pass \
            squirrel convince art";
        let id = StandardBackend.node_id(mnemonic.as_bytes()).unwrap();
        assert_eq!(format_node_id(&id), "4a76afcb43db2140b81ff088f879a16ca8043ebc");
    }

    #[test]
    fn test_output_constructors() {
        let outputs = KeyArtifactOutputs::node_id(PathBuf::from("id.key"));
        assert_eq!(outputs.node_id, Some(PathBuf::from("id.key")));
        assert!(outputs.node_key.is_none());
        assert!(outputs.priv_validator_key.is_none());
    }
}
