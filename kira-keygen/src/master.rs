//! Master key-set generation.
//!
//! Every role mnemonic is derived straight from the master phrase, in the
//! fixed order of [`Role::ALL`], with the node identifier computed right
//! after the node mnemonic. Any failure discards the set being built.

use std::fmt;
use std::path::{Path, PathBuf};

use kira_crypto::derive::derive_entropy;
use kira_crypto::keys::format_node_id;
use kira_types::error::KeygenError;
use kira_types::primitives::{Role, RoleLabel};
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::artifacts::emit_artifacts;
use crate::backend::KeygenBackend;
use crate::config::KeygenConfig;

/// Child mnemonics for every role plus the validator node identifier.
///
/// Wiped from memory on drop. `Debug` never prints the phrases.
#[derive(Default, Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct MnemonicSet {
    validator_node: String,
    node_id: String,
    validator_addr: String,
    validator_val: String,
    signer_addr: String,
    priv_key: String,
}

impl MnemonicSet {
    pub fn validator_node(&self) -> &str {
        &self.validator_node
    }

    /// Lowercase hex node identifier of the validator node key.
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn validator_addr(&self) -> &str {
        &self.validator_addr
    }

    pub fn validator_val(&self) -> &str {
        &self.validator_val
    }

    pub fn signer_addr(&self) -> &str {
        &self.signer_addr
    }

    pub fn priv_key(&self) -> &str {
        &self.priv_key
    }

    /// Child mnemonic for `role`.
    pub fn mnemonic(&self, role: Role) -> &str {
        match role {
            Role::ValidatorNode => &self.validator_node,
            Role::ValidatorAddr => &self.validator_addr,
            Role::ValidatorVal => &self.validator_val,
            Role::SignerAddr => &self.signer_addr,
            Role::PrivKey => &self.priv_key,
        }
    }
}

impl fmt::Debug for MnemonicSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicSet")
            .field("node_id", &self.node_id)
            .finish_non_exhaustive()
    }
}

/// Result of a key-set run: the set and any files written.
#[derive(Debug)]
pub struct KeySetOutput {
    pub set: MnemonicSet,
    pub written: Vec<PathBuf>,
}

/// Derive the child mnemonic for an arbitrary label through `backend`.
///
/// Does not validate `master`; callers gate on that first.
pub fn derive_role_mnemonic<B: KeygenBackend + ?Sized>(
    backend: &B,
    master: &str,
    label: RoleLabel<'_>,
) -> Result<String, KeygenError> {
    let mut entropy = derive_entropy(master, label);
    let phrase = backend.encode_mnemonic(&entropy);
    entropy.zeroize();
    let phrase = phrase?;
    tracing::debug!(role = %label, "derived child mnemonic");
    Ok(phrase)
}

/// The `(priv, key)` child mnemonic, usable on its own.
pub fn derive_priv_key_mnemonic<B: KeygenBackend + ?Sized>(
    backend: &B,
    master: &str,
) -> Result<String, KeygenError> {
    backend.validate_mnemonic(master)?;
    derive_role_mnemonic(backend, master, Role::PrivKey.label())
}

/// Derive the full key set from `master` and, when `output_dir` is given,
/// write the validator artifacts into it.
///
/// The mnemonic and the output directory are both checked before anything
/// is derived. An empty `output_dir` is treated as absent.
pub fn generate_key_set<B: KeygenBackend + ?Sized>(
    backend: &B,
    master: &str,
    config: &KeygenConfig,
    output_dir: Option<&Path>,
) -> Result<KeySetOutput, KeygenError> {
    backend.validate_mnemonic(master)?;
    let output_dir = output_dir.filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = output_dir {
        backend.validate_output_dir(dir)?;
    }

    let mut set = MnemonicSet::default();

    set.validator_node = derive_role_mnemonic(backend, master, Role::ValidatorNode.label())?;
    set.node_id = format_node_id(&backend.node_id(set.validator_node.as_bytes())?);
    tracing::info!(node_id = %set.node_id, "derived validator node identity");

    set.validator_addr = derive_role_mnemonic(backend, master, Role::ValidatorAddr.label())?;
    set.validator_val = derive_role_mnemonic(backend, master, Role::ValidatorVal.label())?;
    set.signer_addr = derive_role_mnemonic(backend, master, Role::SignerAddr.label())?;
    set.priv_key = derive_priv_key_mnemonic(backend, master)?;

    let written = match output_dir {
        Some(dir) => emit_artifacts(backend, &set, master, config, dir)?,
        None => Vec::new(),
    };

    Ok(KeySetOutput { set, written })
}
