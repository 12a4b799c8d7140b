//! Writing a derived key set to an output directory.

use std::path::{Path, PathBuf};

use kira_types::constants::{
    ENV_MASTER_MNEMONIC, ENV_SIGNER_ADDR_MNEMONIC, ENV_VALIDATOR_ADDR_MNEMONIC,
    ENV_VALIDATOR_NODE_ID, ENV_VALIDATOR_NODE_MNEMONIC, ENV_VALIDATOR_VAL_MNEMONIC,
};
use kira_types::error::KeygenError;
use zeroize::Zeroizing;

use crate::backend::{KeyArtifactOutputs, KeygenBackend};
use crate::config::KeygenConfig;
use crate::master::MnemonicSet;
use crate::valkey::write_secret_file;

/// Render the `mnemonics.env` summary.
///
/// One `KEY=VALUE` line per entry, in a fixed order. The master phrase is
/// written with single spaces between words.
pub fn render_env(master: &str, set: &MnemonicSet) -> Zeroizing<String> {
    let master = Zeroizing::new(master.split_whitespace().collect::<Vec<_>>().join(" "));
    let entries = [
        (ENV_MASTER_MNEMONIC, master.as_str()),
        (ENV_VALIDATOR_ADDR_MNEMONIC, set.validator_addr()),
        (ENV_VALIDATOR_NODE_MNEMONIC, set.validator_node()),
        (ENV_VALIDATOR_NODE_ID, set.node_id()),
        (ENV_VALIDATOR_VAL_MNEMONIC, set.validator_val()),
        (ENV_SIGNER_ADDR_MNEMONIC, set.signer_addr()),
    ];

    let mut out = Zeroizing::new(String::new());
    for (key, value) in entries {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Write the validator artifacts for `set` into `dir`, returning the paths
/// written in order.
///
/// Stops at the first failure. Files already written are left in place and
/// the summary file is only written once every key file succeeded.
pub fn emit_artifacts<B: KeygenBackend + ?Sized>(
    backend: &B,
    set: &MnemonicSet,
    master: &str,
    config: &KeygenConfig,
    dir: &Path,
) -> Result<Vec<PathBuf>, KeygenError> {
    let files = &config.files;
    let derivation = &config.derivation;
    let mut written = Vec::with_capacity(4);

    let node_key = dir.join(&files.validator_node_key);
    backend.write_key_artifact(
        set.validator_node(),
        derivation,
        &KeyArtifactOutputs::node_key(node_key.clone()),
    )?;
    written.push(node_key);

    let node_id = dir.join(&files.validator_node_id);
    backend.write_key_artifact(
        set.validator_node(),
        derivation,
        &KeyArtifactOutputs::node_id(node_id.clone()),
    )?;
    written.push(node_id);

    let priv_validator_key = dir.join(&files.priv_validator_key);
    backend.write_key_artifact(
        set.validator_val(),
        derivation,
        &KeyArtifactOutputs::priv_validator_key(priv_validator_key.clone()),
    )?;
    written.push(priv_validator_key);

    let env_path = dir.join(&files.mnemonics_env);
    write_secret_file(&env_path, render_env(master, set).as_bytes())?;
    tracing::info!(path = %env_path.display(), "wrote mnemonic summary");
    written.push(env_path);

    Ok(written)
}
