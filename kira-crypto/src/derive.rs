//! Deterministic child-mnemonic derivation.
//!
//! A child mnemonic is the BIP-39 encoding of
//! `SHA-256(strip_ws(lower("<master> ; <name> <type>")))`. Every child is
//! derived directly from the master phrase, so siblings share nothing but
//! their preimage prefix and a leaked child reveals neither the master nor
//! any sibling.

use bip39::Mnemonic;
use kira_types::error::KeygenError;
use kira_types::primitives::{Entropy, RoleLabel};
use zeroize::Zeroize;

use crate::hash::sha256;
use crate::seed::mnemonic_from_entropy;

/// Build the normalized string that is hashed into entropy.
///
/// Lower-cased, then stripped of every whitespace character, so word
/// separators in the master phrase only matter through word identity.
pub fn canonical_preimage(master: &str, label: RoleLabel<'_>) -> String {
    format!("{} ; {} {}", master, label.name, label.kind)
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Derive 32 bytes of entropy for `label` from the master mnemonic.
pub fn derive_entropy(master: &str, label: RoleLabel<'_>) -> Entropy {
    let mut preimage = canonical_preimage(master, label);
    let entropy = sha256(preimage.as_bytes());
    preimage.zeroize();
    entropy
}

/// Derive the child mnemonic for `label` from the master mnemonic.
///
/// Backend-free entry point for library callers. The key-set generator
/// encodes the same entropy through its injected backend instead.
pub fn derive_mnemonic(master: &str, label: RoleLabel<'_>) -> Result<Mnemonic, KeygenError> {
    let mut entropy = derive_entropy(master, label);
    let mnemonic = mnemonic_from_entropy(&entropy);
    entropy.zeroize();
    mnemonic
}
