use bip39::Mnemonic;
use kira_types::constants::NODE_ID_SIZE;
use kira_types::primitives::{NodeId, PublicKey};

use zeroize::Zeroizing;

use crate::hash::{sha256, sha256_truncated};

/// Ed25519 keypair used for node identity and validator signing keys.
pub struct NodeKeypair {
    inner: ed25519_dalek::SigningKey,
}

impl NodeKeypair {
    /// Create a keypair from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            inner: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    /// Create a keypair from an arbitrary secret, seeding with SHA-256(secret).
    ///
    /// Matches Tendermint's `GenPrivKeyFromSecret`, so keys derived from a
    /// mnemonic here are the keys a Tendermint node would derive.
    pub fn from_secret(secret: &[u8]) -> Self {
        Self::from_seed(&sha256(secret))
    }

    /// Keypair seeded from the canonical (single-spaced) form of a mnemonic,
    /// so re-spaced input yields the same key.
    pub fn from_mnemonic(mnemonic: &Mnemonic) -> Self {
        let phrase = Zeroizing::new(mnemonic.to_string());
        Self::from_secret(phrase.as_bytes())
    }

    /// Get the public key bytes.
    pub fn public_key(&self) -> PublicKey {
        self.inner.verifying_key().to_bytes()
    }

    /// Get the 32-byte seed (secret key bytes) of this keypair.
    pub fn seed(&self) -> [u8; 32] {
        self.inner.to_bytes()
    }

    /// Seed followed by public key, the 64-byte layout used in key files.
    pub fn keypair_bytes(&self) -> [u8; 64] {
        self.inner.to_keypair_bytes()
    }

    /// Node identifier: SHA-256(pubkey)[0..20].
    pub fn node_id(&self) -> NodeId {
        pubkey_to_node_id(&self.public_key())
    }
}

// Note: SigningKey with the "zeroize" feature implements ZeroizeOnDrop,
// so key material is automatically wiped when NodeKeypair is dropped.

/// Derive a node identifier (also the Tendermint validator address) from a public key.
pub fn pubkey_to_node_id(pubkey: &PublicKey) -> NodeId {
    sha256_truncated(pubkey)
}

/// Lowercase hex rendering of a node identifier, as peers expect it.
pub fn format_node_id(id: &NodeId) -> String {
    hex::encode(id)
}

/// Parse a hex node identifier.
pub fn parse_node_id(s: &str) -> Option<NodeId> {
    let bytes = hex::decode(s.trim()).ok()?;
    if bytes.len() != NODE_ID_SIZE {
        return None;
    }
    let mut id = [0u8; NODE_ID_SIZE];
    id.copy_from_slice(&bytes);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALIDATOR_NODE_MNEMONIC: &str = "method iron wreck confirm cattle moral warfare found \
        jungle dolphin prefer mansion jazz vibrant sphere sustain west weather rotate oppose \
        pass squirrel convince art";

    #[test]
    fn test_from_seed_deterministic() {
        let seed = [42u8; 32];
        let kp1 = NodeKeypair::from_seed(&seed);
        let kp2 = NodeKeypair::from_seed(&seed);
        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.seed(), seed);
    }

    #[test]
    fn test_node_id_golden() {
        let kp = NodeKeypair::from_secret(VALIDATOR_NODE_MNEMONIC.as_bytes());
        assert_eq!(
            format_node_id(&kp.node_id()),
            "4a76afcb43db2140b81ff088f879a16ca8043ebc"
        );
    }

    #[test]
    fn test_keypair_bytes_layout() {
        let kp = NodeKeypair::from_secret(b"secret");
        let bytes = kp.keypair_bytes();
        assert_eq!(&bytes[..32], &kp.seed());
        assert_eq!(&bytes[32..], &kp.public_key());
    }

    #[test]
    fn test_different_secrets_different_ids() {
        let a = NodeKeypair::from_secret(b"a");
        let b = NodeKeypair::from_secret(b"b");
        assert_ne!(a.node_id(), b.node_id());
    }

    #[test]
    fn test_from_mnemonic_matches_canonical_secret() {
        let spaced = VALIDATOR_NODE_MNEMONIC.replace(' ', "  ");
        let mnemonic = bip39::Mnemonic::parse_normalized(&spaced).unwrap();
        let kp = NodeKeypair::from_mnemonic(&mnemonic);
        assert_eq!(
            format_node_id(&kp.node_id()),
            "4a76afcb43db2140b81ff088f879a16ca8043ebc"
        );
    }

    #[test]
    fn test_node_id_parse_roundtrip() {
        let kp = NodeKeypair::from_secret(b"roundtrip");
        let id = kp.node_id();
        assert_eq!(parse_node_id(&format_node_id(&id)), Some(id));
        assert_eq!(parse_node_id("zz"), None);
        assert_eq!(parse_node_id("abcd"), None);
    }
}
