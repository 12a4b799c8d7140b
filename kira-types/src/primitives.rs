use std::fmt;

use crate::constants::{ENTROPY_SIZE, NODE_ID_SIZE};

/// 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// Entropy handed to the BIP-39 encoder for one child mnemonic.
pub type Entropy = [u8; ENTROPY_SIZE];

/// 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

/// 20-byte node identifier: SHA-256(pubkey)[0..20].
pub type NodeId = [u8; NODE_ID_SIZE];

/// `(name, type)` pair selecting which child mnemonic is derived.
///
/// The derivation function accepts any label; the fixed set used by the
/// master key generator is enumerated by [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleLabel<'a> {
    pub name: &'a str,
    pub kind: &'a str,
}

impl<'a> RoleLabel<'a> {
    pub fn new(name: &'a str, kind: &'a str) -> Self {
        Self { name, kind }
    }
}

impl fmt::Display for RoleLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.kind)
    }
}

/// Roles derived by the master key generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    ValidatorNode,
    ValidatorAddr,
    ValidatorVal,
    SignerAddr,
    PrivKey,
}

impl Role {
    /// All roles, in the order the master key generator derives them.
    pub const ALL: [Role; 5] = [
        Role::ValidatorNode,
        Role::ValidatorAddr,
        Role::ValidatorVal,
        Role::SignerAddr,
        Role::PrivKey,
    ];

    pub fn label(&self) -> RoleLabel<'static> {
        match self {
            Role::ValidatorNode => RoleLabel::new("validator", "node"),
            Role::ValidatorAddr => RoleLabel::new("validator", "addr"),
            Role::ValidatorVal => RoleLabel::new("validator", "val"),
            Role::SignerAddr => RoleLabel::new("signer", "addr"),
            Role::PrivKey => RoleLabel::new("priv", "key"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}
