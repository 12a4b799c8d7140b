//! Deterministic validator key generation.
//!
//! A single master mnemonic expands into one child mnemonic per validator
//! role, and from those into Tendermint key files, a node identifier and a
//! `mnemonics.env` summary.

pub mod artifacts;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod master;
pub mod prompt;
pub mod valkey;

pub use backend::{KeyArtifactOutputs, KeygenBackend, StandardBackend};
pub use config::KeygenConfig;
pub use master::{generate_key_set, KeySetOutput, MnemonicSet};
