use std::str::FromStr;

use bech32::{Bech32, Hrp};
use bip32::{DerivationPath, XPrv};
use bip39::Mnemonic;
use kira_types::constants::{VALCONS_SUFFIX, VALOPER_SUFFIX};
use kira_types::error::KeygenError;
use kira_types::primitives::PublicKey;
use zeroize::Zeroize;

use crate::hash::{hash160, sha256_truncated};
use crate::seed::mnemonic_to_seed;

/// Bech32 addresses controlled by one secp256k1 account key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountAddresses {
    /// `<prefix>1...`
    pub account: String,
    /// `<prefix>valoper1...`
    pub valoper: String,
}

/// Parse a BIP-32 path, accepting it with or without the leading `m/`.
pub fn parse_hd_path(path: &str) -> Result<DerivationPath, KeygenError> {
    let trimmed = path.trim();
    let full = if trimmed == "m" || trimmed.starts_with("m/") {
        trimmed.to_string()
    } else {
        format!("m/{}", trimmed)
    };
    DerivationPath::from_str(&full).map_err(|e| KeygenError::KeyDerivation {
        reason: format!("invalid HD path '{}': {}", path, e),
    })
}

/// Derive the account and operator addresses for `mnemonic` along `hd_path`.
///
/// Seed is the BIP-39 seed with an empty passphrase; the address payload is
/// RIPEMD160(SHA256(compressed secp256k1 pubkey)).
pub fn derive_account_addresses(
    mnemonic: &Mnemonic,
    hd_path: &str,
    prefix: &str,
) -> Result<AccountAddresses, KeygenError> {
    let path = parse_hd_path(hd_path)?;

    let mut seed = mnemonic_to_seed(mnemonic, "");
    let derived = XPrv::derive_from_path(&seed, &path);
    seed.zeroize();
    let xprv = derived.map_err(|e| KeygenError::KeyDerivation {
        reason: format!("bip32 derivation failed: {}", e),
    })?;

    let payload = hash160(&xprv.public_key().to_bytes());
    Ok(AccountAddresses {
        account: bech32_encode(prefix, &payload)?,
        valoper: bech32_encode(&format!("{}{}", prefix, VALOPER_SUFFIX), &payload)?,
    })
}

/// Consensus address of an ed25519 validator key: `<prefix>valcons1...`.
pub fn consensus_address(pubkey: &PublicKey, prefix: &str) -> Result<String, KeygenError> {
    bech32_encode(
        &format!("{}{}", prefix, VALCONS_SUFFIX),
        &sha256_truncated(pubkey),
    )
}

fn bech32_encode(hrp: &str, payload: &[u8]) -> Result<String, KeygenError> {
    let hrp = Hrp::parse(hrp).map_err(|e| KeygenError::KeyDerivation {
        reason: format!("invalid address prefix '{}': {}", hrp, e),
    })?;
    bech32::encode::<Bech32>(hrp, payload).map_err(|e| KeygenError::KeyDerivation {
        reason: format!("bech32 encoding failed: {}", e),
    })
}
