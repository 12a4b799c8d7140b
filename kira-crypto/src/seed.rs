use bip39::Mnemonic;
use kira_types::constants::ENTROPY_SIZE;
use kira_types::error::KeygenError;
use zeroize::Zeroize;

/// Generate a new 24-word BIP-39 mnemonic.
pub fn generate_mnemonic() -> Mnemonic {
    // 24 words = 256 bits of entropy = 32 bytes
    let mut entropy = [0u8; ENTROPY_SIZE];
    rand::RngCore::fill_bytes(&mut rand::rngs::OsRng, &mut entropy);
    let mnemonic =
        Mnemonic::from_entropy(&entropy).expect("32 bytes is valid entropy for 24 words");
    entropy.zeroize();
    mnemonic
}

/// Parse a mnemonic from a string of whitespace-separated words,
/// checking the word list and checksum.
pub fn parse_mnemonic(phrase: &str) -> Result<Mnemonic, KeygenError> {
    Mnemonic::parse_normalized(phrase).map_err(|e| KeygenError::InvalidMnemonic {
        reason: e.to_string(),
    })
}

/// Check that `phrase` is a valid BIP-39 mnemonic.
pub fn validate_mnemonic(phrase: &str) -> Result<(), KeygenError> {
    parse_mnemonic(phrase).map(|_| ())
}

/// Encode raw entropy as a BIP-39 mnemonic.
pub fn mnemonic_from_entropy(entropy: &[u8]) -> Result<Mnemonic, KeygenError> {
    Mnemonic::from_entropy(entropy).map_err(|e| KeygenError::Encoding {
        reason: e.to_string(),
    })
}

/// Derive a 64-byte seed from a mnemonic with an optional passphrase.
/// Uses BIP-39 PBKDF2 derivation.
pub fn mnemonic_to_seed(mnemonic: &Mnemonic, passphrase: &str) -> [u8; 64] {
    mnemonic.to_seed(passphrase)
}
