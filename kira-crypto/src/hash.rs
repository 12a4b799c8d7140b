use kira_types::constants::NODE_ID_SIZE;
use kira_types::primitives::Hash;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the given data.
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 truncated to the first 20 bytes (Tendermint address / node ID).
pub fn sha256_truncated(data: &[u8]) -> [u8; NODE_ID_SIZE] {
    let hash = sha256(data);
    let mut out = [0u8; NODE_ID_SIZE];
    out.copy_from_slice(&hash[..NODE_ID_SIZE]);
    out
}

/// RIPEMD160(SHA256(data)), the Cosmos account address hash.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(sha256(data));
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_deterministic() {
        assert_eq!(sha256(b"kira"), sha256(b"kira"));
        assert_ne!(sha256(b"kira"), sha256(b"KIRA"));
    }

    #[test]
    fn test_sha256_truncated_is_prefix() {
        let full = sha256(b"node");
        let short = sha256_truncated(b"node");
        assert_eq!(&full[..20], &short[..]);
    }

    #[test]
    fn test_hash160_empty() {
        // RIPEMD160(SHA256(""))
        assert_eq!(
            hex::encode(hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }
}
