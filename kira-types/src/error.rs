use thiserror::Error;

/// All error codes produced while deriving keys from a master mnemonic.
///
/// Variants carry only non-secret context (paths, library messages); a
/// mnemonic never ends up inside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeygenError {
    // ─── Input Validation ────────────────────────────────────────────────────
    #[error("invalid mnemonic: {reason}")]
    InvalidMnemonic { reason: String },

    #[error("invalid output path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    // ─── Derivation ──────────────────────────────────────────────────────────
    #[error("mnemonic encoding failed: {reason}")]
    Encoding { reason: String },

    #[error("key derivation failed: {reason}")]
    KeyDerivation { reason: String },

    // ─── Artifacts ───────────────────────────────────────────────────────────
    #[error("failed to write artifact '{path}': {reason}")]
    ArtifactWrite { path: String, reason: String },
}

impl KeygenError {
    /// Build an `ArtifactWrite` error from an I/O failure on `path`.
    pub fn artifact_write(path: impl AsRef<std::path::Path>, err: impl std::fmt::Display) -> Self {
        KeygenError::ArtifactWrite {
            path: path.as_ref().display().to_string(),
            reason: err.to_string(),
        }
    }
}
