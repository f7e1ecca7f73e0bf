use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Crypto errors ---
    #[error("Cryptographic primitive unavailable: {0}")]
    CryptoUnavailable(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Malformed input and a failed auth tag both land here; callers
    /// get no detail about which one it was.
    #[error("Decryption failed — wrong master password or corrupted data")]
    DecryptionFailed,

    // --- Generator errors ---
    #[error("Invalid generator options: {0}")]
    InvalidOptions(String),

    // --- Storage errors ---
    #[error("Vault item '{0}' not found")]
    ItemNotFound(String),

    #[error("Vault store not found at {0}")]
    StoreNotFound(PathBuf),

    #[error("Invalid vault store format: {0}")]
    InvalidStoreFormat(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
