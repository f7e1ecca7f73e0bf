//! Vault record codec, data model, and storage collaborators.

pub mod codec;
pub mod item;
pub mod store;

pub use codec::{
    decrypt_batch, decrypt_item, encrypt_item, BatchDecryptOutcome, DecryptedRecord, SealedRecord,
};
pub use item::{EncryptedVaultItem, VaultItem};
pub use store::{JsonFileStore, MemoryStore, VaultStorage};
