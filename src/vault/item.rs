//! VaultItem and EncryptedVaultItem types.
//!
//! `VaultItem` is the plaintext record the UI works with; it only ever
//! lives in memory.  `EncryptedVaultItem` is what the storage layer
//! sees: an opaque base64 ciphertext blob plus the base64 salt it was
//! derived under, and nothing else it could learn anything from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

use super::codec;

/// A single decrypted vault entry.
///
/// The whole record is serialized and encrypted as one blob, not
/// field-by-field.  Never persisted in this form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultItem {
    /// Display name of the entry (e.g. "GitHub").
    pub title: String,

    /// Account name or email.
    pub username: String,

    /// The stored secret itself.
    pub password: String,

    /// Site or service URL.
    pub url: String,

    /// Free-form notes.
    pub notes: String,
}

// Hand-written so the password and notes never reach log output.
impl std::fmt::Debug for VaultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultItem")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("url", &self.url)
            .field("notes", &"<redacted>")
            .finish()
    }
}

/// The persisted representation of a vault item.
///
/// `ciphertext` is `base64(nonce || ciphertext || tag)` and `salt` is
/// `base64(16 random bytes)`.  The two are only valid as a pair: a salt
/// from one write cannot decrypt the ciphertext of another.  Always go
/// through [`EncryptedVaultItem::seal`] / [`EncryptedVaultItem::reseal`],
/// which replace both together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedVaultItem {
    /// Unique record identifier.
    pub id: String,

    /// Opaque owner identity used to scope storage queries.
    pub owner: String,

    /// Base64-encoded encrypted blob (nonce || ciphertext || tag).
    pub ciphertext: String,

    /// Base64-encoded KDF salt for this record.
    pub salt: String,

    /// When this record was first created.
    pub created_at: DateTime<Utc>,

    /// When this record was last re-encrypted.
    pub updated_at: DateTime<Utc>,
}

impl EncryptedVaultItem {
    /// Encrypt `item` into a brand-new record for `owner`.
    pub fn seal(owner: &str, item: &VaultItem, master_password: &str) -> Result<Self> {
        let sealed = codec::encrypt_item(item, master_password)?;
        let now = Utc::now();

        Ok(Self {
            id: nanoid::nanoid!(),
            owner: owner.to_string(),
            ciphertext: sealed.ciphertext,
            salt: sealed.salt,
            created_at: now,
            updated_at: now,
        })
    }

    /// Re-encrypt this record with new content.
    ///
    /// Generates a fresh salt and ciphertext even when `item` is
    /// unchanged, and replaces both fields in one step along with
    /// `updated_at`.  `id`, `owner`, and `created_at` are preserved.
    pub fn reseal(&mut self, item: &VaultItem, master_password: &str) -> Result<()> {
        let sealed = codec::encrypt_item(item, master_password)?;
        self.ciphertext = sealed.ciphertext;
        self.salt = sealed.salt;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Decrypt this record back into a [`VaultItem`].
    ///
    /// A wrong master password and a corrupted blob fail identically.
    pub fn open(&self, master_password: &str) -> Result<VaultItem> {
        codec::decrypt_item(&self.ciphertext, &self.salt, master_password)
    }
}
