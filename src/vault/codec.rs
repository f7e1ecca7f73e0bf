//! Vault record codec: serialize, encrypt, and base64-wrap vault items.
//!
//! Encrypt path: fresh salt -> derive key -> serialize item to JSON ->
//! AES-256-GCM -> base64.  Decrypt path is the reverse, driven by the
//! salt stored next to the ciphertext.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroize;

use crate::crypto::{derive_key, generate_salt};
use crate::errors::{Result, VaultError};

use super::item::{EncryptedVaultItem, VaultItem};

/// Output of [`encrypt_item`]: the base64 ciphertext blob and the
/// base64 salt it was derived under.  Stored and replaced as a pair.
#[derive(Debug, Clone)]
pub struct SealedRecord {
    /// `base64(nonce || ciphertext || tag)`.
    pub ciphertext: String,

    /// `base64(16 random bytes)`.
    pub salt: String,
}

/// Encrypt a vault item under the master password.
///
/// Every call generates a fresh salt and nonce, including calls that
/// re-encrypt unchanged content, so a (salt, key) pair is never used
/// for more than one write.
pub fn encrypt_item(item: &VaultItem, master_password: &str) -> Result<SealedRecord> {
    let salt = generate_salt()?;
    let key = derive_key(master_password, &salt);

    let mut plaintext = serde_json::to_vec(item)
        .map_err(|e| VaultError::SerializationError(format!("vault item: {e}")))?;

    // Encrypt, then wipe the plaintext buffer before checking the result.
    let blob = key.encrypt(&plaintext);
    plaintext.zeroize();
    let blob = blob?;

    Ok(SealedRecord {
        ciphertext: BASE64.encode(&blob),
        salt: BASE64.encode(salt),
    })
}

/// Decrypt a stored ciphertext blob back into a [`VaultItem`].
///
/// Malformed base64, a truncated blob, a failed auth tag (wrong
/// password or tampering), and unparseable plaintext all surface as
/// the same [`VaultError::DecryptionFailed`].
pub fn decrypt_item(
    ciphertext_b64: &str,
    salt_b64: &str,
    master_password: &str,
) -> Result<VaultItem> {
    let salt = BASE64
        .decode(salt_b64)
        .map_err(|_| VaultError::DecryptionFailed)?;
    let blob = BASE64
        .decode(ciphertext_b64)
        .map_err(|_| VaultError::DecryptionFailed)?;

    let key = derive_key(master_password, &salt);
    let mut plaintext = key.decrypt(&blob)?;

    let item = serde_json::from_slice(&plaintext).map_err(|_| VaultError::DecryptionFailed);
    plaintext.zeroize();
    item
}

/// One successfully decrypted record from a batch load.
#[derive(Debug, Clone)]
pub struct DecryptedRecord {
    /// Id of the stored record this item came from.
    pub id: String,

    /// The decrypted item.
    pub item: VaultItem,
}

/// Outcome of decrypting a list of records.
///
/// A record that fails to decrypt is reported in `failed_ids` and does
/// not abort the rest of the batch: one unrecoverable blob must not
/// hide the remainder of the vault.
#[derive(Debug)]
pub struct BatchDecryptOutcome {
    /// Records that decrypted successfully, in input order.
    pub items: Vec<DecryptedRecord>,

    /// Ids of records that could not be decrypted.
    pub failed_ids: Vec<String>,
}

impl BatchDecryptOutcome {
    /// `true` if at least one record failed to decrypt.
    pub fn has_failures(&self) -> bool {
        !self.failed_ids.is_empty()
    }
}

/// Decrypt every record in `records` with the master password.
///
/// Each record is self-contained (own salt, own nonce), so failures
/// are independent; the whole batch never raises.
pub fn decrypt_batch(records: &[EncryptedVaultItem], master_password: &str) -> BatchDecryptOutcome {
    let mut items = Vec::with_capacity(records.len());
    let mut failed_ids = Vec::new();

    for record in records {
        match record.open(master_password) {
            Ok(item) => items.push(DecryptedRecord {
                id: record.id.clone(),
                item,
            }),
            Err(_) => failed_ids.push(record.id.clone()),
        }
    }

    BatchDecryptOutcome { items, failed_ids }
}
