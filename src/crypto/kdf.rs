//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is fixed: every record ever written was derived
//! with the same parameters, so changing them would orphan stored
//! ciphertext.  Derivation is deterministic in (password, salt); all
//! per-record variation comes from the salt.

use pbkdf2::pbkdf2_hmac;
use rand::TryRngCore;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::errors::{Result, VaultError};

use super::encryption;

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.  Fixed for the life of the stored format.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Generate a cryptographically random 16-byte salt.
///
/// A fresh salt is required for every encryption; salts are persisted
/// next to their ciphertext and must never be reused across records.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| VaultError::CryptoUnavailable(format!("OS RNG failed: {e}")))?;
    Ok(salt)
}

/// Derive an AES-256 key from the master password and a salt.
///
/// The same password + salt always produce the same key, which is what
/// lets a record encrypted under a stored salt be decrypted later.
pub fn derive_key(master_password: &str, salt: &[u8]) -> DerivedKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(
        master_password.as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        &mut key,
    );
    let derived = DerivedKey { bytes: key };
    key.zeroize();
    derived
}

/// An opaque derived key that zeroes its memory when dropped.
///
/// The raw bytes are never exposed: the only things a caller can do
/// with a `DerivedKey` are encrypt and decrypt.  There is no `Debug`,
/// no serde, and no accessor, so the key cannot end up in logs or in
/// serialized state by accident.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Encrypt `plaintext` under this key.
    ///
    /// Returns the self-describing blob `nonce || ciphertext || tag`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        encryption::encrypt(&self.bytes, plaintext)
    }

    /// Decrypt a blob produced by [`DerivedKey::encrypt`].
    pub fn decrypt(&self, blob: &[u8]) -> Result<Vec<u8>> {
        encryption::decrypt(&self.bytes, blob)
    }
}
