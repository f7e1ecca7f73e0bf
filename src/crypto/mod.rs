//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`, crate-private)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//!
//! The only public handle to key material is [`kdf::DerivedKey`].

mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_key, generate_salt, DerivedKey};
pub use kdf::{derive_key, generate_salt, DerivedKey, PBKDF2_ITERATIONS, SALT_LEN};
