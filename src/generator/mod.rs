//! Random password generation.
//!
//! The generator is independent of the crypto engine: it draws from the
//! OS RNG, never touches keys or the vault, and is a pure function of
//! its options apart from the randomness itself.

pub mod strength;

pub use strength::{score_password, PasswordStrength, StrengthLabel};

use rand::TryRngCore;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;

/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 64;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that look alike in many fonts and get mistyped.
const SIMILAR_CHARS: &str = "il1Lo0O";

/// Configuration for a single `generate` call.
///
/// There are no hidden defaults beyond one explicit policy: when no
/// character class is selected at all, the generator falls back to
/// lowercase letters instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordOptions {
    /// Output length, within [`MIN_LENGTH`]..=[`MAX_LENGTH`].
    pub length: usize,

    /// Include `A-Z`.
    pub include_uppercase: bool,

    /// Include `a-z`.
    pub include_lowercase: bool,

    /// Include `0-9`.
    pub include_numbers: bool,

    /// Include punctuation symbols.
    pub include_symbols: bool,

    /// Drop easily confused characters (`i l 1 L o 0 O`) from the
    /// assembled set.
    pub exclude_similar: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
        }
    }
}

/// Generate a random password under the given options.
///
/// Length bounds are checked before any randomness is drawn.  Every
/// character is an independent uniform draw over the assembled set;
/// the draws use rejection sampling, so no value is more likely than
/// another even when the set size does not divide the RNG's range.
pub fn generate(options: &PasswordOptions) -> Result<String> {
    if options.length < MIN_LENGTH || options.length > MAX_LENGTH {
        return Err(VaultError::InvalidOptions(format!(
            "length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {}",
            options.length
        )));
    }

    let charset = build_charset(options);

    let mut password = String::with_capacity(options.length);
    for _ in 0..options.length {
        let index = sample_index(charset.len())?;
        password.push(charset[index]);
    }

    Ok(password)
}

/// Assemble the candidate character set from the selected classes.
///
/// Confusable characters are filtered from the assembled union, not per
/// class, and the lowercase fallback applies to the post-filter result.
fn build_charset(options: &PasswordOptions) -> Vec<char> {
    let mut set = String::new();

    if options.include_uppercase {
        set.push_str(UPPERCASE);
    }
    if options.include_lowercase {
        set.push_str(LOWERCASE);
    }
    if options.include_numbers {
        set.push_str(DIGITS);
    }
    if options.include_symbols {
        set.push_str(SYMBOLS);
    }

    if options.exclude_similar {
        set.retain(|c| !SIMILAR_CHARS.contains(c));
    }

    // No class selected: fall back to lowercase rather than failing.
    if set.is_empty() {
        set.push_str(LOWERCASE);
    }

    set.chars().collect()
}

/// Uniform random index in `[0, limit)` from the OS RNG.
///
/// Rejects draws at or above the largest multiple of `limit` that fits
/// in a `u32`, so the final modulo cannot skew the distribution.
fn sample_index(limit: usize) -> Result<usize> {
    debug_assert!(limit > 0, "charset is never empty after fallback");
    let limit = limit as u32;

    let zone = u32::MAX - (u32::MAX % limit);
    loop {
        let mut bytes = [0u8; 4];
        rand::rngs::OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| VaultError::CryptoUnavailable(format!("OS RNG failed: {e}")))?;

        let candidate = u32::from_le_bytes(bytes);
        if candidate < zone {
            return Ok((candidate % limit) as usize);
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
