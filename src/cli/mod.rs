//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, VaultError};
use crate::session::SessionKeyCache;
use crate::vault::{EncryptedVaultItem, JsonFileStore, VaultItem, VaultStorage};

/// Session identifier under which the CLI caches the master password.
const CLI_SESSION: &str = "cli";

/// PassVault CLI: client-side encrypted password manager.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Client-side encrypted password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Owner identity that scopes vault entries (default: from config)
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Path to the vault store file (default: from config)
    #[arg(long, global = true)]
    pub store: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a new vault entry
    Add {
        /// Entry title (e.g. GitHub)
        title: String,

        /// Account name or email
        #[arg(short, long, default_value = "")]
        username: String,

        /// Site or service URL
        #[arg(long, default_value = "")]
        url: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,

        /// Generate a random password instead of prompting for one
        #[arg(short, long)]
        generate: bool,
    },

    /// Decrypt and display a single entry
    Show {
        /// Entry title or record id
        entry: String,

        /// Copy the password to the clipboard instead of printing it
        #[arg(short, long)]
        copy: bool,
    },

    /// List all entries for the owner
    List,

    /// Remove an entry
    Remove {
        /// Entry title or record id
        entry: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random password
    Generate {
        /// Password length, 8 to 64 (default: from config)
        #[arg(short, long)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Drop easily confused characters (i, l, 1, L, o, 0, O)
        #[arg(long)]
        exclude_similar: bool,

        /// Copy the password to the clipboard instead of printing it
        #[arg(short, long)]
        copy: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Everything a command needs to touch the vault: loaded settings, the
/// resolved owner identity, and the opened store.
pub struct VaultContext {
    pub settings: Settings,
    pub owner: String,
    pub store: JsonFileStore,
}

/// Resolve settings, owner, and store path from the CLI arguments and
/// open the store.
pub fn open_context(cli: &Cli) -> Result<VaultContext> {
    let project_dir = std::env::current_dir()?;
    let settings = Settings::load(&project_dir)?;

    let owner = cli
        .owner
        .clone()
        .unwrap_or_else(|| settings.default_owner.clone());

    let store_path = match &cli.store {
        Some(path) => project_dir.join(path),
        None => settings.store_path(&project_dir),
    };
    let store = JsonFileStore::open_or_create(&store_path)?;

    Ok(VaultContext {
        settings,
        owner,
        store,
    })
}

/// Get the master password, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (scripts/CI)
/// 2. The process-wide session cache
/// 3. Interactive prompt
///
/// A password obtained from the prompt is cached for the rest of the
/// process. Returns `Zeroizing<String>` so the password is wiped from
/// memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    // 1. Check the environment variable first (CI/CD friendly).
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    // 2. Reuse the password from an earlier unlock in this process.
    let cache = SessionKeyCache::global();
    if let Some(pw) = cache.with_password(CLI_SESSION, |pw| Zeroizing::new(pw.to_string())) {
        return Ok(pw);
    }

    // 3. Fall back to interactive prompt.
    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?;

    if pw.is_empty() {
        return Err(VaultError::CommandFailed(
            "master password cannot be empty".into(),
        ));
    }

    cache.unlock(CLI_SESSION, &pw);
    Ok(Zeroizing::new(pw))
}

/// Find a vault entry by record id or, failing that, by decrypted title.
///
/// Id lookup needs no decryption. Title lookup has to decrypt each of
/// the owner's records, because titles only exist inside the encrypted
/// blob; the most recently updated match wins.
pub fn find_record(
    store: &JsonFileStore,
    owner: &str,
    query: &str,
    master_password: &str,
) -> Result<(EncryptedVaultItem, VaultItem)> {
    if let Ok(record) = store.get(owner, query) {
        let item = record.open(master_password)?;
        return Ok((record, item));
    }

    let records = store.list(owner)?;
    let mut any_decrypted = false;

    for record in &records {
        match record.open(master_password) {
            Ok(item) => {
                any_decrypted = true;
                if item.title == query {
                    return Ok((record.clone(), item));
                }
            }
            Err(_) => continue,
        }
    }

    // Every record failed to decrypt: the master password is wrong (or
    // the whole store is damaged), which must not masquerade as a
    // missing entry.
    if !records.is_empty() && !any_decrypted {
        return Err(VaultError::DecryptionFailed);
    }

    Err(VaultError::ItemNotFound(query.to_string()))
}

/// Copy a secret to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| VaultError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| VaultError::ClipboardError(e.to_string()))?;
    Ok(())
}

/// Validate that an owner identity is safe and sensible.
///
/// Allowed: letters, digits, and `@ . _ -`, so both short handles and
/// email addresses work. Must not be empty. Max length 64 characters.
/// This prevents accidental typos from silently scoping to a new owner.
pub fn validate_owner(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(VaultError::ConfigError(
            "owner identity cannot be empty".into(),
        ));
    }

    if name.len() > 64 {
        return Err(VaultError::ConfigError(
            "owner identity cannot exceed 64 characters".into(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '-'))
    {
        return Err(VaultError::ConfigError(format!(
            "owner identity '{name}' is invalid — only letters, digits, '@', '.', '_', and '-' are allowed"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_owner_names() {
        assert!(validate_owner("local").is_ok());
        assert!(validate_owner("alice").is_ok());
        assert!(validate_owner("alice@example.com").is_ok());
        assert!(validate_owner("team-infra_2").is_ok());
    }

    #[test]
    fn rejects_empty_owner() {
        assert!(validate_owner("").is_err());
    }

    #[test]
    fn rejects_special_chars() {
        assert!(validate_owner("alice smith").is_err());
        assert!(validate_owner("alice/bob").is_err());
        assert!(validate_owner("alice:bob").is_err());
    }

    #[test]
    fn rejects_too_long_owner() {
        let long_name = "a".repeat(65);
        assert!(validate_owner(&long_name).is_err());
    }
}
