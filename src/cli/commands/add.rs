//! `passvault add` — encrypt and store a new vault entry.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{open_context, prompt_password, Cli};
use crate::errors::{Result, VaultError};
use crate::generator::{self, score_password, PasswordOptions};
use crate::vault::{EncryptedVaultItem, VaultItem, VaultStorage};

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    title: &str,
    username: &str,
    url: &str,
    notes: &str,
    generate: bool,
) -> Result<()> {
    let mut ctx = open_context(cli)?;

    // Determine the entry's password from one of three sources.
    let password_value = if generate {
        // Source 1: Freshly generated under the configured length.
        let options = PasswordOptions {
            length: ctx.settings.generator_length,
            ..PasswordOptions::default()
        };
        let generated = generator::generate(&options)?;
        let strength = score_password(&generated);
        output::info(&format!(
            "Generated a {}-character password ({})",
            options.length, strength.label
        ));
        generated
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive secure prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter password for {title}"))
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("input prompt: {e}")))?
    };

    // Seal the entry and store it.
    let master = prompt_password()?;
    let item = VaultItem {
        title: title.to_string(),
        username: username.to_string(),
        password: password_value,
        url: url.to_string(),
        notes: notes.to_string(),
    };

    let record = EncryptedVaultItem::seal(&ctx.owner, &item, &master)?;
    ctx.store.put(record)?;
    ctx.store.save()?;

    let total = ctx.store.list(&ctx.owner)?.len();
    output::success(&format!("Added '{title}' to the vault ({total} total)"));
    output::tip(&format!("Run `passvault show {title} --copy` to use it."));

    Ok(())
}
