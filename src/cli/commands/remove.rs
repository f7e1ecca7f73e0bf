//! `passvault remove` — delete a vault entry.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{find_record, open_context, prompt_password, Cli};
use crate::errors::{Result, VaultError};
use crate::vault::VaultStorage;

/// Execute the `remove` command.
pub fn execute(cli: &Cli, entry: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove entry '{entry}'?"))
            .default(false)
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let mut ctx = open_context(cli)?;

    // Finding by title requires the master password; removal itself
    // does not touch plaintext.
    let master = prompt_password()?;
    let (record, item) = find_record(&ctx.store, &ctx.owner, entry, &master)?;

    ctx.store.remove(&ctx.owner, &record.id)?;
    ctx.store.save()?;

    output::success(&format!("Removed '{}'", item.title));

    Ok(())
}
