//! `passvault list` — display all entries in a table.

use std::collections::HashMap;

use crate::cli::output;
use crate::cli::{open_context, prompt_password, Cli};
use crate::errors::{Result, VaultError};
use crate::vault::{decrypt_batch, VaultStorage};

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = open_context(cli)?;

    let records = ctx.store.list(&ctx.owner)?;
    if records.is_empty() {
        output::print_entries_table(&[]);
        return Ok(());
    }

    let master = prompt_password()?;
    let outcome = decrypt_batch(&records, &master);

    // Nothing decrypted at all: wrong master password, not a partial
    // failure worth tabulating.
    if outcome.items.is_empty() && outcome.has_failures() {
        return Err(VaultError::DecryptionFailed);
    }

    output::info(&format!(
        "{} — {} entr{}",
        ctx.owner,
        outcome.items.len(),
        if outcome.items.len() == 1 { "y" } else { "ies" }
    ));

    let updated_by_id: HashMap<&str, _> = records
        .iter()
        .map(|r| (r.id.as_str(), r.updated_at))
        .collect();

    let rows: Vec<output::EntryRow> = outcome
        .items
        .iter()
        .map(|decrypted| output::EntryRow {
            title: decrypted.item.title.clone(),
            username: decrypted.item.username.clone(),
            url: decrypted.item.url.clone(),
            updated_at: updated_by_id
                .get(decrypted.id.as_str())
                .copied()
                .unwrap_or_default(),
        })
        .collect();

    output::print_entries_table(&rows);

    if outcome.has_failures() {
        output::warning(&format!(
            "{} entr{} could not be decrypted and {} skipped",
            outcome.failed_ids.len(),
            if outcome.failed_ids.len() == 1 { "y" } else { "ies" },
            if outcome.failed_ids.len() == 1 { "was" } else { "were" }
        ));
    }

    Ok(())
}
