//! `passvault show` — decrypt and display a single vault entry.

use crate::cli::output;
use crate::cli::{copy_to_clipboard, find_record, open_context, prompt_password, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, entry: &str, copy: bool) -> Result<()> {
    let ctx = open_context(cli)?;

    let master = prompt_password()?;
    let (record, item) = find_record(&ctx.store, &ctx.owner, entry, &master)?;

    output::info(&format!("{} (id {})", item.title, record.id));
    if !item.username.is_empty() {
        println!("Username: {}", item.username);
    }
    if !item.url.is_empty() {
        println!("URL:      {}", item.url);
    }
    if !item.notes.is_empty() {
        println!("Notes:    {}", item.notes);
    }

    if copy {
        copy_to_clipboard(&item.password)?;
        output::success("Password copied to clipboard");
    } else {
        println!("Password: {}", item.password);
    }

    Ok(())
}
