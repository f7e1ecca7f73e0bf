//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command. Nothing here ever prints a
//! password, key, or ciphertext.

use chrono::{DateTime, Utc};
use comfy_table::{ContentArrangement, Table};
use console::style;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// One row of the `list` table: decrypted metadata alongside the
/// record's storage timestamp. Passwords and notes are never shown.
pub struct EntryRow {
    pub title: String,
    pub username: String,
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

/// Print a table of vault entries (Title, Username, URL, Updated).
pub fn print_entries_table(rows: &[EntryRow]) {
    if rows.is_empty() {
        info("No entries in this vault yet.");
        tip("Run `passvault add <title>` to store your first password.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "Username", "URL", "Updated"]);

    for row in rows {
        table.add_row(vec![
            row.title.clone(),
            row.username.clone(),
            row.url.clone(),
            row.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}
