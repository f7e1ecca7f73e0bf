//! `passvault generate` — generate a random password and rate it.

use crate::cli::copy_to_clipboard;
use crate::cli::output;
use crate::config::Settings;
use crate::errors::Result;
use crate::generator::{self, score_password, PasswordOptions};

/// Execute the `generate` command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    length: Option<usize>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_digits: bool,
    no_symbols: bool,
    exclude_similar: bool,
    copy: bool,
) -> Result<()> {
    let project_dir = std::env::current_dir()?;
    let settings = Settings::load(&project_dir)?;

    let options = PasswordOptions {
        length: length.unwrap_or(settings.generator_length),
        include_uppercase: !no_uppercase,
        include_lowercase: !no_lowercase,
        include_numbers: !no_digits,
        include_symbols: !no_symbols,
        exclude_similar,
    };

    let password = generator::generate(&options)?;
    let strength = score_password(&password);

    if copy {
        copy_to_clipboard(&password)?;
        output::success("Password copied to clipboard");
    } else {
        println!("{password}");
    }

    output::info(&format!(
        "Strength: {} ({}/7)",
        strength.label, strength.score
    ));

    Ok(())
}
