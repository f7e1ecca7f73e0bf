use clap::Parser;
use passvault::cli::{validate_owner, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Validate the owner identity early to catch typos.
    if let Some(owner) = &cli.owner {
        if let Err(e) = validate_owner(owner) {
            passvault::cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Add {
            ref title,
            ref username,
            ref url,
            ref notes,
            generate,
        } => passvault::cli::commands::add::execute(&cli, title, username, url, notes, generate),
        Commands::Show { ref entry, copy } => {
            passvault::cli::commands::show::execute(&cli, entry, copy)
        }
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Remove { ref entry, force } => {
            passvault::cli::commands::remove::execute(&cli, entry, force)
        }
        Commands::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
            exclude_similar,
            copy,
        } => passvault::cli::commands::generate::execute(
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
            exclude_similar,
            copy,
        ),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
