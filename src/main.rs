use anyhow::Result;
use clap::{Parser, Subcommand};

use primer::cli::{handle_backup_command, handle_dates_command, handle_email_command};

#[derive(Parser)]
#[command(
    name = "primer",
    version,
    about = "Terminal walkthrough of core Rust building blocks",
    long_about = "primer is a small tour of three patterns that come up in \
                  nearly every Rust codebase: lazy iteration over a date \
                  range, validated field access on a model, and \
                  guaranteed-release bracketing around a service."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Date-range iteration: one-shot cursor vs. reusable range
    Dates,

    /// Validated email accessor on a user model
    Email,

    /// Scoped service bracketing around a backup, three ways
    Backup,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dates) => handle_dates_command()?,
        Some(Commands::Email) => handle_email_command()?,
        Some(Commands::Backup) => handle_backup_command()?,
        None => {
            handle_dates_command()?;
            println!();
            handle_email_command()?;
            println!();
            handle_backup_command()?;
        }
    }

    Ok(())
}
