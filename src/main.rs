use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = daypulse::cli::Cli::parse();

    match cli.command.clone() {
        Some(daypulse::cli::CliCommand::Tui) | None => {
            let config = daypulse::config::from_cli(&cli)?;
            daypulse::tui::run(config)?;
        }
    }

    Ok(())
}
