//! castedit - edit asciinema recordings

mod commands;

use anyhow::{bail, Result};
use clap::Parser;

use castedit::cli::{Cli, Commands, ConfigCommands};
use castedit::{logging, Config, Edit};

use commands::Output;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));

    let config_path = cli.config.clone().or_else(Config::config_path);
    let config = match (&cli.config, &config_path) {
        (Some(explicit), _) if !explicit.exists() => {
            bail!("Config file not found: {:?}", explicit)
        }
        (_, Some(path)) => Config::load_from(path)?,
        (_, None) => Config::default(),
    };

    let output = Output {
        path: cli.out,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Keep { input, range } => {
            let mut ranges = range.ranges()?;
            if ranges.len() != 1 {
                bail!(castedit::EditError::KeepRangeCount(ranges.len()));
            }
            let range = ranges.remove(0);
            commands::edit::handle_edit(&input, Edit::Keep(range), &output)
        }
        Commands::Excise { input, range } => {
            commands::edit::handle_edit(&input, Edit::Excise(range.ranges()?), &output)
        }
        Commands::Smush { input, start } => {
            commands::edit::handle_edit(&input, Edit::Smush { start }, &output)
        }
        Commands::Quantize { input, delay } => {
            let max_delay = delay.unwrap_or(config.edit.max_delay);
            commands::edit::handle_edit(&input, Edit::Quantize { max_delay }, &output)
        }
        Commands::Speed {
            input,
            range,
            factor,
        } => {
            let edit = Edit::Speed {
                ranges: range.ranges()?,
                factor: factor.unwrap_or(config.edit.speed_factor),
            };
            commands::edit::handle_edit(&input, edit, &output)
        }
        Commands::PrintStdin { input } => commands::edit::handle_print_stdin(&input),
        Commands::DeleteWord { input, word } => {
            commands::edit::handle_delete_word(&input, &word, &output)
        }
        Commands::Config(ConfigCommands::Show) => {
            commands::config::handle_show(&config, config_path.as_deref())
        }
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
