//! Shell completion script generation

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use castedit::cli::Cli;

/// Print the completion script for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut io::stdout());
}
