//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use castedit::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) if path.exists() => println!("# {}", path.display()),
        _ => println!("# defaults (no config file)"),
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
