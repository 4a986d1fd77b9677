//! Development tasks for castedit
//!
//! Usage: `cargo xtask man [--out DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages from the CLI definition
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {:?}", out))?;

    let command = castedit::cli::Cli::command();

    // One page for the tool, one per subcommand (castedit-keep.1, ...)
    write_page(clap_mangen::Man::new(command.clone()), &out.join("castedit.1"))?;
    for sub in command.get_subcommands() {
        let name = format!("castedit-{}", sub.get_name());
        let page = clap_mangen::Man::new(sub.clone()).title(name.to_uppercase());
        write_page(page, &out.join(format!("{}.1", name)))?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_page(page: clap_mangen::Man, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    page
        .render(&mut buffer)
        .with_context(|| format!("Failed to render {:?}", path))?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}
