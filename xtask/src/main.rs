//! Build automation tasks, run as `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use safeyt::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Build automation for safeyt")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for safeyt and its subcommands
    Man {
        /// Directory to write the pages into
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    write_man_page(cmd.clone(), out_dir)?;

    for sub in cmd.get_subcommands() {
        if sub.get_name() == "help" {
            continue;
        }
        let named = sub
            .clone()
            .name(format!("safeyt-{}", sub.get_name()));
        write_man_page(named, out_dir)?;
    }

    println!("Wrote man pages to {}", out_dir.display());
    Ok(())
}

fn write_man_page(cmd: clap::Command, out_dir: &Path) -> Result<()> {
    let name = cmd.get_name().to_string();
    let path = out_dir.join(format!("{}.1", name));

    let mut buffer = Vec::new();
    Man::new(cmd)
        .render(&mut buffer)
        .with_context(|| format!("Failed to render man page for {}", name))?;

    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
