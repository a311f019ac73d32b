use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use version_ident::config::{Config, config_path};
use version_ident::{cli, logging};

#[derive(Parser)]
#[command(name = "version-ident")]
#[command(version, about = "Compare tool versions and resolve version patterns")]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two versions
    Compare { left: String, right: String },
    /// Show validity and development phase of a version
    Check { version: String },
    /// Resolve a version, pattern (e.g. "17*") or range against candidates.
    /// Reads candidates from stdin, one per line, if none are given.
    Resolve {
        spec: String,
        candidates: Vec<String>,
    },
    /// Sort versions newest first. Reads from stdin if none are given.
    Sort { versions: Vec<String> },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = Config::load(&args.config.unwrap_or_else(config_path))?;
    logging::init(&config.log)?;

    match args.command {
        Command::Compare { left, right } => println!("{}", cli::compare(&left, &right)?),
        Command::Check { version } => println!("{}", cli::check(&version)?),
        Command::Resolve { spec, candidates } => {
            let candidates = or_stdin(candidates)?;
            println!("{}", cli::resolve(&spec, &candidates, &config.resolve)?);
        }
        Command::Sort { versions } => {
            for version in cli::sort(&or_stdin(versions)?) {
                println!("{}", version);
            }
        }
    }
    Ok(())
}

fn or_stdin(values: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
