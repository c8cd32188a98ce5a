//! Render, check, and query the `searchData` index of the `mem` functions.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rawmem::index::builtin;
use rawmem::{SearchIndex, parse_search_data};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the built-in searchData table.
    Render {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse and validate searchData files.
    Check {
        /// The files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List the references of every symbol starting with QUERY.
    Lookup {
        /// A case-insensitive symbol name prefix.
        query: String,
        /// Search this searchData file instead of the built-in table.
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("rawmem-index: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Command::Render { output } => {
            let text = builtin().to_string();
            match output {
                Some(path) => {
                    fs::write(&path, text).map_err(|err| format!("{}: {err}", path.display()))?
                }
                None => io::stdout().lock().write_all(text.as_bytes())?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { files } => {
            for path in files {
                let text = read(&path)?;
                let index =
                    parse_search_data(&text).map_err(|err| format!("{}: {err}", path.display()))?;
                println!("{}: ok ({} entries)", path.display(), index.len());
            }
            Ok(ExitCode::SUCCESS)
        }
        // `SearchIndex` is invariant, so each arm keeps its own index.
        Command::Lookup { query, data } => match data {
            Some(path) => {
                let text = read(&path)?;
                let index =
                    parse_search_data(&text).map_err(|err| format!("{}: {err}", path.display()))?;
                Ok(lookup(&index, &query)?)
            }
            None => Ok(lookup(&builtin(), &query)?),
        },
    }
}

fn lookup(index: &SearchIndex<'_>, query: &str) -> io::Result<ExitCode> {
    let mut out = io::stdout().lock();
    let mut found = false;
    for entry in index.search(query) {
        for r in entry.references() {
            found = true;
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                entry.name(),
                r.file,
                r.url,
                r.signature.as_deref().unwrap_or("")
            )?;
        }
    }
    if found {
        Ok(ExitCode::SUCCESS)
    } else {
        log::info!("No symbol matches `{query}`");
        Ok(ExitCode::FAILURE)
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("{}: {err}", path.display()))
}
