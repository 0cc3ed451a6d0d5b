// Declare modules
pub mod cli;
pub mod config;
pub mod extractor;
pub mod formatter;
pub mod ignore_rules;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::Path;

use self::cli::{Cli, Command, ListArgs};
use self::extractor::Extractor;
use self::formatter::OutputGenerator;
use self::models::{RuntimeConfig, TodoRecord};
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Command::List(list_args) => run_list(list_args),
        Command::Marker { value } => run_marker(value),
    }
}

fn run_list(args: ListArgs) -> Result<()> {
    let dir = match args.directory {
        Some(dir) => dir,
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let file_config = config::load()?;
    let config = RuntimeConfig {
        marker: file_config.marker,
        include_hidden: args.hidden,
        no_gitignore: args.no_gitignore,
    };

    let todos = collect_todos(&dir, &config)?;

    if todos.is_empty() {
        println!("No todos were found in {}", dir.display());
        return Ok(());
    }

    print!("{}", OutputGenerator::render(&dir, &todos));
    Ok(())
}

/// Walks the tree once, then extracts marker comments from every candidate
/// file. A file that cannot be read is skipped so the rest of the scan
/// still produces results.
fn collect_todos(dir: &Path, config: &RuntimeConfig) -> Result<Vec<TodoRecord>> {
    let scanner = Scanner::new(config);
    let files = scanner
        .scan(dir)
        .context("Failed to retrieve files from directory")?;

    let extractor = Extractor::new(&config.marker)?;

    let mut todos = Vec::new();
    for file in &files {
        match extractor.extract(dir, file) {
            Ok(found) => todos.extend(found),
            Err(err) => log::warn!("Error while processing file {}: {}", file.display(), err),
        }
    }
    Ok(todos)
}

fn run_marker(value: Option<String>) -> Result<()> {
    match value {
        None => {
            let file_config = config::load()?;
            println!(
                "The current marker for todo comments is: {}",
                file_config.marker
            );
        }
        Some(marker) => {
            config::store_marker(&marker)?;
            println!("Marker set to: {marker}");
        }
    }
    Ok(())
}
