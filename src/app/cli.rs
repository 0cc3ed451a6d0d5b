use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find TODO: comments in your codebase")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all todo comments found in a directory
    List(ListArgs),

    /// Show or set the marker for a todo comment
    Marker {
        /// New marker value; prints the current marker when omitted
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to search (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Include hidden directories in the search
    #[arg(long, short = 'a')]
    pub hidden: bool,

    /// Include files excluded by .gitignore
    #[arg(long, short = 'g')]
    pub no_gitignore: bool,
}
