use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Personal bilingual word list with CSV import/export and self-tests")]
pub struct Cli {
    /// JSON config file, overrides environment settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile name, looked up as `<data_dir>/profiles/<name>.json`
    #[arg(long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Cmd {
    /// Start with an empty word list
    Init,
    /// Replace the word list with the content of a .csv or .txt file
    Import { file: PathBuf },
    /// Write the word list as CSV
    Export {
        /// Target file, defaults to the configured export file name
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
        /// Clear the word list once the export is written
        #[arg(long, default_value_t = false)]
        reset: bool,
    },
    /// Add one word
    Add {
        source: String,
        target: String,
        #[arg(long, short)]
        example: Option<String>,
    },
    /// Show every word with its counters
    List,
    /// Self-test on a random sample of words
    Test {
        /// Show the translation and ask for the original word
        #[arg(long, default_value_t = false)]
        reverse: bool,
        /// Number of words to draw
        #[arg(long)]
        size: Option<usize>,
    },
    /// Check one answer against a stored translation
    Check { target: String, answer: String },
    /// Delete the word list and the setup flag
    Reset,
}
