pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "nowpage")]
#[command(about = "Collect recent watching, reading and building activity", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/nowpage/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch activity and print it as JSON
    Fetch {
        /// Only fetch one source; prints that source's list
        #[arg(short, long, value_enum, default_value_t = SourceArg::All)]
        source: SourceArg,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Write a commented default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    All,
    Letterboxd,
    Goodreads,
    Github,
}
