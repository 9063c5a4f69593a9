//! Command-line interface definitions.
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Convert markdown into block records for a hierarchical content API
#[derive(Parser, Debug)]
#[command(name = "markdown-blocks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit single-line JSON regardless of config
    #[arg(long, global = true)]
    pub compact: bool,

    /// Config file path (default: ~/.config/markdown-blocks/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the API block records for a markdown document
    Convert {
        /// Markdown file; stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Print the intermediate parsed blocks
    Parse {
        /// Markdown file; stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Print a create-page request body
    Page {
        /// Page title
        #[arg(long)]
        title: String,

        /// Parent page or database id (default: `[parent]` from config)
        #[arg(long)]
        parent: Option<String>,

        /// Treat the parent as a database
        #[arg(long)]
        database: bool,

        /// Markdown file; stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Print an append-children request for an existing page or block
    Append {
        /// Target page or block id
        #[arg(long)]
        block: String,

        /// Markdown file; stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Print the normalized code language for a raw fence tag
    Language {
        /// Raw tag, e.g. `py` or `C++`
        tag: String,
    },
}
