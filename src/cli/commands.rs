//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ftag")]
#[command(about = "Tag files and list them by tag", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show progress messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tag repository
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Apply tags to a file
    Tag {
        /// File to tag
        file: PathBuf,

        /// Tags to apply
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Merge TAGs into tag DEST, leaving a single tag named DEST
    #[command(override_usage = "ftag merge TAG... DEST")]
    Merge {
        /// Source tags followed by the destination tag
        #[arg(value_name = "TAG")]
        tags: Vec<String>,
    },

    /// List the tags applied to FILEs (default: entries of the current directory)
    Tags {
        /// List all of the tags defined
        #[arg(short, long)]
        all: bool,

        /// Show only explicitly applied tags
        #[arg(short, long)]
        explicit: bool,

        /// Files to list tags for
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}
