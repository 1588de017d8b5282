use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "keywordmap")]
#[command(
    about = "Describe overloaded library members as host-callable keywords",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe a library: constants, keywords and merged arguments
    Describe {
        /// Library manifest (.json, .yaml, .yml or .toml)
        manifest: PathBuf,

        /// Library type, optionally assembly-qualified ("Namespace.Class, Assembly")
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to searching for .keywordmap.toml)
        #[arg(short, long, env = "KEYWORDMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List keyword names, one per line
    Keywords {
        /// Library manifest
        manifest: PathBuf,

        /// Library type, optionally assembly-qualified
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,

        /// Increase verbosity level
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Print the argument specs and host types of one keyword as JSON
    Arguments {
        /// Library manifest
        manifest: PathBuf,

        /// Keyword name
        keyword: String,

        /// Library type, optionally assembly-qualified
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,

        /// Configuration file
        #[arg(short, long, env = "KEYWORDMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Increase verbosity level
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a .keywordmap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::Describe { verbosity, .. }
            | Self::Keywords { verbosity, .. }
            | Self::Arguments { verbosity, .. } => *verbosity,
            Self::Init { .. } => 0,
        }
    }
}
