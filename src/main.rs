use anyhow::Result;
use clap::Parser;
use keywordmap::cli::{Cli, Commands};
use keywordmap::commands::{self, ArgumentsConfig, DescribeConfig};
use keywordmap::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Describe {
            manifest,
            type_name,
            format,
            output,
            config,
            verbosity: _,
        } => commands::describe_library(DescribeConfig {
            manifest,
            type_name,
            format,
            output,
            config,
        }),
        Commands::Keywords {
            manifest,
            type_name,
            verbosity: _,
        } => commands::list_keywords(manifest, type_name),
        Commands::Arguments {
            manifest,
            keyword,
            type_name,
            config,
            verbosity: _,
        } => commands::show_arguments(ArgumentsConfig {
            manifest,
            keyword,
            type_name,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
