//! CLI for the smgen sitemap generator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smgen_core::config;
use std::path::PathBuf;

use commands::{run_config, run_generate, GenerateArgs};

/// Top-level CLI for smgen.
#[derive(Debug, Parser)]
#[command(name = "smgen")]
#[command(about = "smgen: streaming sitemap generator with gzip rotation and index", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate sitemap files and index from JSON Lines URL records.
    Generate {
        /// Input file with one JSON record per line ("-" or omitted = stdin).
        input: Option<PathBuf>,

        /// Directory for file-N.gz and sitemap-index.xml (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Public URL of the output directory, used in the index (overrides config).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Maximum URLs per data file before rotating (overrides config).
        #[arg(long, value_name = "N")]
        links_per_file: Option<usize>,
    },

    /// Show the config file path and effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Generate {
                input,
                output_dir,
                base_url,
                links_per_file,
            } => {
                let args = GenerateArgs {
                    input,
                    output_dir,
                    base_url,
                    links_per_file,
                };
                run_generate(&cfg, args)?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}
