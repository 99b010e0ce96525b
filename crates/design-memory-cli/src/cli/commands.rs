use clap::{Parser, Subcommand};
use std::path::PathBuf;

use design_memory_core::config::CliOverrides;

/// Extract a reusable design memory from a front-end repository
#[derive(Parser, Debug)]
#[command(
    name = "design-memory",
    about = "Extract a reusable design memory from a front-end repository",
    version,
    long_about = "design-memory scans a React/Next.js project for theme variables, Tailwind \
                  config, UI components and recurring visual patterns, and writes them as \
                  one JSON document another project can be generated from."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Extract the design memory of a repository",
        long_about = "Scans the repository and prints the design memory as JSON.\n\n\
                      Examples:\n  \
                      design-memory extract\n  \
                      design-memory extract ./my-app --output design-memory.json\n  \
                      design-memory extract ./my-app --compact --max-components 50"
    )]
    Extract(ExtractArgs),

    #[command(
        about = "Print the effective configuration",
        long_about = "Resolves user config, --config file, DESIGN_MEMORY_* variables and flags, \
                      and prints the result as TOML."
    )]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to repository (defaults to current directory)"
    )]
    pub repository_path: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Emit single-line JSON")]
    pub compact: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub overrides: OverrideArgs,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Load settings from this TOML file"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "N",
        help = "Maximum number of components to keep"
    )]
    pub max_components: Option<usize>,

    #[arg(
        long,
        value_name = "BYTES",
        help = "Skip source files larger than this"
    )]
    pub max_file_size: Option<u64>,
}

impl From<&OverrideArgs> for CliOverrides {
    fn from(args: &OverrideArgs) -> Self {
        CliOverrides {
            config_file: args.config_file.clone(),
            max_components: args.max_components,
            max_file_size: args.max_file_size,
        }
    }
}
