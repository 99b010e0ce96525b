use design_memory_cli::cli::commands::{CliArgs, Commands};
use design_memory_cli::cli::handlers::{handle_config, handle_extract};
use design_memory_cli::{NAME, VERSION};
use design_memory_core::tracing::init_tracing_with_default;

use clap::Parser;
use std::process;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Extract(extract_args) => handle_extract(extract_args),
        Commands::Config(config_args) => handle_config(config_args),
    };

    process::exit(exit_code);
}

/// `DESIGN_MEMORY_LOG` still wins; the flags only pick the fallback level.
fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let level = level.to_string().to_lowercase();
    init_tracing_with_default(&format!("design_memory={level}"));
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}
