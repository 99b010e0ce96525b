//! Subcommand handlers. Each returns the process exit code.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{error, info};

use design_memory_analysis::{extract_design_system_with_config, DesignMemory};
use design_memory_core::config::CliOverrides;
use design_memory_core::errors::DesignErrorCode;
use design_memory_core::DesignMemoryConfig;

use super::commands::{ConfigArgs, ExtractArgs, OverrideArgs};
use super::output::{render_json, write_output};

pub fn handle_extract(args: &ExtractArgs) -> i32 {
    exit_code(run_extract(args))
}

pub fn handle_config(args: &ConfigArgs) -> i32 {
    exit_code(run_config(args))
}

fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let memory = extract(args)?;
    let rendered = render_json(&memory, args.compact)?;
    write_output(&rendered, args.output.as_deref())?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), "design memory written");
    }
    Ok(())
}

/// Load configuration and run one extraction.
pub fn extract(args: &ExtractArgs) -> Result<DesignMemory> {
    let config = load_config(&args.overrides)?;
    let root = args
        .repository_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    extract_design_system_with_config(&root, &config)
        .inspect_err(|e| error!(code = e.error_code(), "extraction failed"))
        .with_context(|| format!("Failed to extract design memory from {}", root.display()))
}

pub fn run_config(args: &ConfigArgs) -> Result<()> {
    let config = load_config(&args.overrides)?;
    let rendered = config.to_toml().context("Failed to render configuration")?;
    write_output(rendered.trim_end(), None)
}

fn load_config(overrides: &OverrideArgs) -> Result<DesignMemoryConfig> {
    let cli = CliOverrides::from(overrides);
    DesignMemoryConfig::load(Some(&cli)).context("Failed to load configuration")
}
