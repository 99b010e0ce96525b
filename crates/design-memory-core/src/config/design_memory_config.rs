//! Top-level design-memory configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ScanConfig, TokensConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DESIGN_MEMORY_*`)
/// 3. Explicit config file (`--config`)
/// 4. User config (`~/.design-memory/config.toml`)
/// 5. Compiled defaults
///
/// Nothing is read from the scanned tree: it is untrusted input.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DesignMemoryConfig {
    pub scan: ScanConfig,
    pub tokens: TokensConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub max_components: Option<usize>,
    pub max_file_size: Option<u64>,
}

impl DesignMemoryConfig {
    /// Load configuration with layered resolution.
    pub fn load(cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // An unreadable user config is not fatal.
                        ::tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: explicit config file
        if let Some(path) = cli_overrides.and_then(|cli| cli.config_file.as_deref()) {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            Self::merge_toml_file(&mut config, path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DesignMemoryConfig) -> Result<(), ConfigError> {
        if config.scan.max_components == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_components".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scan.source_extensions.iter().any(|ext| ext.starts_with('.')) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.source_extensions".to_string(),
                message: "extensions are written without the leading dot".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.design-memory/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".design-memory").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DesignMemoryConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DesignMemoryConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut DesignMemoryConfig, other: &DesignMemoryConfig) {
        // Scan
        if !other.scan.component_dirs.is_empty() {
            base.scan.component_dirs = other.scan.component_dirs.clone();
        }
        if !other.scan.pattern_dirs.is_empty() {
            base.scan.pattern_dirs = other.scan.pattern_dirs.clone();
        }
        if !other.scan.source_extensions.is_empty() {
            base.scan.source_extensions = other.scan.source_extensions.clone();
        }
        if other.scan.max_components.is_some() {
            base.scan.max_components = other.scan.max_components;
        }
        if other.scan.min_component_chars.is_some() {
            base.scan.min_component_chars = other.scan.min_component_chars;
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }

        // Tokens
        if !other.tokens.stylesheets.is_empty() {
            base.tokens.stylesheets = other.tokens.stylesheets.clone();
        }
        if !other.tokens.tailwind_configs.is_empty() {
            base.tokens.tailwind_configs = other.tokens.tailwind_configs.clone();
        }
        if !other.tokens.utils_files.is_empty() {
            base.tokens.utils_files = other.tokens.utils_files.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DESIGN_MEMORY_MAX_COMPONENTS`, `DESIGN_MEMORY_MAX_FILE_SIZE`, etc.
    fn apply_env_overrides(config: &mut DesignMemoryConfig) {
        Self::apply_env_lookup(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are ignored.
    pub fn apply_env_lookup<F>(config: &mut DesignMemoryConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DESIGN_MEMORY_MAX_COMPONENTS").and_then(|v| v.parse().ok()) {
            config.scan.max_components = Some(v);
        }
        if let Some(v) = lookup("DESIGN_MEMORY_MIN_COMPONENT_CHARS").and_then(|v| v.parse().ok()) {
            config.scan.min_component_chars = Some(v);
        }
        if let Some(v) = lookup("DESIGN_MEMORY_MAX_FILE_SIZE").and_then(|v| v.parse().ok()) {
            config.scan.max_file_size = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut DesignMemoryConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_components {
            config.scan.max_components = Some(v);
        }
        if let Some(v) = cli.max_file_size {
            config.scan.max_file_size = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
