use std::fs;
use std::sync::{Mutex, MutexGuard};

use clap::Parser;
use design_memory_cli::cli::commands::{CliArgs, Commands};
use design_memory_cli::cli::handlers::{extract, run_extract};
use tempfile::TempDir;

/// Serializes tests that repoint `HOME` and clear `DESIGN_MEMORY_*`.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Holds the env lock with `HOME` pointed at an empty directory, so
/// `DesignMemoryConfig::load` never sees the developer's own config.
struct IsolatedEnv {
    home: TempDir,
    previous_home: Option<std::ffi::OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl IsolatedEnv {
    fn new() -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let home = TempDir::new().unwrap();
        let previous_home = std::env::var_os("HOME");
        std::env::set_var("HOME", home.path());
        for key in [
            "DESIGN_MEMORY_MAX_COMPONENTS",
            "DESIGN_MEMORY_MIN_COMPONENT_CHARS",
            "DESIGN_MEMORY_MAX_FILE_SIZE",
        ] {
            std::env::remove_var(key);
        }
        Self {
            home,
            previous_home,
            _lock: lock,
        }
    }
}

impl Drop for IsolatedEnv {
    fn drop(&mut self) {
        match self.previous_home.take() {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }
}

fn parse(argv: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(argv).unwrap()
}

#[test]
fn test_extract_args_parse() {
    let args = parse(&[
        "design-memory",
        "-v",
        "extract",
        "./site",
        "--output",
        "out/memory.json",
        "--compact",
        "--max-components",
        "5",
    ]);
    assert!(args.verbose);
    let Commands::Extract(extract_args) = args.command else {
        panic!("expected extract");
    };
    assert_eq!(extract_args.repository_path.unwrap().to_str(), Some("./site"));
    assert_eq!(extract_args.output.unwrap().to_str(), Some("out/memory.json"));
    assert!(extract_args.compact);
    assert_eq!(extract_args.overrides.max_components, Some(5));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    assert!(CliArgs::try_parse_from(["design-memory", "-v", "-q", "extract"]).is_err());
}

#[test]
fn test_extract_writes_json_file() {
    let _env = IsolatedEnv::new();
    let repo = TempDir::new().unwrap();
    fs::create_dir_all(repo.path().join("app")).unwrap();
    fs::write(repo.path().join("app/globals.css"), ":root { --background: 0 0% 100%; }").unwrap();
    let out = TempDir::new().unwrap();
    let out_file = out.path().join("nested/memory.json");

    let args = parse(&[
        "design-memory",
        "extract",
        repo.path().to_str().unwrap(),
        "--output",
        out_file.to_str().unwrap(),
    ]);
    let Commands::Extract(extract_args) = args.command else {
        panic!("expected extract");
    };
    run_extract(&extract_args).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_file).unwrap()).unwrap();
    assert_eq!(
        written["designTokens"]["colors"]["light"]["background"],
        "0 0% 100%"
    );
}

#[test]
fn test_missing_repository_is_an_error() {
    let _env = IsolatedEnv::new();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let args = parse(&["design-memory", "extract", missing.to_str().unwrap()]);
    let Commands::Extract(extract_args) = args.command else {
        panic!("expected extract");
    };

    let err = extract(&extract_args).unwrap_err();
    assert!(format!("{err:#}").contains("Repository path does not exist"));
}

#[test]
fn test_user_config_is_read_from_home() {
    let env = IsolatedEnv::new();
    let config_dir = env.home.path().join(".design-memory");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[scan]\nmax_components = 1\n").unwrap();

    let repo = TempDir::new().unwrap();
    fs::create_dir_all(repo.path().join("components/ui")).unwrap();
    for name in ["alpha", "beta"] {
        fs::write(
            repo.path().join(format!("components/ui/{name}.tsx")),
            format!("export function {name}() {{ return null }}"),
        )
        .unwrap();
    }
    let args = parse(&["design-memory", "extract", repo.path().to_str().unwrap()]);
    let Commands::Extract(extract_args) = args.command else {
        panic!("expected extract");
    };

    let memory = extract(&extract_args).unwrap();
    assert_eq!(memory.components.len(), 1);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let _env = IsolatedEnv::new();
    let dir = TempDir::new().unwrap();
    let args = parse(&[
        "design-memory",
        "extract",
        dir.path().to_str().unwrap(),
        "--config",
        dir.path().join("nope.toml").to_str().unwrap(),
    ]);
    let Commands::Extract(extract_args) = args.command else {
        panic!("expected extract");
    };
    assert!(extract(&extract_args).is_err());
}
