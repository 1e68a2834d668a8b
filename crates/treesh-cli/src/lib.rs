//! Command-line front end for the treesh engine.
//!
//! Parses arguments, loads the optional configuration file, installs the
//! logger and runs an interactive [`Shell`] with the built-in commands.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::{Env, Target};
use thiserror::Error;
use treesh::terminal::Console;
use treesh::{Shell, ShellConfig, ShellError};

/// Filter used when neither `--log-level` nor `RUST_LOG` is given.
const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// Arguments
// ============================================================================

/// Tree-structured interactive command shell.
#[derive(Debug, Parser)]
#[command(name = "treesh", version, about)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prompt printed before the input line; overrides the config file.
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Append log output to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, in `RUST_LOG` syntax (e.g. `debug` or `treesh=trace`).
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Shell(#[from] ShellError),
}

pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Setup
// ============================================================================

/// Build the shell configuration from the file (if any) and the flags.
pub fn load_config(cli: &Cli) -> CliResult<ShellConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ShellConfig::default(),
    };
    if let Some(prompt) = &cli.prompt {
        config.prompt = prompt.clone();
    }
    Ok(config)
}

fn read_config(path: &Path) -> CliResult<ShellConfig> {
    let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &content)
}

fn parse_config(path: &Path, content: &str) -> CliResult<ShellConfig> {
    toml::from_str(content).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Install the global logger.
pub fn init_logging(cli: &Cli) -> CliResult<()> {
    let mut builder = match &cli.log_level {
        Some(filter) => {
            let mut builder = env_logger::Builder::new();
            builder.parse_filters(filter);
            builder
        }
        None => {
            env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        }
    };
    builder.format_timestamp(None);

    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| CliError::LogFile {
                path: path.clone(),
                source,
            })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Parse the command line and run the shell until it stops.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = load_config(&cli)?;
    log::info!("starting shell with prompt {:?}", config.prompt);

    let mut shell = Shell::new(config, Console::stdout());
    shell.run_interactive()?;

    log::info!("shell stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "treesh",
            "--config",
            "shell.toml",
            "--prompt",
            "net> ",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.config.as_deref(), Some(Path::new("shell.toml")));
        assert_eq!(cli.prompt.as_deref(), Some("net> "));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_default_config_without_flags() {
        let cli = Cli::parse_from(["treesh"]);
        assert_eq!(load_config(&cli).unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_prompt_flag_overrides_file() {
        let path = std::env::temp_dir().join(format!("treesh-test-{}.toml", std::process::id()));
        fs::write(&path, "prompt = \"file> \"\nbanner = \"\"\n").unwrap();

        let config_arg = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from([
            "treesh",
            "--config",
            config_arg.as_str(),
            "--prompt",
            "flag> ",
        ]);
        let config = load_config(&cli).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.prompt, "flag> ");
        assert_eq!(config.banner, "");
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from(["treesh", "--config", "/nonexistent/treesh.toml"]);
        let err = load_config(&cli).unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));
        assert!(err.to_string().starts_with("failed to read config /nonexistent/treesh.toml"));
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config(Path::new("bad.toml"), "prompt = 3").unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
        assert!(err.to_string().starts_with("invalid config bad.toml"));
    }
}
