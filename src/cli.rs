//! Command-line argument parsing for the rxcmd demo shell.

use clap::Parser;
use rxcmd::config::Config;
use std::path::PathBuf;

/// An interactive shell demonstrating the rxcmd dispatch engine.
#[derive(Parser, Debug)]
#[command(name = "rxcmd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to a file instead of stderr (keeps the prompt clean)
    #[arg(long)]
    pub log_file: bool,

    /// Dispatch these lines and exit instead of reading stdin
    #[arg(short = 'e', long = "execute", value_name = "LINE")]
    pub execute: Vec<String>,

    /// Override the prompt from the config file
    #[arg(long, value_name = "PROMPT")]
    pub prompt: Option<String>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path: `--config` if given, the platform
    /// default otherwise.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }
}
