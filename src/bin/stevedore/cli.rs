//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Stevedore - dependency closure inspection for .deb and .rpm archives
#[derive(Parser)]
#[command(name = "stevedore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the dependency closure of archives under a directory
    Resolve(ResolveArgs),

    /// List package archives discovered under a directory
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Directory to scan for .deb and .rpm archives
    pub root: PathBuf,

    /// Inspection backend (overrides the config file)
    #[arg(long, value_enum)]
    pub backend: Option<BackendChoice>,

    /// Container image for the container backend
    #[arg(long)]
    pub image: Option<String>,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatChoice,

    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Directory to scan for .deb and .rpm archives
    pub root: PathBuf,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Inspector backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendChoice {
    /// Run inspection tools as local subprocesses
    Local,
    /// Run inspection tools inside an ephemeral container
    Container,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    /// Human-readable three-line entries
    Text,
    /// JSON array of report entries
    Json,
}
