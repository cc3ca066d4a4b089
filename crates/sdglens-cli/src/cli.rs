//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SDG Lens CLI - Classify documents against the 17 Sustainable Development Goals.
#[derive(Debug, Parser)]
#[command(name = "sdglens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show pipeline logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a document or a piece of text
    Classify(ClassifyArgs),

    /// List the 17 goals and their keywords
    Sdgs,

    /// Download the model artifact
    FetchModel(FetchModelArgs),
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Plain-text file holding the document body
    pub file: Option<PathBuf>,

    /// Body text given inline
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Document abstract
    #[arg(long = "abstract")]
    pub abstract_text: Option<String>,

    /// Author keyword (repeatable)
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Number of goals to report (1-17)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Model artifact file
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Never call the remote zero-shot service
    #[arg(long)]
    pub offline: bool,

    /// Zero-shot API token
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,
}

/// Arguments for the fetch-model command.
#[derive(Debug, Parser)]
pub struct FetchModelArgs {
    /// Artifact URL
    #[arg(short, long, env = "MODEL_URL")]
    pub url: String,

    /// Destination file (defaults to the configured model directory)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
