//! SDG Lens CLI - Command-line interface for SDG classification.

use clap::Parser;
use sdglens_cli::commands;
use sdglens_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config, falling back to defaults
    let config = Config::load().unwrap_or_default();

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    if let Err(e) = run(cli.command, &config, &formatter).await {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config, formatter: &Formatter) -> sdglens_cli::Result<()> {
    match command {
        Command::Classify(args) => commands::execute_classify(args, config, formatter).await,
        Command::Sdgs => commands::execute_sdgs(formatter),
        Command::FetchModel(args) => commands::execute_fetch_model(args, config, formatter).await,
    }
}

/// Logs go to stderr so JSON output stays clean; `warn` unless `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
