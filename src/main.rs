mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use drillcraft::cli::{Cli, Commands, ConfigCommands};
use drillcraft::{Config, DrillExtractor};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let pretty = config.output.pretty && !cli.compact;

    match cli.command {
        Commands::Extract { files, drills_only } => {
            let extractor = DrillExtractor::new(config.extraction.clone());
            commands::extract::handle_extract(&extractor, &files, drills_only, pretty)
        }
        Commands::Normalize { file } => commands::normalize::handle_normalize(file.as_deref(), pretty),
        Commands::Sanitize { file } => commands::normalize::handle_sanitize(file.as_deref()),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(&config),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "drillcraft", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
