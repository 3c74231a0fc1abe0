use anyhow::Result;
use clap::Parser;
use linetally::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Aggregate {
            path,
            mode,
            top,
            format,
            output,
            verbosity,
        } => {
            init_logging(verbosity);
            let config = linetally::commands::AggregateConfig {
                path,
                mode: mode.into_core(top),
                format: format.into(),
                output,
            };
            linetally::commands::handle_aggregate(config)
        }
        Commands::Score {
            path,
            table,
            format,
            output,
            verbosity,
        } => {
            init_logging(verbosity);
            let config = linetally::commands::ScoreConfig {
                path,
                table: table.into(),
                format: format.into(),
                output,
            };
            linetally::commands::handle_score(config)
        }
    }
}

// Diagnostics go to stderr so the stdout result stays machine-readable.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
