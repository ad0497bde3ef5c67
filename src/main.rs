mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use admin_reports::ReportsError;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::reports::handle(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(error: &ReportsError) -> i32 {
    match error {
        ReportsError::Config(_) | ReportsError::Yaml(_) => 2,
        ReportsError::Network(_) | ReportsError::Transport(_) => 3,
        ReportsError::Http { .. } => 4,
        _ => 1,
    }
}
