use clap::Parser;
use kira_keygen::cli::{self, Cli};
use kira_keygen::config::KeygenConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let config = KeygenConfig::load_or_default(cli.config.as_deref());

    // RUST_LOG wins over the configured level. Logs go to stderr so stdout
    // carries only command output.
    let level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config.and_then(|config| cli::run(cli.command, config)) {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
