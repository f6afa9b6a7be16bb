//! phyloverify CLI entry point.

use clap::Parser;

use phyloverify::cli::{commands, handle_error, Cli, Commands};
use phyloverify::infrastructure::config::ConfigLoader;
use phyloverify::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => std::process::exit(handle_error(&err)),
    };

    let logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => std::process::exit(handle_error(&err)),
    };

    let result = match cli.command {
        Commands::Test(args) => commands::test::execute(args, &config).await,
        Commands::Resolve(args) => commands::resolve::execute(args, &config).await,
    };

    let code = result.unwrap_or_else(|err| handle_error(&err));
    // exit() skips destructors; flush the file writer first
    drop(logger);
    std::process::exit(code);
}
