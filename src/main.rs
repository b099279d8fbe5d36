use clap::Parser;
use log::{debug, error};
use std::process::ExitCode;

use recipe_finder::{FinderConfig, RecipeFinder, SearchError, Session, StdTerminal};

#[derive(Parser)]
#[command(
    name = "recipe-finder",
    about = "Find recipes that use all of the given ingredients",
    version
)]
struct Cli {
    /// Recipe database base URL override
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), SearchError> {
    let mut config = FinderConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    debug!("{:#?}", config);

    let finder = RecipeFinder::builder().config(config).build()?;
    let mut session = Session::new(finder, StdTerminal::new());
    session.run().await
}
