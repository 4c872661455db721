// ABOUTME: Entry point for the gh-deployment CLI application.
// ABOUTME: Parses arguments, configures logging, and runs the action against GitHub.

mod cli;

use clap::Parser;
use cli::Cli;
use gh_deployment::action;
use gh_deployment::api::GitHubClient;
use gh_deployment::error::Result;
use gh_deployment::output::StepOutputs;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stdout)
        .init();

    tracing::info!("action version {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = cli.inputs().resolve()?;

    let client = GitHubClient::new(&settings.api_url, settings.token)?;
    let outputs = StepOutputs::new(settings.output_file);

    action::run(&client, &settings.config, &outputs).await?;
    Ok(())
}
