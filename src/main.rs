//! Application entry point for github-activity.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use github_activity::cli::ActivityRequest;
use github_activity::cli::Args;
use github_activity::cli::print_usage;
use github_activity::config::Config;
use github_activity::display::ActivityDisplay;
use github_activity::feed::github_platform::GitHubPlatform;
use github_activity::logging::setup_logging;
use log::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let failed = e.use_stderr();
            let _ = e.print();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let Some(request) = args.validate()? else {
        print_usage()?;
        return Ok(());
    };

    setup_logging(args.verbose)?;
    let config = Config::from_env()?;
    debug!("Using API at {}", config.api_url);

    show_activity(&config, &request).await
}

async fn show_activity(config: &Config, request: &ActivityRequest) -> Result<()> {
    let platform = Arc::new(GitHubPlatform::with_api_url(&config.api_url)?);
    let display = ActivityDisplay::new(platform);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = display
        .display(&request.username, request.max_events, &mut out)
        .await?;
    out.flush()?;

    debug!("Finished with {:?}", outcome);
    Ok(())
}
