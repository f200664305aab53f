//! splitcommit - CLI entry point.

use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use splitcommit::commit::{CommitWorkflow, LlmMessageGenerator, RunOutcome};
use splitcommit::config::Config;
use splitcommit::error::single_line;
use splitcommit::git::{ChangeSource, GitCli};
use splitcommit::llm::OpenAiClient;
use splitcommit::prompter::TerminalPrompter;
use splitcommit::setup::{SetupTarget, check_configuration, print_report, run_setup};

/// Commit source and test changes separately with AI-generated messages.
#[derive(Parser, Debug)]
#[command(name = "splitcommit")]
#[command(about = "Commit source and test changes separately with AI-generated messages")]
#[command(version)]
struct Cli {
    /// Check configuration and environment
    #[arg(long, conflicts_with = "setup")]
    check: bool,

    /// Store an OpenAI API key in your shell profile
    #[arg(long)]
    setup: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from_env();
    let setup_target = SetupTarget::from_env();
    init_tracing(config.debug);
    tracing::debug!("{:?}", config);

    if cli.check {
        print_report(&check_configuration(&config));
        return ExitCode::SUCCESS;
    }

    if cli.setup {
        if let Err(e) = run_setup(&mut TerminalPrompter, &setup_target) {
            println!("{}", e);
        }
        return ExitCode::SUCCESS;
    }

    match run_commit(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", single_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// Run the two-commit workflow in the repository containing the current directory.
async fn run_commit(config: &Config) -> Result<RunOutcome> {
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow!("Failed to read current directory: {}", e))?;
    let git = GitCli::discover(&cwd)?;

    let generator = LlmMessageGenerator::new(OpenAiClient::new(config), config.debug);
    let mut workflow = CommitWorkflow::new(ChangeSource::new(git), generator, TerminalPrompter);

    let outcome = workflow.run().await?;
    Ok(outcome)
}

/// Warnings by default; `DEBUG=true` turns on this crate's debug output.
/// `RUST_LOG` takes precedence over both.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "warn,splitcommit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
