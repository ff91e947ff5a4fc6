//! satya - SatyaChain verification console
//!
//! Submits claims to the verification service, shows the trust verdict and
//! the ledger block it was recorded in, and keeps a per-session history.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use satya_core::config::{CliOverrides, SatyaConfig};
use satya_session::{Completion, SubmitOutcome, Trigger, VerificationSession};
use satya_transport::HttpClient;

mod render;
mod repl;
mod tracing_setup;

/// satya - SatyaChain verification console
#[derive(Parser, Debug)]
#[command(name = "satya")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a configuration file (defaults to ./satya.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verification service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (no timeout unless set)
    #[arg(long)]
    timeout: Option<u64>,

    /// Log filter directive (trace, debug, info, warn, error, or per-target)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive console (default)
    Console,

    /// Verify a single claim and exit
    Verify {
        /// Claim text or URL
        #[arg(required = true, num_args = 1..)]
        claim: Vec<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_url: self.base_url.clone(),
            log_level: self.log_level.clone(),
            json_logs: self.json_logs.then_some(true),
            request_timeout_secs: self.timeout,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = SatyaConfig::load(&cwd, cli.config.as_deref(), Some(&cli.overrides()))
        .context("Failed to load configuration")?;

    tracing_setup::init_tracing(&config.observability);

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Commands::Console => run_console(config),
        Commands::Verify { claim } => run_verify(config, claim.join(" ")),
    }
}

fn build_session(config: &SatyaConfig) -> Result<VerificationSession<HttpClient>> {
    let client = HttpClient::new(config.service.clone())
        .context("Failed to build verification service client")?;
    tracing::info!(url = client.verify_url(), "console: service configured");

    let mut session = VerificationSession::new(Arc::new(client), config.session.clone());
    session.subscribe(Box::new(render::TerminalRenderer::new(
        std::io::stdout(),
        config.session.clone(),
    )));
    Ok(session)
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")
}

fn run_console(config: SatyaConfig) -> Result<()> {
    let mut session = build_session(&config)?;
    let local = tokio::task::LocalSet::new();
    runtime()?.block_on(local.run_until(repl::run(&mut session)))
}

fn run_verify(config: SatyaConfig, claim: String) -> Result<()> {
    let mut session = build_session(&config)?;
    session.set_claim(claim);

    let outcome = runtime()?.block_on(session.submit(Trigger::Action))?;
    exit_status(outcome)
}

/// Only a resolved verification exits successfully.
fn exit_status(outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Completed(Completion::Resolved(_)) => Ok(()),
        SubmitOutcome::Completed(Completion::Failed(reason)) => {
            bail!("{}", reason.alert().text)
        }
        SubmitOutcome::Rejected(rejection) => bail!("claim not submitted: {rejection:?}"),
    }
}
