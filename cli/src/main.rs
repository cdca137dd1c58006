//! `insight-cli`: analyze feedback lines from a file or stdin against the
//! sentiment backend and print the mood snapshot.

mod render;
mod transport;

use std::io;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use sentiment::{AnalysisClient, AnalysisResult, HEALTH_PATH, SessionController, SessionState};

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read {source_name}: {error}")]
    Input { source_name: String, error: io::Error },
    #[error("no feedback lines in input")]
    EmptyInput,
    #[error("{0}")]
    Analysis(String),
    #[error("health check failed: {0}")]
    Health(String),
}

#[derive(Parser, Debug)]
#[command(name = "insight-cli", about = "Feedback sentiment analysis from the terminal")]
struct Cli {
    #[arg(long, env = "INSIGHT_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "INSIGHT_TIMEOUT_SECS", help = "Per-request timeout in seconds")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one batch of feedback lines.
    Analyze(AnalyzeArgs),
    /// Check that the backend answers `GET /health`.
    Ping,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
    input: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let transport = ReqwestTransport::new(&cli.base_url, cli.timeout_secs.map(Duration::from_secs))?;
    tracing::debug!(base_url = transport.base_url(), "backend configured");

    match cli.command {
        Command::Analyze(args) => {
            let raw = read_input(&args.input)?;
            let result = run_analyze(transport, raw).await?;
            print!("{}", render::render_result(&result));
            Ok(())
        }
        Command::Ping => {
            run_ping(&transport).await?;
            println!("ok");
            Ok(())
        }
    }
}

/// Whole input from `path`, or stdin for `-`.
fn read_input(path: &str) -> Result<String, CliError> {
    let read = if path == "-" { io::read_to_string(io::stdin()) } else { std::fs::read_to_string(path) };
    read.map_err(|error| CliError::Input { source_name: path.to_owned(), error })
}

/// Drive one session: normalize `raw`, analyze, and return the result.
async fn run_analyze(transport: ReqwestTransport, raw: String) -> Result<AnalysisResult, CliError> {
    let mut session = SessionController::with_input(raw);
    if !session.can_analyze() {
        return Err(CliError::EmptyInput);
    }
    tracing::info!(lines = session.line_count(), "analyzing batch");

    let client = AnalysisClient::new(transport);
    match session.analyze(&client).await {
        SessionState::Success(result) => Ok(result.clone()),
        SessionState::Error(message) => Err(CliError::Analysis(message.clone())),
        other => Err(CliError::Analysis(format!("analysis ended in state {}", other.name()))),
    }
}

async fn run_ping(transport: &ReqwestTransport) -> Result<(), CliError> {
    let reply = transport.get(HEALTH_PATH).await.map_err(|e| CliError::Health(e.to_string()))?;
    if !reply.is_success() {
        return Err(CliError::Health(format!("HTTP {}", reply.status)));
    }
    Ok(())
}
