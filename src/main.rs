use clap::Parser;
use logindash::LogindashError;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "\
Examples:
  logindash
  logindash --config /path/to/config.toml
  logindash --help";

/// LoginDash - Shows system information on login
#[derive(Parser, Debug)]
#[command(name = "logindash", after_help = EXAMPLES)]
struct Cli {
    /// Path to config file (default: ~/.config/logindash/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let mut out = stdout.lock();

    let result = logindash::run(cli.config.as_deref(), color, &mut out).and_then(|_| {
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(LogindashError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => {
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "failed to write report");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LOGINDASH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
