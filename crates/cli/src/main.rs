//! Binary that feeds log envelopes to a terminal console.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]

mod commands;
mod error;

use error::Result;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use consolebridge_envelope::Severity;
use consolebridge_host::ColorChoice;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_writer(std::io::stderr)
            .with_max_level(cli.host.log_level)
            .finish(),
    )?;

    match cli.command {
        Commands::Dispatch(args) => commands::dispatch(&cli.host, *args).await,
        Commands::Emit(args) => commands::emit(&cli.host, *args).await,
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    host: HostArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dispatch raw envelopes, one per line
    Dispatch(Box<DispatchArgs>),
    /// Log a single record through a console logger
    Emit(Box<EmitArgs>),
}

/// Options for the local host context and console.
#[derive(clap::Args, Debug)]
struct HostArgs {
    /// When to color console output
    #[arg(long, global = true, value_enum, default_value_t = ColorArg::Auto, env = "CONSOLEBRIDGE_COLOR")]
    color: ColorArg,

    /// Calls the host context holds before dropping new ones
    #[arg(long, global = true, default_value_t = 1024, env = "CONSOLEBRIDGE_QUEUE_CAPACITY")]
    queue_capacity: usize,

    /// Level of the tool's own diagnostics on stderr
    #[arg(long, global = true, default_value_t = Level::WARN, env = "CONSOLEBRIDGE_LOG_LEVEL")]
    log_level: Level,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
struct DispatchArgs {
    /// File to read envelopes from instead of stdin
    #[arg(long, env = "CONSOLEBRIDGE_INPUT")]
    input: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct EmitArgs {
    /// Category the record is logged under
    #[arg(long, default_value = "consolebridge")]
    category: String,

    /// Severity of the record
    #[arg(long, default_value_t = Severity::Information)]
    level: Severity,

    /// Lowest severity the logger sends
    #[arg(long, default_value_t = Severity::Information, env = "CONSOLEBRIDGE_MIN_LEVEL")]
    min_level: Severity,

    /// Failure detail shown after the message
    #[arg(long)]
    exception: Option<String>,

    /// Treat the message as a JSON value
    #[arg(long, conflicts_with = "table")]
    json: bool,

    /// Treat the message as a JSON array of rows
    #[arg(long)]
    table: bool,

    /// Message to log
    #[arg(index = 1)]
    message: String,
}
