//! `dining`: replay scenario steps and audit the video catalog.
//!
//! ```text
//! dining [--config dining.toml] replay --start at_table navigate_to_table pick_mug
//! dining [--config dining.toml] catalog [--missing]
//! ```
//!
//! `replay` prints one JSON response per line on stdout, followed by the
//! trajectory digest on stderr. `catalog` prints the reachable video ids.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use dining_harness::config::HarnessConfig;
use dining_harness::runner::{trajectory_digest, SessionRunner};
use dining_harness::session::InMemorySessionStore;
use dining_harness::telemetry::init_tracing;
use dining_kernel::state::start::StartCondition;
use dining_kernel::video::reachable::required_video_ids;
use dining_suggest::cursor::RngCursor;

#[derive(Parser)]
#[command(name = "dining")]
#[command(about = "Dining-room robot scenario engine")]
struct Args {
    /// Harness configuration (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enter a scenario and apply actions in order.
    Replay {
        #[arg(long)]
        start: StartCondition,
        /// Override the configured initial cursor.
        #[arg(long)]
        cursor: Option<u64>,
        #[arg(long, default_value = "cli")]
        session: String,
        /// Action symbols, e.g. `navigate_to_table`.
        actions: Vec<String>,
    },
    /// List the video ids a complete catalog must contain.
    Catalog {
        /// Print only ids the configured catalog lacks.
        #[arg(long)]
        missing: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_tracing() {
        eprintln!("tracing init failed: {e}");
    }
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "dining failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    };
    let catalog = config.build_catalog()?;
    let mut out = std::io::stdout().lock();

    match args.command {
        Command::Replay {
            start,
            cursor,
            session,
            actions,
        } => {
            let cursor = cursor.map_or_else(|| config.initial_cursor(), RngCursor::new);
            let runner = SessionRunner::new(catalog, InMemorySessionStore::new());
            runner.open_session(&session, config.session.clone(), cursor)?;
            let responses = runner.replay(&session, start.state(), &actions)?;
            for response in &responses {
                serde_json::to_writer(&mut out, response)?;
                writeln!(out)?;
            }
            eprintln!("trajectory {}", trajectory_digest(&responses)?);
            let refused = responses.iter().any(|r| !r.accepted);
            Ok(if refused {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Catalog { missing } => {
            let required = required_video_ids();
            let ids: Vec<&str> = if missing {
                catalog.missing(required.iter().map(String::as_str))
            } else {
                required.iter().map(String::as_str).collect()
            };
            for id in &ids {
                writeln!(out, "{id}")?;
            }
            Ok(if missing && !ids.is_empty() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}
