// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cw - Chorewheel CLI

mod app;
mod commands;
mod completions;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{chore, done, list, rewards};
use completions::CompletionsArgs;
use config::{Config, Paths, DEFAULT_LOG_LEVEL, LOG_ENV};
use cw_engine::EngineError;
use error::CwError;
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "cw",
    version,
    about = "Chorewheel - household chores that rotate"
)]
struct Cli {
    /// State directory (default: $CW_STATE_DIR, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chore definitions
    Chore(chore::ChoreArgs),
    /// List chore instances
    List(list::ListArgs),
    /// Complete a pending instance and issue its reward
    Done(done::InstanceArgs),
    /// Undo a completion
    Undo(done::InstanceArgs),
    /// Reward totals
    Rewards(rewards::RewardsArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<EngineError>() {
                Some(engine_err) => eprint!("{}", CwError::explain(engine_err)),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Completions need no state directory
    if let Commands::Completions(args) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let paths = Paths::resolve(cli.state_dir)?;
    let config = Config::load(&paths.state_dir)?;
    setup_logging(&config);
    tracing::debug!(state_dir = %paths.state_dir.display(), "starting");

    let engine = app::open_engine(&paths, &config)?;
    let format = cli.format;

    match cli.command {
        Commands::Chore(args) => chore::handle(&engine, args.command, format).await,
        Commands::List(args) => list::handle(&engine, args, format).await,
        Commands::Done(args) => done::done(&engine, args, format).await,
        Commands::Undo(args) => done::undo(&engine, args, format).await,
        Commands::Rewards(args) => rewards::handle(&engine, args, format).await,
        Commands::Completions(_) => Ok(()),
    }
}

fn setup_logging(config: &Config) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
