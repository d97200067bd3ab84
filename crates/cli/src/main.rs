// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rmk: inventory and check an execution report from the command line.

mod exit_error;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmk_check::CheckConfig;
use rmk_core::ExecutionNode;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::exit_error::ExitError;
use crate::output::{format_check, format_inventory, OutputFormat};

#[derive(Parser)]
#[command(name = "rmk", version, about = "Roll execution reports up into monitoring check results")]
struct Cli {
    /// Check configuration file (TOML)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Discovery level, overriding the configuration file
    #[arg(long, short = 'l', global = true)]
    level: Option<usize>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the items discovered in an execution tree
    Inventory {
        /// Execution tree as JSON
        report: PathBuf,
    },
    /// Evaluate one discovered item; exits with its monitoring state
    Check {
        /// Item name as listed by `inventory`
        item: String,
        /// Execution tree as JSON
        report: PathBuf,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => match err.downcast::<ExitError>() {
            Ok(exit) => {
                println!("{}", exit.message);
                exit.code
            }
            Err(err) => {
                eprintln!("error: {err:#}");
                1
            }
        },
    };
    let _ = std::io::stdout().flush();
    std::process::exit(code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RMK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Inventory { report } => {
            let config = load_config(cli.config.as_deref(), cli.level)?;
            let root = load_report(&report)?;
            let items = rmk_check::inventory(&root, &config)?;
            print!("{}", format_inventory(&items, cli.format)?);
            Ok(0)
        }
        Command::Check { item, report } => {
            let checked = load_config(cli.config.as_deref(), cli.level).and_then(|config| {
                let root = load_report(&report)?;
                Ok(rmk_check::check(&item, &root, &config)?)
            });
            let eval = checked.map_err(|err| ExitError::unknown(&err))?;
            print!("{}", format_check(&eval, cli.format)?);
            Ok(i32::from(eval.severity.code()))
        }
    }
}

fn load_config(path: Option<&Path>, level: Option<usize>) -> Result<CheckConfig> {
    let config = match path {
        Some(path) => CheckConfig::load(path)?,
        None => CheckConfig::default(),
    };
    Ok(match level {
        Some(level) => config.discovery_level(level),
        None => config,
    })
}

fn load_report(path: &Path) -> Result<ExecutionNode> {
    tracing::debug!(report = %path.display(), "loading execution tree");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read report {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid execution tree in {}", path.display()))
}
