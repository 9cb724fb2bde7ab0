// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nw: describe, format and run neuroimaging tool interfaces

mod color;
mod commands;
mod exit_error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nw_core::ExecutionConfig;
use nw_interface::VersionCache;

use commands::cmdline::CmdlineArgs;
use commands::run::RunArgs;
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "nw",
    version,
    disable_help_subcommand = true,
    about = "Wrap neuroimaging tools as typed interfaces",
    styles = color::styles()
)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available interfaces
    List,
    /// Describe an interface's inputs and outputs
    Help {
        /// Interface name (see `nw list`)
        interface: String,
    },
    /// Print the command line an interface would run
    Cmdline(CmdlineArgs),
    /// Run an interface and report its outputs
    Run(RunArgs),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli) {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = ExecutionConfig::load()?;
    let versions = VersionCache::new();
    tracing::debug!(?config, "loaded execution config");

    match cli.command {
        Commands::List => commands::list::handle(cli.output),
        Commands::Help { interface } => commands::help::handle(&interface, &config, &versions),
        Commands::Cmdline(args) => commands::cmdline::handle(args, &config, &versions),
        Commands::Run(args) => commands::run::handle(args, &config, &versions, cli.output),
    }
}
