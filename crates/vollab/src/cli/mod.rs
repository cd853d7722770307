//! Command-line interface for vollab.
//!
//! Every command runs against a fresh in-memory store; nothing carries over
//! between invocations.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, DemoCommand, LabsCommand, LoginCommand, RoleArg, StatusCommand};

use crate::logging::Verbosity;

/// vollab - Coordinate volunteer visits to regional diagnostic labs
///
/// Browse labs by region, sign in as a volunteer or administrator against
/// the mock service, and walk through the dashboard flows.
#[derive(Debug, Parser)]
#[command(name = "vollab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List labs, optionally filtered by region and status
    Labs(LabsCommand),

    /// Sign in against the mock service and show the identity
    Login(LoginCommand),

    /// Show store totals and service settings
    Status(StatusCommand),

    /// Walk through a dashboard session for one role
    Demo(DemoCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
