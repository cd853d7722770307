//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::model::{LabStatus, Region, Role};

/// Lab listing arguments.
#[derive(Debug, Args)]
pub struct LabsCommand {
    /// Only labs in this region (e.g. "Tamil Nadu")
    #[arg(short, long)]
    pub region: Option<Region>,

    /// Only labs with this status (e.g. "in progress")
    #[arg(short, long)]
    pub status: Option<LabStatus>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Login arguments.
#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Mobile number, email or admin id
    pub identifier: String,

    /// Password or admin secret
    pub secret: String,

    /// Which login tab to use; omit for the role-less login
    #[arg(short, long, value_enum)]
    pub role: Option<RoleArg>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Walkthrough arguments.
#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Role to walk through
    #[arg(short, long, value_enum, default_value = "volunteer")]
    pub role: RoleArg,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Role argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Field volunteer
    Volunteer,
    /// Administrator
    Admin,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Volunteer => Self::Volunteer,
            RoleArg::Admin => Self::Admin,
        }
    }
}
