//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    DashboardCommand, InitCommand, ItemCommand, ListCommand, SetStatusCommand, SubmitCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing hospitality reservations.
#[derive(Parser)]
#[command(name = "willa")]
#[command(version, about = "Manage hospitality reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Acting user identifier
    #[arg(long, value_name = "USER", global = true, env = "WILLA_USER")]
    pub user: Option<String>,

    /// Act with staff privileges
    #[arg(long, global = true, env = "WILLA_ADMIN")]
    pub admin: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "WILLA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "WILLA_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "WILLA_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the willa data directory and database
    Init(InitCommand),

    /// Manage the bookable item catalog
    Item(ItemCommand),

    /// Submit a booking request
    Submit(SubmitCommand),

    /// List bookings
    List(ListCommand),

    /// Show the occupancy dashboard
    Dashboard(DashboardCommand),

    /// Change the status of a booking
    SetStatus(SetStatusCommand),
}
