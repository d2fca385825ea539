//! Main entry point for the willa CLI.
//!
//! This is the command-line interface for the willa reservation system.
//! It provides commands for managing bookings:
//! - `init`: Initialize the data directory and database
//! - `item`: Manage the bookable item catalog
//! - `submit`: Submit a booking request
//! - `list`: List bookings
//! - `dashboard`: Show the occupancy dashboard
//! - `set-status`: Change the status of a booking

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = willa::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        user: cli.user,
        admin: cli.admin,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Item(cmd) => cmd.execute(&global),
        cli::Command::Submit(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Dashboard(cmd) => cmd.execute(&global),
        cli::Command::SetStatus(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
