//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `item`: Manage the bookable item catalog
//! - `submit`: Submit a booking request
//! - `list`: List bookings
//! - `dashboard`: Show the occupancy dashboard
//! - `set_status`: Change the status of a booking

pub mod dashboard;
pub mod init;
pub mod item;
pub mod list;
pub mod set_status;
pub mod submit;

pub use dashboard::DashboardCommand;
pub use init::InitCommand;
pub use item::ItemCommand;
pub use list::ListCommand;
pub use set_status::SetStatusCommand;
pub use submit::SubmitCommand;
