//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod goal;
pub mod import;
pub mod total;

pub use export::handle_export_command;
pub use goal::{handle_goal_command, GoalCommands};
pub use import::handle_import_command;
pub use total::{handle_total_command, TotalCommands};
