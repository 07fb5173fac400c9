//! Command-line interface for langtable.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`report`] - The report command wiring real HTTP collaborators

pub mod args;
pub mod report;

pub use args::Cli;
pub use report::ReportCommand;
