//! langtable - Babelfish language driver report generator.
//!
//! langtable lists the official language drivers, checks which of them
//! publish a container image, and renders the result as the Markdown
//! "Supported languages" page or as JSON.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Endpoints and knobs for a report run
//! - [`discovery`] - Driver catalog discovery
//! - [`driver`] - Catalog entry types
//! - [`enrich`] - Concurrent container image probing
//! - [`error`] - Error types and result aliases
//! - [`http`] - Shared HTTP client
//! - [`registry`] - Container registry probing
//! - [`render`] - Markdown and JSON formatters
//! - [`report`] - The end-to-end pipeline
//!
//! # Example
//!
//! ```
//! use langtable::driver::{DriverEntry, Status};
//! use langtable::render::{render, OutputFormat};
//!
//! let drivers = vec![DriverEntry::new("go", Status::Beta)];
//! let mut out = Vec::new();
//! render(&drivers, OutputFormat::Markdown, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("| go | go | beta |"));
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod driver;
pub mod enrich;
pub mod error;
pub mod http;
pub mod registry;
pub mod render;
pub mod report;

pub use error::{LangtableError, Result};
