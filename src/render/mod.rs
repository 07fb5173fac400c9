//! Report formatters.
//!
//! This module renders an enriched driver catalog as a Markdown document
//! or as JSON. Rendering never touches the network, so rendering the same
//! catalog twice produces identical bytes.

pub mod json;
pub mod markdown;

use std::io::Write;

use crate::driver::DriverEntry;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown tables for the documentation site.
    #[default]
    Markdown,
    /// The enriched catalog as a JSON array.
    Json,
}

impl OutputFormat {
    /// Map a command-line flag value to a format.
    ///
    /// Only `json` selects JSON; `md` and anything unrecognised fall back
    /// to Markdown.
    pub fn from_flag(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Markdown,
        }
    }
}

/// Trait for formatting a driver catalog.
pub trait ReportFormatter {
    /// Format the drivers to the given writer.
    fn format<W: Write>(&self, drivers: &[DriverEntry], writer: &mut W) -> std::io::Result<()>;
}

/// Render `drivers` in `format`.
pub fn render<W: Write>(
    drivers: &[DriverEntry],
    format: OutputFormat,
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Json => JsonFormatter::new().format(drivers, writer),
        OutputFormat::Markdown => MarkdownFormatter::new().format(drivers, writer),
    }
}
