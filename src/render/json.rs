//! JSON output formatter.
//!
//! Writes the enriched catalog as a tab-indented JSON array followed by a
//! newline. Empty fields are left out of each object.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

use super::ReportFormatter;
use crate::driver::DriverEntry;

/// Formats the catalog as JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, drivers: &[DriverEntry], writer: &mut W) -> std::io::Result<()> {
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut *writer, PrettyFormatter::with_indent(b"\t"));
        drivers
            .serialize(&mut serializer)
            .map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}
