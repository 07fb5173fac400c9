//! Markdown output formatter.
//!
//! Produces the "Supported languages" page of the documentation site.
//! The layout is consumed verbatim by the docs build, so every constant
//! below is part of the output contract.

use std::io::Write;

use super::ReportFormatter;
use crate::driver::{DriverEntry, Feature};

const PREAMBLE: &str = "<!-- Code generated by 'make languages' DO NOT EDIT. -->\n";

const SUPPORTED_HEADING: &str = "\n# Supported languages\n";

const IN_DEVELOPMENT_HEADING: &str = "\n# In development\n";

const TABLE_HEADER: &str = concat!(
    "\n",
    r"| Language   | Key        | Status  | AST\* | UAST\*\* | Annotations\*\*\* | Container | Maintainer |",
    "\n",
    "| ---------- | ---------- | ------- | ---- | ------ | -------------- | --------- | ---------- |",
    "\n",
);

const FOOTER: &str = concat!(
    "\n",
    r"- \* The driver is able to return the native AST",
    "\n",
    r"- \*\* The driver is able to return the UAST",
    "\n",
    r"- \*\*\* The driver is able to return the UAST annotated",
    "\n\n\n",
    "**Don't see your favorite language? [Help us!](community.md)**",
    "\n",
);

/// Placeholder shown when a driver lists no maintainer.
const NO_MAINTAINER: &str = "-";

/// Formats the catalog as Markdown tables.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new Markdown formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render one table row for `driver`.
    pub fn row(driver: &DriverEntry) -> String {
        format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
            link(driver.display_name(), &driver.repository_url),
            driver.language,
            driver.status,
            bool_icon(driver.supports(Feature::Ast)),
            bool_icon(driver.supports(Feature::Uast)),
            bool_icon(driver.supports(Feature::Roles)),
            link_mark(&driver.image_url),
            maintainer_cell(driver),
        )
    }

    fn write_table<W: Write>(drivers: &[DriverEntry], writer: &mut W) -> std::io::Result<()> {
        writer.write_all(TABLE_HEADER.as_bytes())?;
        for driver in drivers {
            writer.write_all(Self::row(driver).as_bytes())?;
        }
        Ok(())
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format<W: Write>(&self, drivers: &[DriverEntry], writer: &mut W) -> std::io::Result<()> {
        let split = drivers
            .iter()
            .position(|d| !d.is_supported())
            .unwrap_or(drivers.len());
        let (supported, in_development) = drivers.split_at(split);

        writer.write_all(PREAMBLE.as_bytes())?;

        writer.write_all(SUPPORTED_HEADING.as_bytes())?;
        Self::write_table(supported, writer)?;

        if !in_development.is_empty() {
            writer.write_all(IN_DEVELOPMENT_HEADING.as_bytes())?;
            Self::write_table(in_development, writer)?;
        }

        writer.write_all(FOOTER.as_bytes())
    }
}

fn bool_icon(value: bool) -> &'static str {
    if value {
        "✓"
    } else {
        "✗"
    }
}

fn link(text: &str, url: &str) -> String {
    if url.is_empty() {
        text.to_string()
    } else {
        format!("[{}]({})", text, url)
    }
}

fn link_mark(url: &str) -> String {
    if url.is_empty() {
        bool_icon(false).to_string()
    } else {
        link(bool_icon(true), url)
    }
}

/// GitHub profile when a handle is known, otherwise a mail link, otherwise
/// the bare name.
fn maintainer_cell(driver: &DriverEntry) -> String {
    let Some(maintainer) = driver.maintainer() else {
        return NO_MAINTAINER.to_string();
    };

    let (text, url) = match (&maintainer.github, &maintainer.email) {
        (Some(handle), _) if !handle.is_empty() => {
            (handle.as_str(), format!("https://github.com/{}", handle))
        }
        (_, Some(email)) if !email.is_empty() => {
            (maintainer.name.as_str(), format!("mailto:{}", email))
        }
        _ => (maintainer.name.as_str(), String::new()),
    };

    if text.is_empty() {
        link(NO_MAINTAINER, &url)
    } else {
        link(text, &url)
    }
}
