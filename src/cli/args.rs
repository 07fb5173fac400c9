//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

use crate::render::OutputFormat;

/// Generate the supported-languages report for Babelfish drivers.
#[derive(Debug, Parser)]
#[command(name = "langtable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (md or json)
    #[arg(short = 'o', value_name = "FORMAT", default_value = "md")]
    pub output: String,
}

impl Cli {
    /// The selected output format; unknown values fall back to Markdown.
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_flag(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_markdown() {
        let cli = Cli::parse_from(["langtable"]);
        assert_eq!(cli.output, "md");
        assert_eq!(cli.format(), OutputFormat::Markdown);
    }

    #[test]
    fn json_flag_selects_json() {
        let cli = Cli::parse_from(["langtable", "-o", "json"]);
        assert_eq!(cli.format(), OutputFormat::Json);
    }

    #[test]
    fn unknown_format_falls_back_to_markdown() {
        let cli = Cli::parse_from(["langtable", "-o", "html"]);
        assert_eq!(cli.output, "html");
        assert_eq!(cli.format(), OutputFormat::Markdown);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["langtable", "--verbose"]).is_err());
    }
}
