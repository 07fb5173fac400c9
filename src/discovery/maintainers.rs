//! MAINTAINERS file parsing.
//!
//! Each non-empty line names one maintainer:
//!
//! ```text
//! Denys Smirnov <denys@sourced.tech> (@dennwc)
//! ```
//!
//! Email and handle are both optional.

use regex::Regex;
use std::sync::LazyLock;

use crate::driver::Maintainer;

/// `Name <email> (@handle)` with both trailing parts optional.
static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^<(]*?)\s*(?:<([^>\s]+)>)?\s*(?:\(@([^)\s]+)\))?\s*$")
        .expect("LINE_REGEX must compile")
});

/// Parse a MAINTAINERS file, keeping file order.
///
/// Blank lines, `#` comments and lines that name nobody are skipped.
pub fn parse_maintainers(content: &str) -> Vec<Maintainer> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Maintainer> {
    let caps = LINE_REGEX.captures(line)?;

    let name = caps.get(1).map_or("", |m| m.as_str().trim());
    let email = caps.get(2).map(|m| m.as_str().to_string());
    let github = caps.get(3).map(|m| m.as_str().to_string());

    if name.is_empty() && email.is_none() && github.is_none() {
        return None;
    }

    Some(Maintainer {
        name: name.to_string(),
        github,
        email,
    })
}
