//! Development status and feature flags declared by driver manifests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Development status of a driver.
///
/// Variants are declared in rank order, so the derived `Ord` compares
/// maturity: `Inactive < Planning < ... < Mature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Inactive,
    Planning,
    PreAlpha,
    Alpha,
    Beta,
    Stable,
    Mature,
}

impl Status {
    /// Lowest status a driver needs to be listed as supported.
    pub const MIN_SUPPORTED: Status = Status::Alpha;

    /// Label used in manifests and rendered reports.
    pub fn label(self) -> &'static str {
        match self {
            Status::Inactive => "inactive",
            Status::Planning => "planning",
            Status::PreAlpha => "pre-alpha",
            Status::Alpha => "alpha",
            Status::Beta => "beta",
            Status::Stable => "stable",
            Status::Mature => "mature",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A capability a driver can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    /// Returns the native AST.
    Ast,
    /// Returns the UAST.
    Uast,
    /// Returns the UAST annotated with roles.
    Roles,
}
