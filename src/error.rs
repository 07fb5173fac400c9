//! Error types for langtable operations.
//!
//! This module defines [`LangtableError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Catalog failures are fatal and surface as `LangtableError`
//! - Registry probe failures never become errors; they read as "not published"
//! - Use `anyhow::Error` (via `LangtableError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for langtable operations.
#[derive(Debug, Error)]
pub enum LangtableError {
    /// The driver catalog could not be obtained.
    #[error("Failed to fetch driver catalog: {message}")]
    CatalogUnavailable { message: String },

    /// A driver repository published a manifest that could not be parsed.
    #[error("Invalid manifest in {repo}: {message}")]
    ManifestParse { repo: String, message: String },

    /// The probe worker pool could not be started.
    #[error("Failed to start probe workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for langtable operations.
pub type Result<T> = std::result::Result<T, LangtableError>;
