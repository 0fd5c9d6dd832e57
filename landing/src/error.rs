//! Build-time errors.
//!
//! Rendering never fails; everything here happens before or after it
//! (reading `site.toml`, resolving static assets, writing the output tree).

use std::path::PathBuf;

/// Errors surfaced by config loading, asset resolution and the site build.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The config file could not be read.
    #[error("failed to read site config {}: {source}", .path.display())]
    ConfigRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or misses a required field.
    #[error("invalid site config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid site config field `{field}`: {reason}")]
    ConfigInvalid {
        /// Offending field name
        field: &'static str,
        /// Human readable reason
        reason: String,
    },

    /// A graphic referenced by a content table is not present in the static dir.
    #[error("static asset `{asset}` not found under {}", .static_dir.display())]
    MissingAsset {
        /// Asset path as referenced by the content table
        asset: &'static str,
        /// Static directory that was searched
        static_dir: PathBuf,
    },

    /// Writing the output tree failed.
    #[error("failed to write {}: {source}", .path.display())]
    Output {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Shorthand result for this crate.
pub type Result<T> = std::result::Result<T, SiteError>;
