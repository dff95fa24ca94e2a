//! Error types for mcsnex-core.

use crate::Version;
use thiserror::Error;

/// Result type alias for version operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Version below every registered minimum.
    #[error("McStas version {0} is not supported by this tool")]
    UnsupportedVersion(Version),

    /// No version could be extracted from the program text.
    #[error("could not find a McStas version in '{0}'; pass the version explicitly")]
    VersionNotFound(String),

    /// Registry built with two entries at the same minimum version.
    #[error("duplicate registry entry for version {0}")]
    DuplicateVersion(Version),
}
