//! Error types for mcsnex-io.

use thiserror::Error;

/// Result type for reader operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reader error types.
///
/// Every error is terminal for the call that raised it; the caller
/// decides whether to skip a component or abort.
#[derive(Error, Debug)]
pub enum Error {
    /// Mandatory file structure is missing.
    #[error("{0}")]
    Schema(String),

    /// Logical component name not present in the file.
    #[error("no component with name '{0}' found in file")]
    UnknownComponent(String),

    /// Two on-disk names strip to the same logical name.
    #[error("component name '{0}' is ambiguous after stripping its numeric prefix")]
    DuplicateComponent(String),

    /// A requested optional sub-structure is absent for a component.
    #[error("component '{component}': {detail}")]
    UnsupportedData {
        /// Logical component name.
        component: String,
        /// What was missing.
        detail: String,
    },

    /// The info entry cannot be uniquely identified.
    #[error(
        "expected exactly one entry besides BINS in output of component \
         '{component}', found {found}"
    )]
    AmbiguousSchema {
        /// Logical component name.
        component: String,
        /// Number of non-BINS entries found.
        found: usize,
    },

    /// Free-text content did not satisfy a reconstruction precondition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Version handling error.
    #[error(transparent)]
    Core(#[from] mcsnex_core::Error),

    /// Underlying HDF5 error.
    #[error("hdf5 error: {0}")]
    Hdf5(#[from] hdf5::Error),
}
