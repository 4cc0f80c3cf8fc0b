//! Error type definition.

use thiserror::Error;

/// Error type for static part checks.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("slice {slice} on {gene} has its left bound past its right bound")]
    InvalidSliceBounds { gene: String, slice: String },
    #[error("approximate slice bounds are not supported on library gene {gene} (slice {slice})")]
    ApproximateLibrarySlice { gene: String, slice: String },
    #[error("malformed linker {value}: {reason}")]
    MalformedLinker { value: String, reason: String },
}
