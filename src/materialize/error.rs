//! Error type definition.

use thiserror::Error;

use crate::assembly::SourceLoc;

/// Error type for assembly materialization.
#[derive(Error, Debug)]
pub enum Error {
    #[error("slice modifier error")]
    Slice(#[from] crate::slice::Error),
    #[error("sequence source error")]
    Data(#[from] crate::data::Error),
    #[error("part validation error")]
    Validation(#[from] crate::validator::Error),
    #[error("part name {0} does not start with a recognized prefix character")]
    UnknownPrefix(String),
    #[error("gene {gene} is neither a feature of genome {genome} nor a library entry")]
    UnknownGene { gene: String, genome: String },
    #[error("slice [{from}:{to}] is outside library gene {gene} (length {len})")]
    LibrarySliceOutOfRange {
        gene: String,
        from: i32,
        to: i32,
        len: usize,
    },
    #[error("negatively lengthed DNA for {gene}: {left}..{right} contradicts the feature strand")]
    NegativeLength { gene: String, left: i32, right: i32 },
    #[error("inline protein part reached DNA materialization unexpanded")]
    UnexpandedProtein,
    #[error("heterology block reached DNA materialization unresolved")]
    UnexpandedHeterology,
    #[error("sequence library is missing the {0} marker gene")]
    MissingMarker(String),
    #[error("{message} at {loc}")]
    ParseFailure { message: String, loc: SourceLoc },
}
