//! Error type definition.

use thiserror::Error;

/// Error type for sequence-source access.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reference genome {name} is not loaded (available: {available})")]
    UnknownGenome { name: String, available: String },
    #[error("genome {genome} has no feature named {gene}")]
    UnknownFeature { genome: String, gene: String },
    #[error("genome {genome} has no chromosome {chr}")]
    UnknownChromosome { genome: String, chr: String },
    #[error("coordinates {left}..{right} fall outside {chr} (length {len}) fetching for {tag}")]
    DnaOutOfRange {
        tag: String,
        chr: String,
        left: i32,
        right: i32,
        len: usize,
    },
    #[error("external part {id} could not be resolved: {reason}")]
    ExternalPart { id: String, reason: String },
}
