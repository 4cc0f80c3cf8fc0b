//! Turning parsed assemblies into materialized DNA slices.
//!
//! The [`Materializer`] walks an assembly's part list, resolves the
//! sequence source for each part, dispatches to a per-kind materializer,
//! and emits a flat ordered list of [`crate::dna::DnaSlice`]s ready for
//! primer design and output emission.

mod error;
mod expand;
mod parts;
mod source;

use std::sync::Arc;

pub use crate::materialize::error::Error;

use crate::constants::DEFAULT_REF_GENOME;
use crate::data::interface::{CandidateSource, PartResolver};
use crate::data::library::SequenceLibrary;
use crate::data::proxy::HttpCandidateSource;
use crate::data::registry::GenomeRegistry;
use crate::data::Error as DataError;
use crate::dna::DnaSlice;
use crate::validator::{AcceptAllLinkers, LinkerCheck};

/// Configuration for materialization.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reference genome assumed when no pragma names one.
    pub default_genome: String,
    /// Base URL of the external-part candidate proxy, if any.
    pub proxy_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_genome: DEFAULT_REF_GENOME.to_string(),
            proxy_url: None,
        }
    }
}

/// A part resolver for pipelines without an external part registry.
struct NoExternalParts;

impl PartResolver for NoExternalParts {
    fn fetch_sequence(
        &self,
        _library: &SequenceLibrary,
        _ppp: &crate::assembly::Ppp,
        part_id: &str,
    ) -> Result<DnaSlice, DataError> {
        Err(DataError::ExternalPart {
            id: part_id.to_string(),
            reason: "no external part resolver configured".to_string(),
        })
    }
}

/// Materializes assemblies against a set of sequence sources.
pub struct Materializer {
    config: Config,
    genomes: Arc<GenomeRegistry>,
    library: Arc<SequenceLibrary>,
    resolver: Arc<dyn PartResolver>,
    candidates: Arc<dyn CandidateSource>,
    linker_check: Arc<dyn LinkerCheck>,
}

impl Materializer {
    pub fn new(config: &Config, genomes: Arc<GenomeRegistry>, library: Arc<SequenceLibrary>) -> Self {
        Materializer {
            config: config.clone(),
            genomes,
            library,
            resolver: Arc::new(NoExternalParts),
            candidates: Arc::new(HttpCandidateSource::new()),
            linker_check: Arc::new(AcceptAllLinkers),
        }
    }

    /// Use `resolver` for external part ids.
    pub fn with_part_resolver(mut self, resolver: Arc<dyn PartResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Use `candidates` instead of the HTTP proxy client.
    pub fn with_candidate_source(mut self, candidates: Arc<dyn CandidateSource>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Use `check` for linker well-formedness.
    pub fn with_linker_check(mut self, check: Arc<dyn LinkerCheck>) -> Self {
        self.linker_check = check;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
