//! Definition of the interfaces for accessing sequence sources.

use serde::{Deserialize, Serialize};

use crate::assembly::Ppp;
use crate::data::library::SequenceLibrary;
use crate::data::Error;
use crate::dna::DnaSlice;
use crate::Sequence;

/// A reference-genome annotation record.
///
/// ```text
/// gene  | ADH1
/// chr   | chr1
/// left  | 1000
/// right | 1500
/// fwd   | true
/// ```
///
/// `left`/`right` are 0-based genomic coordinates with `left <= right`
/// regardless of strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub gene: String,
    pub chr: String,
    pub left: i32,
    pub right: i32,
    /// Whether the feature lies on the watson (forward) strand.
    pub fwd: bool,
}

/// Handle to one loaded reference genome.
pub trait Genome: std::fmt::Debug {
    /// The registry name of this genome.
    fn name(&self) -> &str;

    /// Width of default upstream/downstream flanking regions.
    fn flank(&self) -> i32;

    /// How far approximate slice ends are widened before fetching.
    fn approx_margin(&self) -> i32;

    /// Whether `gene` names a feature of this genome.
    fn is_valid(&self, gene: &str) -> bool;

    /// Look up the feature named `gene`.
    fn get(&self, gene: &str) -> Result<Feature, Error>;

    /// Fetch the genomic sequence `[left..right]` (0-based, inclusive)
    /// from chromosome `chr`.  `tag` attributes the fetch for reporting.
    fn dna(&self, tag: &str, chr: &str, left: i32, right: i32) -> Result<Sequence, Error>;
}

/// Resolver for externally registered part ids.
pub trait PartResolver {
    /// Produce a ready-made slice for `part_id`.
    fn fetch_sequence(
        &self,
        library: &SequenceLibrary,
        ppp: &Ppp,
        part_id: &str,
    ) -> Result<DnaSlice, Error>;
}

/// A previously registered part that could substitute for a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartCandidate {
    pub id: String,
    pub name: String,
}

/// Lookup of substitution candidates for upstream/downstream inserts.
///
/// Implementations are best-effort: lookup failure yields an empty list,
/// never an error.
pub trait CandidateSource {
    fn fetch_candidates(&self, url: &str, insert_name: &str, breed_code: &str)
        -> Vec<PartCandidate>;
}
