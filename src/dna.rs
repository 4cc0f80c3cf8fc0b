//! Output data model: materialized DNA slices.

use serde::{Deserialize, Serialize};

use crate::assembly::Pragmas;
use crate::breed::Breed;
use crate::data::interface::PartCandidate;
use crate::Sequence;

/// Coarse slice category for downstream passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceType {
    Regular,
    Marker,
    Linker,
    Inline,
    Fusion,
}

/// One materialized stretch of the output construct.
///
/// `source_from <= source_to` holds in 0-based source coordinates
/// regardless of orientation; a reversed slice signals its orientation
/// through `dest_fwd` and the `!`-prefixed description.  The
/// approximation flags are kept in emitted orientation: `source_from_approx`
/// always describes the 5' end of `dna`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaSlice {
    /// Realized sequence; empty only for fusion junctions.
    pub dna: Sequence,
    pub source_chr: String,
    pub source_from: i32,
    pub source_to: i32,
    /// Strand of the source feature, not of the emitted slice.
    pub source_fwd: bool,
    pub source_from_approx: bool,
    pub source_to_approx: bool,
    /// Destination offsets; zero until assigned by offset recomputation.
    pub dest_from: i32,
    pub dest_to: i32,
    /// Orientation within the output assembly.
    pub dest_fwd: bool,
    /// The sequence to amplify from; absent for fusion junctions.
    pub template: Option<Sequence>,
    /// Whether the slice must be produced by PCR.
    pub amplified: bool,
    pub slice_type: SliceType,
    pub breed: Breed,
    pub description: String,
    pub pragmas: Pragmas,
    /// Effective sequence source name for this slice.
    pub dna_source: String,
    /// Previously registered parts that could substitute for this slice.
    pub external_candidates: Vec<PartCandidate>,
}

impl DnaSlice {
    pub fn len(&self) -> usize {
        self.dna.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dna.is_empty()
    }
}

/// Assign destination offsets so that each slice begins where its
/// predecessor ended.  A zero-length slice gets `dest_to = dest_from - 1`
/// and does not advance the cursor.
pub fn recompute_offsets(slices: &mut [DnaSlice]) {
    let mut cursor = 0i32;
    for slice in slices.iter_mut() {
        let len = slice.dna.len() as i32;
        slice.dest_from = cursor;
        slice.dest_to = cursor + len - 1;
        cursor += len;
    }
}
