//! Static checks on gene-part modifiers and linkers.

mod error;

pub use crate::validator::error::Error;
use crate::{assembly::Linker, slice::SliceModifier};

/// Check the slice modifiers of a gene part.
///
/// Every explicit slice must keep its left bound at or before its right
/// bound when both are anchored to the same feature end (cross-endpoint
/// slices are only checkable after physical projection).  With
/// `allow_approx` unset, approximate bounds are rejected; library genes
/// have no surrounding context to widen into.
pub fn check_modifiers(gene: &str, mods: &[SliceModifier], allow_approx: bool) -> Result<(), Error> {
    for m in mods {
        let sl = match m {
            SliceModifier::Slice(sl) => sl,
            SliceModifier::Dot(_) => continue,
        };
        if sl.left.relative_to == sl.right.relative_to && sl.left.offset > sl.right.offset {
            return Err(Error::InvalidSliceBounds {
                gene: gene.to_string(),
                slice: sl.to_string(),
            });
        }
        if !allow_approx && (sl.l_approx || sl.r_approx) {
            return Err(Error::ApproximateLibrarySlice {
                gene: gene.to_string(),
                slice: sl.to_string(),
            });
        }
    }
    Ok(())
}

/// External well-formedness check for linkers attached to gene parts.
pub trait LinkerCheck {
    fn check(&self, linker: &Linker) -> Result<(), Error>;
}

/// A linker check that accepts everything; the real check lives with the
/// cloning-strategy layer.
pub struct AcceptAllLinkers;

impl LinkerCheck for AcceptAllLinkers {
    fn check(&self, _linker: &Linker) -> Result<(), Error> {
        Ok(())
    }
}
