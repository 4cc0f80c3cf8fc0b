//! Classification of parts into breeds.
//!
//! The breed is the finer-grained sibling of the slice type: downstream
//! passes use it for candidate lookup and labelling.  A part's initial
//! breed follows from its resolved kind; genomic gene parts of
//! indeterminate breed are refined afterwards from their final slice
//! geometry.

use serde::{Deserialize, Serialize};

use crate::coords::RelPos;
use crate::slice::{GenePartKind, Slice};

/// Biological role of a materialized part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breed {
    Promoter,
    Terminator,
    Upstream,
    Downstream,
    FusableOrf,
    /// Gene alone, no stop codon context.
    Gs,
    /// Gene with stop/terminator context.
    Gst,
    /// Selection marker.
    Marker,
    /// Cloning linker.
    Linker,
    /// Inline literal sequence.
    Inline,
    /// Synthetic zero-length slice such as a fusion junction.
    Virtual,
    /// Indeterminate.
    X,
}

impl Breed {
    /// Short insert code used when querying the external candidate proxy.
    pub fn insert_code(&self) -> Option<&'static str> {
        match self {
            Breed::Upstream => Some("US"),
            Breed::Downstream => Some("DS"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Breed::Promoter => "B_PROMOTER",
            Breed::Terminator => "B_TERMINATOR",
            Breed::Upstream => "B_UPSTREAM",
            Breed::Downstream => "B_DOWNSTREAM",
            Breed::FusableOrf => "B_FUSABLEORF",
            Breed::Gs => "B_GS",
            Breed::Gst => "B_GST",
            Breed::Marker => "B_MARKER",
            Breed::Linker => "B_LINKER",
            Breed::Inline => "B_INLINE",
            Breed::Virtual => "B_VIRTUAL",
            Breed::X => "B_X",
        };
        f.write_str(label)
    }
}

/// The part kind denoted by a gene-name prefix character.
pub fn kind_for_prefix(prefix: char) -> Option<GenePartKind> {
    match prefix {
        'p' => Some(GenePartKind::Promoter),
        't' => Some(GenePartKind::Terminator),
        'u' => Some(GenePartKind::Upstream),
        'd' => Some(GenePartKind::Downstream),
        'o' => Some(GenePartKind::Orf),
        'f' => Some(GenePartKind::FusableOrf),
        'g' => Some(GenePartKind::Gene),
        'm' => Some(GenePartKind::Mrna),
        _ => None,
    }
}

/// The breed a part kind starts out with, before geometric refinement.
pub fn initial_breed(kind: GenePartKind) -> Breed {
    match kind {
        GenePartKind::Promoter => Breed::Promoter,
        GenePartKind::Terminator => Breed::Terminator,
        GenePartKind::Upstream => Breed::Upstream,
        GenePartKind::Downstream => Breed::Downstream,
        GenePartKind::FusableOrf => Breed::FusableOrf,
        GenePartKind::Orf => Breed::Gs,
        GenePartKind::Gene => Breed::X,
        GenePartKind::Mrna => Breed::Gst,
    }
}

/// Whether two relative positions share an endpoint and lie within
/// `tolerance` of each other.
fn near(a: RelPos, b: RelPos, tolerance: i32) -> bool {
    a.relative_to == b.relative_to && (a.offset - b.offset).abs() < tolerance
}

/// Refine an indeterminate genomic gene part by the geometry of its final
/// slice.  Other initial breeds pass through unchanged.
pub fn refine_breed(initial: Breed, slice: &Slice) -> Breed {
    if initial != Breed::X {
        return initial;
    }

    if near(slice.left, RelPos::three_prime(1), 1)
        && near(slice.right, RelPos::three_prime(150), 100)
    {
        Breed::Terminator
    } else if near(slice.left, RelPos::five_prime(-300), 400)
        && near(slice.right, RelPos::five_prime(-1), 40)
    {
        Breed::Promoter
    } else if slice.left == RelPos::five_prime(1)
        && near(slice.right, RelPos::three_prime(150), 100)
    {
        Breed::Gst
    } else {
        Breed::X
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{initial_breed, kind_for_prefix, refine_breed, Breed};
    use crate::coords::RelPos;
    use crate::slice::{canonical_slice, GenePartKind, Slice};

    #[rstest]
    #[case('p', GenePartKind::Promoter, Breed::Promoter)]
    #[case('t', GenePartKind::Terminator, Breed::Terminator)]
    #[case('u', GenePartKind::Upstream, Breed::Upstream)]
    #[case('d', GenePartKind::Downstream, Breed::Downstream)]
    #[case('o', GenePartKind::Orf, Breed::Gs)]
    #[case('f', GenePartKind::FusableOrf, Breed::FusableOrf)]
    #[case('g', GenePartKind::Gene, Breed::X)]
    #[case('m', GenePartKind::Mrna, Breed::Gst)]
    fn prefix_table(#[case] prefix: char, #[case] kind: GenePartKind, #[case] breed: Breed) {
        assert_eq!(kind_for_prefix(prefix), Some(kind));
        assert_eq!(initial_breed(kind), breed);
    }

    #[test]
    fn unknown_prefix() {
        assert_eq!(kind_for_prefix('q'), None);
        assert_eq!(kind_for_prefix('G'), None);
    }

    #[test]
    fn refinement_terminator_like() {
        let slice = Slice {
            left: RelPos::three_prime(1),
            right: RelPos::three_prime(120),
            l_approx: false,
            r_approx: false,
        };
        assert_eq!(refine_breed(Breed::X, &slice), Breed::Terminator);
    }

    #[test]
    fn refinement_promoter_like() {
        let slice = Slice {
            left: RelPos::five_prime(-450),
            right: RelPos::five_prime(-1),
            l_approx: true,
            r_approx: false,
        };
        assert_eq!(refine_breed(Breed::X, &slice), Breed::Promoter);
    }

    #[test]
    fn refinement_gene_with_stop() {
        let slice = Slice {
            left: RelPos::five_prime(1),
            right: RelPos::three_prime(180),
            l_approx: false,
            r_approx: false,
        };
        assert_eq!(refine_breed(Breed::X, &slice), Breed::Gst);
    }

    #[test]
    fn refinement_default_is_indeterminate() {
        // The canonical whole-gene slice matches none of the refinements.
        let slice = canonical_slice(GenePartKind::Gene, 500);
        assert_eq!(refine_breed(Breed::X, &slice), Breed::X);
    }

    #[test]
    fn refinement_leaves_other_breeds_alone() {
        let slice = canonical_slice(GenePartKind::Promoter, 500);
        assert_eq!(refine_breed(Breed::Promoter, &slice), Breed::Promoter);
        assert_eq!(refine_breed(Breed::Terminator, &slice), Breed::Terminator);
    }

    #[test]
    fn insert_codes() {
        assert_eq!(Breed::Upstream.insert_code(), Some("US"));
        assert_eq!(Breed::Downstream.insert_code(), Some("DS"));
        assert_eq!(Breed::Promoter.insert_code(), None);
        assert_eq!(Breed::X.insert_code(), None);
    }
}
