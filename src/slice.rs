//! The symbolic slice algebra for gene parts.
//!
//! A slice describes the stretch of a feature a part realizes, as two
//! relative positions with per-end approximation flags.  Gene-part kinds
//! start from a canonical slice which user modifiers then rewrite.

use crate::constants::{MRNA_TAIL, PROMOTER_LEN, TERMINATOR_LEN};
use crate::coords::RelPos;

pub use error::Error;

mod error {
    /// Error type for slice-modifier application.
    #[derive(thiserror::Error, Debug, Clone)]
    pub enum Error {
        #[error("at most one dot modifier is allowed per part, found {0}")]
        MultipleDotModifiers(usize),
        #[error("unknown dot modifier: .{0}")]
        UnknownDotModifier(String),
        #[error("dot modifier .{0} is only valid on a plain gene part")]
        DotModifierNotOnGene(String),
    }
}

/// The kind of stretch a gene part denotes, before slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenePartKind {
    Promoter,
    Upstream,
    Terminator,
    Downstream,
    FusableOrf,
    Orf,
    Gene,
    Mrna,
}

/// An interval over a feature: two relative positions plus one
/// approximation flag per end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub left: RelPos,
    pub right: RelPos,
    /// Whether the left end is approximate and may be widened.
    pub l_approx: bool,
    /// Whether the right end is approximate and may be widened.
    pub r_approx: bool,
}

impl Slice {
    /// Widen each approximate end outward by `margin` bases.
    ///
    /// Widening is raw offset arithmetic: the ends are approximate by
    /// declaration, so the no-zero discontinuity is not corrected for.
    pub fn widen_approx(&self, margin: i32) -> Slice {
        let mut widened = *self;
        if self.l_approx {
            widened.left.offset -= margin;
        }
        if self.r_approx {
            widened.right.offset += margin;
        }
        widened
    }
}

impl std::fmt::Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}{}:{}{}]",
            if self.l_approx { "~" } else { "" },
            self.left,
            if self.r_approx { "~" } else { "" },
            self.right
        )
    }
}

/// A user modifier applied to a gene part.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceModifier {
    /// A further slice; replaces the current slice.
    Slice(Slice),
    /// A textual attribute such as `.up`.
    Dot(String),
}

/// The canonical initial slice for a gene-part kind.
///
/// `flank` is the genome-configured width of upstream/downstream regions.
pub fn canonical_slice(kind: GenePartKind, flank: i32) -> Slice {
    match kind {
        GenePartKind::Promoter => Slice {
            left: RelPos::five_prime(-PROMOTER_LEN),
            right: RelPos::five_prime(-1),
            l_approx: true,
            r_approx: false,
        },
        GenePartKind::Upstream => Slice {
            left: RelPos::five_prime(-flank),
            right: RelPos::five_prime(-1),
            l_approx: true,
            r_approx: false,
        },
        GenePartKind::Terminator => Slice {
            left: RelPos::three_prime(1),
            right: RelPos::three_prime(TERMINATOR_LEN),
            l_approx: false,
            r_approx: true,
        },
        GenePartKind::Downstream => Slice {
            left: RelPos::three_prime(1),
            right: RelPos::three_prime(flank),
            l_approx: false,
            r_approx: true,
        },
        GenePartKind::FusableOrf => Slice {
            left: RelPos::five_prime(1),
            right: RelPos::three_prime(-4),
            l_approx: false,
            r_approx: false,
        },
        GenePartKind::Orf | GenePartKind::Gene => Slice {
            left: RelPos::five_prime(1),
            right: RelPos::three_prime(-1),
            l_approx: false,
            r_approx: false,
        },
        GenePartKind::Mrna => Slice {
            left: RelPos::five_prime(1),
            right: RelPos::three_prime(MRNA_TAIL),
            l_approx: false,
            r_approx: true,
        },
    }
}

/// Resolve the dot modifiers in `mods` against the part kind.
///
/// At most one dot modifier is accepted, and only on a plain gene part,
/// where it reinterprets the part as its upstream/downstream/mRNA
/// counterpart.
pub fn apply_dot_modifiers(kind: GenePartKind, mods: &[SliceModifier]) -> Result<GenePartKind, Error> {
    let dots: Vec<&str> = mods
        .iter()
        .filter_map(|m| match m {
            SliceModifier::Dot(name) => Some(name.as_str()),
            SliceModifier::Slice(_) => None,
        })
        .collect();

    match dots.as_slice() {
        [] => Ok(kind),
        [dot] => {
            if kind != GenePartKind::Gene {
                return Err(Error::DotModifierNotOnGene(dot.to_string()));
            }
            match *dot {
                "up" => Ok(GenePartKind::Upstream),
                "down" => Ok(GenePartKind::Downstream),
                "mrna" => Ok(GenePartKind::Mrna),
                other => Err(Error::UnknownDotModifier(other.to_string())),
            }
        }
        many => Err(Error::MultipleDotModifiers(many.len())),
    }
}

/// Fold the slice modifiers over the initial slice.  Each further slice
/// replaces the current one wholesale; dot modifiers are handled by
/// [`apply_dot_modifiers`] and skipped here.
pub fn apply_slices(initial: Slice, mods: &[SliceModifier]) -> Slice {
    mods.iter().fold(initial, |current, m| match m {
        SliceModifier::Slice(sl) => *sl,
        SliceModifier::Dot(_) => current,
    })
}


// <LICENSE>
// Copyright 2026 genoweave Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// </LICENSE>
