//! Relative feature coordinates and their projection onto the genome.
//!
//! Positions at the language surface are signed, 1-based, and have no zero:
//! counting runs ..., -2, -1, +1, +2, ... relative to either the 5' or the
//! 3' end of a feature.

// Implementation note re: the "no-zero correction": the surface scheme has
// no offset 0, and which neighbour of the anchor base an offset denotes
// depends on the end it is anchored to.  At the 5' end, +1 is the first
// base of the feature; at the 3' end, -1 is the last base of the feature.
// Internal arithmetic uses plain 0-based offsets, so the conversion must
// collapse the missing zero toward the anchor:
//
//              -3   -2   -1    +1   +2   +3        (5' anchored)
//               |    |    | !   |    |    |
//     0-based  -3   -2   -1    0    1    2
//
//              -3   -2   -1 !  +1   +2   +3        (3' anchored)
//               |    |    |     |    |    |
//     0-based  -2   -1    0    1    2    3

use crate::data::interface::Feature;

/// The feature end a relative offset is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Offsets count from the 5' end of the feature.
    FivePrime,
    /// Offsets count from the 3' end of the feature.
    ThreePrime,
}

/// A position relative to one end of a feature, in the signed 1-based
/// scheme of the surface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelPos {
    /// Signed offset; never zero.
    pub offset: i32,
    /// Which feature end the offset counts from.
    pub relative_to: Endpoint,
}

impl RelPos {
    /// Position anchored to the 5' end.
    pub fn five_prime(offset: i32) -> Self {
        RelPos {
            offset,
            relative_to: Endpoint::FivePrime,
        }
    }

    /// Position anchored to the 3' end.
    pub fn three_prime(offset: i32) -> Self {
        RelPos {
            offset,
            relative_to: Endpoint::ThreePrime,
        }
    }

    /// Convert the 1-based no-zero offset to a 0-based offset from the
    /// anchor base.
    pub fn to_zero_based(self) -> i32 {
        match self.relative_to {
            Endpoint::FivePrime => {
                if self.offset > 0 {
                    self.offset - 1
                } else {
                    self.offset
                }
            }
            Endpoint::ThreePrime => {
                if self.offset < 0 {
                    self.offset + 1
                } else {
                    self.offset
                }
            }
        }
    }

    /// Inverse of [`RelPos::to_zero_based`].
    pub fn from_zero_based(offset: i32, relative_to: Endpoint) -> Self {
        let offset = match relative_to {
            Endpoint::FivePrime => {
                if offset >= 0 {
                    offset + 1
                } else {
                    offset
                }
            }
            Endpoint::ThreePrime => {
                if offset <= 0 {
                    offset - 1
                } else {
                    offset
                }
            }
        };
        RelPos {
            offset,
            relative_to,
        }
    }
}

impl std::fmt::Display for RelPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.relative_to {
            Endpoint::FivePrime => write!(f, "{:+}", self.offset),
            Endpoint::ThreePrime => write!(f, "{:+}E", self.offset),
        }
    }
}

/// Project a relative position into an absolute genomic coordinate.
///
/// The anchor is the genomic coordinate of the referenced feature end;
/// moving downstream of a crick-strand feature decreases the genomic
/// coordinate.
pub fn adjust_to_physical(feature: &Feature, pos: RelPos) -> i32 {
    let anchor = match (pos.relative_to, feature.fwd) {
        (Endpoint::FivePrime, true) => feature.left,
        (Endpoint::FivePrime, false) => feature.right,
        (Endpoint::ThreePrime, true) => feature.right,
        (Endpoint::ThreePrime, false) => feature.left,
    };
    let direction = if feature.fwd { 1 } else { -1 };
    anchor + direction * pos.to_zero_based()
}

/// Inverse of [`adjust_to_physical`]: express an absolute genomic
/// coordinate relative to the given end of the feature.
pub fn physical_to_relative(feature: &Feature, genomic: i32, relative_to: Endpoint) -> RelPos {
    let anchor = match (relative_to, feature.fwd) {
        (Endpoint::FivePrime, true) => feature.left,
        (Endpoint::FivePrime, false) => feature.right,
        (Endpoint::ThreePrime, true) => feature.right,
        (Endpoint::ThreePrime, false) => feature.left,
    };
    let direction = if feature.fwd { 1 } else { -1 };
    RelPos::from_zero_based(direction * (genomic - anchor), relative_to)
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
