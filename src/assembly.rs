//! Input data model: assemblies, positioned parts, and pragmas.
//!
//! An assembly is a directional list of parts, each wrapped with its
//! direction flag and pragma collection.  Construction of these values is
//! the parser's concern; this crate consumes them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dna::DnaSlice;
use crate::slice::SliceModifier;
use crate::Sequence;

/// Key to values multimap of part or assembly pragmas.
///
/// Insertion order is preserved; `get_one` returns the first value bound
/// to a key.  Unknown pragmas pass through the pipeline unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pragmas(IndexMap<String, Vec<String>>);

impl Pragmas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind one more value to `key`.
    pub fn add(&mut self, key: &str, value: &str) {
        self.0
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// The first value bound to `key`, if any.
    pub fn get_one(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A collection holding a single binding.
    pub fn single(key: &str, value: &str) -> Self {
        let mut pragmas = Self::new();
        pragmas.add(key, value);
        pragmas
    }
}

/// Location in the source text, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLoc {
    pub line: usize,
    pub col: usize,
}

impl std::fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

/// A cloning linker attached to a gene part.  Well-formedness is checked
/// externally; the value is opaque here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linker {
    pub value: String,
}

/// One part of an assembly, before materialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// A prefixed gene reference such as `pADH1`, with slice modifiers.
    Gene {
        /// The prefixed name as written, e.g. `gADH1`.
        gene: String,
        mods: Vec<SliceModifier>,
        linker: Option<Linker>,
    },
    /// A selection-marker placeholder (`###`).
    Marker,
    /// Literal DNA given inline.
    InlineDna { dna: Sequence },
    /// Literal protein given inline; must be expanded away before the DNA
    /// stage.
    InlineProtein { aa: String },
    /// Reference to an externally registered part.
    ExternalId { id: String },
    /// A nested group of parts.
    Multi { children: Vec<Ppp> },
    /// Heterology block; must be resolved before the DNA stage.
    HeterologyBlock,
    /// Explicit fusion of the neighbouring parts (`::`).
    FusionMarker,
    /// A parse failure carried through for reporting.
    ParseError { message: String, loc: SourceLoc },
    /// A part materialized by an earlier pass.
    Expanded(Box<DnaSlice>),
}

/// A positioned part: the part itself plus direction and pragmas.
#[derive(Debug, Clone, PartialEq)]
pub struct Ppp {
    pub part: Part,
    /// Orientation of the part within the assembly.
    pub fwd: bool,
    pub pragmas: Pragmas,
}

impl Ppp {
    pub fn forward(part: Part) -> Self {
        Ppp {
            part,
            fwd: true,
            pragmas: Pragmas::new(),
        }
    }

    pub fn reversed(part: Part) -> Self {
        Ppp {
            part,
            fwd: false,
            pragmas: Pragmas::new(),
        }
    }
}

/// An ordered, directional list of parts describing one construct.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assembly {
    pub name: String,
    pub parts: Vec<Ppp>,
    pub pragmas: Pragmas,
}
