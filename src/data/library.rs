//! The in-process sequence library.

use ahash::AHashMap;

use crate::Sequence;

/// Mapping from uppercase gene name to sequence buffer.
///
/// Library sequences carry no surrounding genomic context, which is why
/// approximate slice ends are rejected on library genes.
#[derive(Debug, Clone, Default)]
pub struct SequenceLibrary {
    entries: AHashMap<String, Sequence>,
}

impl SequenceLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `seq` under `name`.  Names are case-insensitive.
    pub fn insert(&mut self, name: &str, seq: Sequence) {
        self.entries.insert(name.to_ascii_uppercase(), seq);
    }

    pub fn get(&self, name: &str) -> Option<&Sequence> {
        self.entries.get(&name.to_ascii_uppercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
