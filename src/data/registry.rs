//! The set of loaded reference genomes, plus an in-memory genome
//! implementation for embedders and tests.

use std::sync::Arc;

use ahash::AHashMap;

use crate::constants::{DEFAULT_APPROX_MARGIN, DEFAULT_FLANK};
use crate::data::interface::{Feature, Genome};
use crate::data::Error;
use crate::Sequence;

/// Lookup of reference genomes by name.
#[derive(Clone, Default)]
pub struct GenomeRegistry {
    genomes: AHashMap<String, Arc<dyn Genome>>,
}

impl GenomeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, genome: Arc<dyn Genome>) {
        self.genomes.insert(genome.name().to_string(), genome);
    }

    /// Look up `name`; the error enumerates the loaded genome names.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Genome>, Error> {
        self.genomes
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownGenome {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Sorted names of all loaded genomes.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.genomes.keys().cloned().collect();
        names.sort();
        names
    }
}

/// A reference genome held entirely in memory: chromosome buffers plus an
/// annotation table.  Loading from on-disk formats is an external concern.
#[derive(Debug, Clone)]
pub struct InMemoryGenome {
    name: String,
    flank: i32,
    approx_margin: i32,
    chromosomes: AHashMap<String, Sequence>,
    features: AHashMap<String, Feature>,
}

impl InMemoryGenome {
    pub fn new(name: &str) -> Self {
        InMemoryGenome {
            name: name.to_string(),
            flank: DEFAULT_FLANK,
            approx_margin: DEFAULT_APPROX_MARGIN,
            chromosomes: AHashMap::new(),
            features: AHashMap::new(),
        }
    }

    pub fn with_flank(mut self, flank: i32) -> Self {
        self.flank = flank;
        self
    }

    pub fn with_approx_margin(mut self, margin: i32) -> Self {
        self.approx_margin = margin;
        self
    }

    pub fn add_chromosome(&mut self, chr: &str, seq: Sequence) {
        self.chromosomes.insert(chr.to_string(), seq);
    }

    pub fn add_feature(&mut self, feature: Feature) {
        self.features.insert(feature.gene.clone(), feature);
    }
}

impl Genome for InMemoryGenome {
    fn name(&self) -> &str {
        &self.name
    }

    fn flank(&self) -> i32 {
        self.flank
    }

    fn approx_margin(&self) -> i32 {
        self.approx_margin
    }

    fn is_valid(&self, gene: &str) -> bool {
        self.features.contains_key(gene)
    }

    fn get(&self, gene: &str) -> Result<Feature, Error> {
        self.features
            .get(gene)
            .cloned()
            .ok_or_else(|| Error::UnknownFeature {
                genome: self.name.clone(),
                gene: gene.to_string(),
            })
    }

    fn dna(&self, tag: &str, chr: &str, left: i32, right: i32) -> Result<Sequence, Error> {
        let seq = self
            .chromosomes
            .get(chr)
            .ok_or_else(|| Error::UnknownChromosome {
                genome: self.name.clone(),
                chr: chr.to_string(),
            })?;
        if left < 0 || right < left || right as usize >= seq.len() {
            return Err(Error::DnaOutOfRange {
                tag: tag.to_string(),
                chr: chr.to_string(),
                left,
                right,
                len: seq.len(),
            });
        }
        Ok(seq[left as usize..=right as usize].to_vec())
    }
}
