//! Resolution of the sequence source for a part.

use std::sync::Arc;

use crate::assembly::{Assembly, Ppp};
use crate::constants::{PRAGMA_DNA_SOURCE, PRAGMA_REF_GENOME};
use crate::data::interface::Genome;
use crate::materialize::{Error, Materializer};

impl Materializer {
    /// The reference genome in effect for `ppp`: the part's `refgenome`
    /// pragma, else the assembly's, else the configured default.
    pub(crate) fn reference_genome(
        &self,
        assembly: &Assembly,
        ppp: &Ppp,
    ) -> Result<Arc<dyn Genome>, Error> {
        let name = ppp
            .pragmas
            .get_one(PRAGMA_REF_GENOME)
            .or_else(|| assembly.pragmas.get_one(PRAGMA_REF_GENOME))
            .unwrap_or(&self.config.default_genome);
        Ok(self.genomes.get(name)?)
    }

    /// The effective source name recorded on emitted slices.
    ///
    /// Unlike genome selection this does not fall back to the configured
    /// default; a part with no source pragmas gets an empty source name.
    pub(crate) fn dna_source(&self, assembly: &Assembly, ppp: &Ppp) -> String {
        ppp.pragmas
            .get_one(PRAGMA_DNA_SOURCE)
            .or_else(|| ppp.pragmas.get_one(PRAGMA_REF_GENOME))
            .or_else(|| assembly.pragmas.get_one(PRAGMA_REF_GENOME))
            .unwrap_or("")
            .to_string()
    }
}
