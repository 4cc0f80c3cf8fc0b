//! The per-part materializers, one per part kind.

use log::debug;

use crate::assembly::{Assembly, Linker, Ppp, Pragmas};
use crate::breed::{initial_breed, kind_for_prefix, refine_breed, Breed};
use crate::constants::{DEFAULT_FLANK, MARKER_GENE, PRAGMA_NAME};
use crate::coords::{adjust_to_physical, Endpoint, RelPos};
use crate::data::interface::{Genome, PartCandidate};
use crate::dna::{DnaSlice, SliceType};
use crate::materialize::{Error, Materializer};
use crate::sequences::revcomp;
use crate::slice::{
    apply_dot_modifiers, apply_slices, canonical_slice, GenePartKind, Slice, SliceModifier,
};
use crate::validator::check_modifiers;

/// Label for a gene part: the name as written, dot modifiers, the final
/// slice when one was given, and a leading `!` when reversed.
fn describe_gene(gene: &str, mods: &[SliceModifier], final_slice: &Slice, fwd: bool) -> String {
    let mut text = String::from(gene);
    for m in mods {
        if let SliceModifier::Dot(dot) = m {
            text.push('.');
            text.push_str(dot);
        }
    }
    if mods.iter().any(|m| matches!(m, SliceModifier::Slice(_))) {
        text.push_str(&final_slice.to_string());
    }
    if fwd {
        text
    } else {
        format!("!{}", text)
    }
}

impl Materializer {
    /// Materialize a selection-marker part from the library.
    pub(crate) fn marker_part(&self, ppp: &Ppp, dna_source: &str) -> Result<DnaSlice, Error> {
        let seq = self
            .library
            .get(MARKER_GENE)
            .ok_or_else(|| Error::MissingMarker(MARKER_GENE.to_string()))?;
        Ok(DnaSlice {
            dna: seq.clone(),
            source_chr: "library".to_string(),
            source_from: 0,
            source_to: seq.len() as i32 - 1,
            source_fwd: true,
            source_from_approx: false,
            source_to_approx: false,
            dest_from: 0,
            dest_to: 0,
            dest_fwd: ppp.fwd,
            template: Some(seq.clone()),
            amplified: false,
            slice_type: SliceType::Marker,
            breed: Breed::Marker,
            description: format!("{} marker", MARKER_GENE),
            pragmas: ppp.pragmas.clone(),
            dna_source: dna_source.to_string(),
            external_candidates: Vec::new(),
        })
    }

    /// Materialize an inline DNA literal.
    pub(crate) fn inline_part(&self, ppp: &Ppp, literal: &[u8], dna_source: &str) -> DnaSlice {
        let dna = if ppp.fwd {
            literal.to_vec()
        } else {
            revcomp(literal)
        };
        let text = String::from_utf8_lossy(literal);
        let description = if ppp.fwd {
            text.to_string()
        } else {
            format!("!{}", text)
        };
        DnaSlice {
            dna: dna.clone(),
            source_chr: "inline".to_string(),
            source_from: 0,
            source_to: literal.len() as i32 - 1,
            source_fwd: true,
            source_from_approx: false,
            source_to_approx: false,
            dest_from: 0,
            dest_to: 0,
            dest_fwd: ppp.fwd,
            template: Some(dna),
            amplified: false,
            slice_type: SliceType::Inline,
            breed: Breed::Inline,
            description,
            pragmas: ppp.pragmas.clone(),
            dna_source: dna_source.to_string(),
            external_candidates: Vec::new(),
        }
    }

    /// Materialize a gene part, dispatching on where the name resolves.
    pub(crate) fn gene_part(
        &self,
        assembly: &Assembly,
        ppp: &Ppp,
        gene: &str,
        mods: &[SliceModifier],
        linker: Option<&Linker>,
        dna_source: &str,
    ) -> Result<DnaSlice, Error> {
        let prefix = gene
            .chars()
            .next()
            .ok_or_else(|| Error::UnknownPrefix(gene.to_string()))?;
        let kind = kind_for_prefix(prefix).ok_or_else(|| Error::UnknownPrefix(gene.to_string()))?;
        let rest = &gene[prefix.len_utf8()..];

        if let Some(linker) = linker {
            self.linker_check.check(linker)?;
        }

        let genome = self.reference_genome(assembly, ppp)?;
        if genome.is_valid(rest) {
            debug!("materializing {} genomically from {}", gene, genome.name());
            self.genomic_gene(genome.as_ref(), ppp, gene, rest, kind, mods, dna_source)
        } else if self.library.contains(rest) {
            debug!("materializing {} from the sequence library", gene);
            self.library_gene(ppp, gene, rest, kind, mods, dna_source)
        } else {
            Err(Error::UnknownGene {
                gene: rest.to_string(),
                genome: genome.name().to_string(),
            })
        }
    }

    /// Materialize a gene whose sequence lives in the library.
    ///
    /// Library sequences carry no flanking context: the part realizes the
    /// whole-gene slice narrowed by explicit modifiers, and approximate
    /// bounds are rejected.
    fn library_gene(
        &self,
        ppp: &Ppp,
        gene: &str,
        rest: &str,
        kind: GenePartKind,
        mods: &[SliceModifier],
        dna_source: &str,
    ) -> Result<DnaSlice, Error> {
        check_modifiers(gene, mods, false)?;
        apply_dot_modifiers(kind, mods)?;

        let seq = self.library.get(rest).ok_or_else(|| Error::UnknownGene {
            gene: rest.to_string(),
            genome: "library".to_string(),
        })?;
        let final_slice = apply_slices(canonical_slice(GenePartKind::Gene, DEFAULT_FLANK), mods);

        let len = seq.len() as i32;
        let project = |pos: RelPos| match pos.relative_to {
            Endpoint::FivePrime => pos.offset,
            Endpoint::ThreePrime => len + 1 + pos.offset,
        };
        let x = project(final_slice.left);
        let y = project(final_slice.right);
        if !(1 <= x && x <= y && y <= len) {
            return Err(Error::LibrarySliceOutOfRange {
                gene: rest.to_string(),
                from: x,
                to: y,
                len: seq.len(),
            });
        }

        let piece = seq[(x - 1) as usize..=(y - 1) as usize].to_vec();
        let dna = if ppp.fwd { piece } else { revcomp(&piece) };
        Ok(DnaSlice {
            dna: dna.clone(),
            source_chr: "library".to_string(),
            source_from: x - 1,
            source_to: y - 1,
            source_fwd: true,
            source_from_approx: false,
            source_to_approx: false,
            dest_from: 0,
            dest_to: 0,
            dest_fwd: ppp.fwd,
            template: Some(dna),
            amplified: false,
            slice_type: SliceType::Regular,
            breed: Breed::X,
            description: describe_gene(gene, mods, &final_slice, ppp.fwd),
            pragmas: ppp.pragmas.clone(),
            dna_source: dna_source.to_string(),
            external_candidates: Vec::new(),
        })
    }

    /// Materialize a gene against the reference genome by PCR.
    fn genomic_gene(
        &self,
        genome: &dyn Genome,
        ppp: &Ppp,
        gene: &str,
        rest: &str,
        kind: GenePartKind,
        mods: &[SliceModifier],
        dna_source: &str,
    ) -> Result<DnaSlice, Error> {
        check_modifiers(gene, mods, true)?;
        let kind = apply_dot_modifiers(kind, mods)?;
        let feature = genome.get(rest)?;

        let initial = canonical_slice(kind, genome.flank());
        let final_slice = apply_slices(initial, mods);
        let breed = refine_breed(initial_breed(kind), &final_slice);

        // Approximate ends are widened before the fetch so primer design
        // has sequence to move into; provenance records the fetched span.
        let widened = final_slice.widen_approx(genome.approx_margin());
        let left_phys = adjust_to_physical(&feature, widened.left);
        let right_phys = adjust_to_physical(&feature, widened.right);
        let (from, to) = if feature.fwd {
            (left_phys, right_phys)
        } else {
            (right_phys, left_phys)
        };
        if from > to {
            return Err(Error::NegativeLength {
                gene: gene.to_string(),
                left: from,
                right: to,
            });
        }

        let mut dna = genome.dna(dna_source, &feature.chr, from, to)?;
        // One reverse complement restores the 5'->3' reading of a
        // crick-strand feature, an independent one realizes part reversal.
        if !feature.fwd {
            dna = revcomp(&dna);
        }
        if !ppp.fwd {
            dna = revcomp(&dna);
        }

        // Approximation flags are kept in emitted orientation: "from"
        // describes the 5' end of the DNA as it leaves this pass.
        let (from_approx, to_approx) = if ppp.fwd {
            (widened.l_approx, widened.r_approx)
        } else {
            (widened.r_approx, widened.l_approx)
        };

        let external_candidates = self.lookup_candidates(breed, rest);
        Ok(DnaSlice {
            dna: dna.clone(),
            source_chr: feature.chr.clone(),
            source_from: from,
            source_to: to,
            source_fwd: feature.fwd,
            source_from_approx: from_approx,
            source_to_approx: to_approx,
            dest_from: 0,
            dest_to: 0,
            dest_fwd: ppp.fwd,
            template: Some(dna),
            amplified: true,
            slice_type: SliceType::Regular,
            breed,
            description: describe_gene(gene, mods, &final_slice, ppp.fwd),
            pragmas: ppp.pragmas.clone(),
            dna_source: dna_source.to_string(),
            external_candidates,
        })
    }

    /// Materialize an externally registered part via the resolver.
    pub(crate) fn external_part(
        &self,
        ppp: &Ppp,
        part_id: &str,
        dna_source: &str,
    ) -> Result<DnaSlice, Error> {
        let mut slice = self.resolver.fetch_sequence(&self.library, ppp, part_id)?;
        slice.pragmas = ppp.pragmas.clone();
        if let Some(name) = ppp.pragmas.get_one(PRAGMA_NAME) {
            slice.description = name.to_string();
        }
        slice.dna_source = dna_source.to_string();
        Ok(slice)
    }

    /// The sentinel slice marking a fusion of neighbouring parts.
    pub(crate) fn fusion_slice(&self) -> DnaSlice {
        DnaSlice {
            dna: Vec::new(),
            source_chr: String::new(),
            source_from: 0,
            source_to: 0,
            source_fwd: true,
            source_from_approx: false,
            source_to_approx: false,
            dest_from: 0,
            dest_to: 0,
            dest_fwd: true,
            template: None,
            amplified: false,
            slice_type: SliceType::Fusion,
            breed: Breed::Virtual,
            description: "::".to_string(),
            pragmas: Pragmas::new(),
            dna_source: String::new(),
            external_candidates: Vec::new(),
        }
    }

    /// Query the candidate proxy for upstream/downstream inserts.
    fn lookup_candidates(&self, breed: Breed, gene: &str) -> Vec<PartCandidate> {
        let (Some(url), Some(code)) = (self.config.proxy_url.as_deref(), breed.insert_code())
        else {
            return Vec::new();
        };
        let insert_name = format!("{}_{}", code, gene);
        self.candidates.fetch_candidates(url, &insert_name, code)
    }
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
