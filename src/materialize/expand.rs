//! Expansion of an assembly's part list into the flat slice list.

use log::debug;

use crate::assembly::{Assembly, Part, Ppp};
use crate::constants::PRAGMA_FUSE;
use crate::dna::{recompute_offsets, DnaSlice};
use crate::materialize::{Error, Materializer};

/// Distribution of a multi-part wrapper over its children.
///
/// Identity for now; the intended future policy merges the parent
/// direction (reversing a group reverses each child and their order) and
/// pushes parent pragmas into children that lack them.
fn distribute(_parent: &Ppp, children: &[Ppp]) -> Vec<Ppp> {
    children.to_vec()
}

impl Materializer {
    /// Materialize every part of `assembly` in order and assign
    /// destination offsets.
    ///
    /// The output ordering is the pre-order traversal of the part list,
    /// with fusion-junction slices following their originating part.  The
    /// first fatal condition aborts the whole assembly.
    pub fn expand_assembly(&self, assembly: &Assembly) -> Result<Vec<DnaSlice>, Error> {
        let mut slices = Vec::with_capacity(assembly.parts.len());
        self.expand_parts(assembly, &assembly.parts, &mut slices)?;
        recompute_offsets(&mut slices);
        Ok(slices)
    }

    fn expand_parts(
        &self,
        assembly: &Assembly,
        parts: &[Ppp],
        out: &mut Vec<DnaSlice>,
    ) -> Result<(), Error> {
        for ppp in parts {
            let dna_source = self.dna_source(assembly, ppp);
            match &ppp.part {
                Part::Gene { gene, mods, linker } => {
                    debug!("expanding gene part {} (fwd={})", gene, ppp.fwd);
                    out.push(self.gene_part(
                        assembly,
                        ppp,
                        gene,
                        mods,
                        linker.as_ref(),
                        &dna_source,
                    )?);
                }
                Part::Marker => out.push(self.marker_part(ppp, &dna_source)?),
                Part::InlineDna { dna } => out.push(self.inline_part(ppp, dna, &dna_source)),
                Part::ExternalId { id } => out.push(self.external_part(ppp, id, &dna_source)?),
                Part::FusionMarker => out.push(self.fusion_slice()),
                Part::Multi { children } => {
                    let children = distribute(ppp, children);
                    self.expand_parts(assembly, &children, out)?;
                }
                // Already materialized by an earlier pass.
                Part::Expanded(_) => {}
                Part::InlineProtein { .. } => return Err(Error::UnexpandedProtein),
                Part::HeterologyBlock => return Err(Error::UnexpandedHeterology),
                Part::ParseError { message, loc } => {
                    return Err(Error::ParseFailure {
                        message: message.clone(),
                        loc: *loc,
                    })
                }
            }
            if ppp.pragmas.contains(PRAGMA_FUSE) {
                out.push(self.fusion_slice());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use crate::assembly::{Assembly, Part, Ppp, Pragmas, SourceLoc};
    use crate::breed::Breed;
    use crate::coords::RelPos;
    use crate::data::interface::{CandidateSource, Feature, PartCandidate, PartResolver};
    use crate::data::library::SequenceLibrary;
    use crate::data::registry::{GenomeRegistry, InMemoryGenome};
    use crate::data::Error as DataError;
    use crate::dna::{DnaSlice, SliceType};
    use crate::materialize::{Config, Error, Materializer};
    use crate::sequences::revcomp;
    use crate::slice::{Slice, SliceModifier};
    use crate::Sequence;

    fn chr1() -> Sequence {
        (0..8000).map(|i| b"ACGT"[i % 4]).collect()
    }

    fn genomic(from: usize, to: usize) -> Sequence {
        chr1()[from..=to].to_vec()
    }

    fn test_genome() -> InMemoryGenome {
        let mut genome = InMemoryGenome::new("cenpk");
        genome.add_chromosome("chr1", chr1());
        genome.add_feature(Feature {
            gene: "ADH1".to_string(),
            chr: "chr1".to_string(),
            left: 1000,
            right: 1500,
            fwd: true,
        });
        genome.add_feature(Feature {
            gene: "ERG10".to_string(),
            chr: "chr1".to_string(),
            left: 5000,
            right: 5600,
            fwd: false,
        });
        genome
    }

    fn test_library() -> SequenceLibrary {
        let mut library = SequenceLibrary::new();
        library.insert("MYGENE", vec![b'A'; 40]);
        library.insert("URA3", genomic(7000, 7899));
        library
    }

    fn materializer() -> Materializer {
        materializer_with_config(&Config::default())
    }

    fn materializer_with_config(config: &Config) -> Materializer {
        let mut registry = GenomeRegistry::new();
        registry.insert(Arc::new(test_genome()));
        Materializer::new(config, Arc::new(registry), Arc::new(test_library()))
    }

    fn gene(name: &str) -> Part {
        Part::Gene {
            gene: name.to_string(),
            mods: Vec::new(),
            linker: None,
        }
    }

    fn gene_sliced(name: &str, slice: Slice) -> Part {
        Part::Gene {
            gene: name.to_string(),
            mods: vec![SliceModifier::Slice(slice)],
            linker: None,
        }
    }

    fn assemble(parts: Vec<Ppp>) -> Assembly {
        Assembly {
            name: "test".to_string(),
            parts,
            pragmas: Pragmas::new(),
        }
    }

    fn expand_one(part: Ppp) -> DnaSlice {
        let slices = materializer()
            .expand_assembly(&assemble(vec![part]))
            .expect("expansion failed");
        assert_eq!(slices.len(), 1);
        slices.into_iter().next().unwrap()
    }

    /// Every non-fusion slice covers exactly its recorded source span.
    fn assert_length_law(slices: &[DnaSlice]) {
        for s in slices {
            if s.slice_type != SliceType::Fusion {
                assert_eq!(
                    s.dna.len() as i32,
                    s.source_to - s.source_from + 1,
                    "length law violated for {}",
                    s.description
                );
            }
        }
    }

    /// Each slice starts where its predecessor ended.
    fn assert_contiguity(slices: &[DnaSlice]) {
        let mut expected_from = 0;
        for s in slices {
            assert_eq!(s.dest_from, expected_from, "gap before {}", s.description);
            assert_eq!(s.dest_to, s.dest_from + s.dna.len() as i32 - 1);
            expected_from = s.dest_to + 1;
        }
    }

    #[test]
    fn whole_gene_forward() {
        let slice = expand_one(Ppp::forward(gene("gADH1")));
        assert_eq!(slice.source_chr, "chr1");
        assert_eq!((slice.source_from, slice.source_to), (1000, 1500));
        assert!(slice.source_fwd);
        assert!(slice.dest_fwd);
        assert!(slice.amplified);
        assert_eq!(slice.breed, Breed::X);
        assert_eq!(slice.slice_type, SliceType::Regular);
        assert_eq!(slice.dna, genomic(1000, 1500));
        assert_eq!(slice.template, Some(genomic(1000, 1500)));
        assert_eq!(slice.description, "gADH1");
        assert_eq!(slice.dna_source, "");
        assert_eq!((slice.dest_from, slice.dest_to), (0, 500));
        assert!(!slice.source_from_approx && !slice.source_to_approx);
        assert_length_law(&[slice]);
    }

    #[test]
    fn promoter_part_widens_its_approximate_start() {
        let slice = expand_one(Ppp::forward(gene("pADH1")));
        // The canonical promoter window [-500:-1] projects to 500..999;
        // the approximate left end carries the 100 base margin.
        assert_eq!((slice.source_from, slice.source_to), (400, 999));
        assert_eq!(slice.breed, Breed::Promoter);
        assert!(slice.source_from_approx);
        assert!(!slice.source_to_approx);
        assert_eq!(slice.dna, genomic(400, 999));
        assert!(slice.amplified);
        assert_length_law(&[slice]);
    }

    #[test]
    fn reversed_terminator_on_crick_gene() {
        let slice = expand_one(Ppp::reversed(gene("tERG10")));
        // Terminator of a crick gene runs left of feature.left; the
        // approximate end carries the margin: [+1E:+600E] -> 4400..4999.
        assert_eq!((slice.source_from, slice.source_to), (4400, 4999));
        assert!(!slice.source_fwd);
        assert!(!slice.dest_fwd);
        assert_eq!(slice.breed, Breed::Terminator);
        // Reverse complemented once for the strand and once for the part
        // direction, the emitted sequence reads genomic-forward again.
        assert_eq!(slice.dna, genomic(4400, 4999));
        assert_eq!(slice.description, "!tERG10");
        // Flags follow the emitted orientation: the approximate
        // terminator tail is now the 5' end.
        assert!(slice.source_from_approx);
        assert!(!slice.source_to_approx);
        assert_length_law(&[slice]);
    }

    #[test]
    fn terminator_on_crick_gene_forward() {
        let slice = expand_one(Ppp::forward(gene("tERG10")));
        assert_eq!((slice.source_from, slice.source_to), (4400, 4999));
        assert_eq!(slice.dna, revcomp(&genomic(4400, 4999)));
        assert!(slice.dest_fwd);
        assert!(!slice.source_from_approx);
        assert!(slice.source_to_approx);
    }

    #[test]
    fn sliced_gene_with_approximate_end() {
        let part = gene_sliced(
            "gADH1",
            Slice {
                left: RelPos::five_prime(-100),
                right: RelPos::three_prime(50),
                l_approx: false,
                r_approx: true,
            },
        );
        let slice = expand_one(Ppp::forward(part));
        assert_eq!((slice.source_from, slice.source_to), (900, 1650));
        assert!(!slice.source_from_approx);
        assert!(slice.source_to_approx);
        assert_eq!(slice.breed, Breed::X);
        assert_eq!(slice.description, "gADH1[-100:~+50E]");
        assert_length_law(&[slice]);
    }

    #[test]
    fn library_gene_slice() {
        let part = gene_sliced(
            "gMYGENE",
            Slice {
                left: RelPos::five_prime(1),
                right: RelPos::five_prime(10),
                l_approx: false,
                r_approx: false,
            },
        );
        let slice = expand_one(Ppp::forward(part));
        assert_eq!(slice.source_chr, "library");
        assert_eq!((slice.source_from, slice.source_to), (0, 9));
        assert_eq!(slice.dna, vec![b'A'; 10]);
        assert!(!slice.amplified);
        assert_eq!(slice.breed, Breed::X);
        assert_length_law(&[slice]);
    }

    #[test]
    fn library_gene_whole() {
        let slice = expand_one(Ppp::forward(gene("gMYGENE")));
        assert_eq!((slice.source_from, slice.source_to), (0, 39));
        assert_eq!(slice.dna.len(), 40);
    }

    #[test]
    fn library_gene_rejects_approximate_bounds() {
        let part = gene_sliced(
            "gMYGENE",
            Slice {
                left: RelPos::five_prime(1),
                right: RelPos::five_prime(10),
                l_approx: true,
                r_approx: false,
            },
        );
        let err = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(part)]))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn library_gene_range_check() {
        let part = gene_sliced(
            "gMYGENE",
            Slice {
                left: RelPos::five_prime(1),
                right: RelPos::five_prime(60),
                l_approx: false,
                r_approx: false,
            },
        );
        let err = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(part)]))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::LibrarySliceOutOfRange { from: 1, to: 60, .. }
        ));
    }

    #[test]
    fn fusion_pragma_injects_junction() {
        let mut first = Ppp::forward(gene("gADH1"));
        first.pragmas.add("fuse", "");
        let second = Ppp::forward(gene("gERG10"));
        let slices = materializer()
            .expand_assembly(&assemble(vec![first, second]))
            .unwrap();

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].slice_type, SliceType::Regular);
        assert_eq!(slices[1].slice_type, SliceType::Fusion);
        assert_eq!(slices[2].slice_type, SliceType::Regular);

        let fusion = &slices[1];
        assert!(fusion.dna.is_empty());
        assert_eq!(fusion.breed, Breed::Virtual);
        assert_eq!(fusion.description, "::");
        assert_eq!(fusion.template, None);
        assert!(fusion.pragmas.is_empty());
        // Zero length: the junction occupies no destination space.
        assert_eq!((fusion.dest_from, fusion.dest_to), (501, 500));

        assert_eq!((slices[0].dest_from, slices[0].dest_to), (0, 500));
        assert_eq!((slices[2].dest_from, slices[2].dest_to), (501, 1101));
        assert_contiguity(&slices);
        assert_length_law(&slices);

        // The crick-strand gene reads 5'->3' of the gene when forward.
        assert_eq!(slices[2].dna, revcomp(&genomic(5000, 5600)));
        assert_eq!((slices[2].source_from, slices[2].source_to), (5000, 5600));
        assert!(!slices[2].source_fwd);
        assert!(slices[2].dest_fwd);
    }

    #[test]
    fn explicit_fusion_marker_part() {
        let slices = materializer()
            .expand_assembly(&assemble(vec![
                Ppp::forward(gene("gADH1")),
                Ppp::forward(Part::FusionMarker),
                Ppp::forward(gene("gADH1")),
            ]))
            .unwrap();
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[1].slice_type, SliceType::Fusion);
        assert_contiguity(&slices);
    }

    #[test]
    fn mixed_assembly_offsets() {
        let slices = materializer()
            .expand_assembly(&assemble(vec![
                Ppp::forward(Part::InlineDna {
                    dna: b"GATCGA".to_vec(),
                }),
                Ppp::forward(gene("gADH1")),
                Ppp::forward(Part::Marker),
            ]))
            .unwrap();
        assert_eq!(slices.len(), 3);
        assert_contiguity(&slices);
        assert_length_law(&slices);

        let inline = &slices[0];
        assert_eq!(inline.slice_type, SliceType::Inline);
        assert_eq!(inline.breed, Breed::Inline);
        assert_eq!(inline.source_chr, "inline");
        assert_eq!(inline.description, "GATCGA");
        assert!(!inline.amplified);

        let marker = &slices[2];
        assert_eq!(marker.slice_type, SliceType::Marker);
        assert_eq!(marker.breed, Breed::Marker);
        assert_eq!(marker.source_chr, "library");
        assert_eq!(marker.description, "URA3 marker");
        assert!(!marker.amplified);
        assert_eq!(marker.dna.len(), 900);
    }

    #[test]
    fn inline_literal_reversed() {
        let slice = expand_one(Ppp::reversed(Part::InlineDna {
            dna: b"GATCGA".to_vec(),
        }));
        assert_eq!(slice.dna, revcomp(b"GATCGA"));
        assert_eq!(slice.description, "!GATCGA");
        assert!(!slice.dest_fwd);
    }

    #[test]
    fn reversal_is_revcomp_of_forward() {
        let fwd = expand_one(Ppp::forward(gene("gADH1")));
        let rev = expand_one(Ppp::reversed(gene("gADH1")));
        assert_eq!(rev.dna, revcomp(&fwd.dna));
        assert_eq!(rev.description, "!gADH1");
        assert!(!rev.dest_fwd);
        assert_eq!(
            (rev.source_from, rev.source_to),
            (fwd.source_from, fwd.source_to)
        );
    }

    #[test]
    fn reversal_swaps_approximation_flags() {
        let fwd = expand_one(Ppp::forward(gene("pADH1")));
        let rev = expand_one(Ppp::reversed(gene("pADH1")));
        assert_eq!(rev.source_from_approx, fwd.source_to_approx);
        assert_eq!(rev.source_to_approx, fwd.source_from_approx);
    }

    #[test]
    fn gene_with_stop_refinement() {
        let part = gene_sliced(
            "gADH1",
            Slice {
                left: RelPos::five_prime(1),
                right: RelPos::three_prime(150),
                l_approx: false,
                r_approx: false,
            },
        );
        let slice = expand_one(Ppp::forward(part));
        assert_eq!(slice.breed, Breed::Gst);
        assert_eq!((slice.source_from, slice.source_to), (1000, 1650));
    }

    #[test]
    fn mrna_part() {
        let slice = expand_one(Ppp::forward(gene("mADH1")));
        assert_eq!(slice.breed, Breed::Gst);
        assert_eq!((slice.source_from, slice.source_to), (1000, 1800));
        assert!(!slice.source_from_approx);
        assert!(slice.source_to_approx);
    }

    #[test]
    fn multi_part_flattens_in_order() {
        let group = Part::Multi {
            children: vec![Ppp::forward(gene("gADH1")), Ppp::forward(gene("gERG10"))],
        };
        let slices = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(group)]))
            .unwrap();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].description, "gADH1");
        assert_eq!(slices[1].description, "gERG10");
        assert_contiguity(&slices);
    }

    #[test]
    fn expanded_parts_are_skipped() {
        let ready = expand_one(Ppp::forward(gene("gADH1")));
        let slices = materializer()
            .expand_assembly(&assemble(vec![
                Ppp::forward(Part::Expanded(Box::new(ready))),
                Ppp::forward(gene("gERG10")),
            ]))
            .unwrap();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].description, "gERG10");
    }

    #[test]
    fn negative_length_detected_after_projection() {
        // Cross-endpoint bounds pass the static check but project to an
        // inverted span on the forward strand.
        let part = gene_sliced(
            "gADH1",
            Slice {
                left: RelPos::three_prime(400),
                right: RelPos::five_prime(10),
                l_approx: false,
                r_approx: false,
            },
        );
        let err = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(part)]))
            .unwrap_err();
        assert!(matches!(err, Error::NegativeLength { .. }));
        assert!(err.to_string().contains("negatively lengthed"));
    }

    #[test]
    fn unknown_gene_and_prefix_errors() {
        let err = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(gene("gNOPE"))]))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownGene { .. }));

        let err = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(gene("qADH1"))]))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownPrefix(_)));
    }

    #[test]
    fn missing_reference_genome_lists_available() {
        let mut assembly = assemble(vec![Ppp::forward(gene("gADH1"))]);
        assembly.pragmas = Pragmas::single("refgenome", "ghost");
        let err = materializer().expand_assembly(&assembly).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::Data(DataError::UnknownGenome { .. })));
        assert!(message.contains("ghost") && message.contains("cenpk"));
    }

    #[test]
    fn missing_marker_is_fatal() {
        let mut registry = GenomeRegistry::new();
        registry.insert(Arc::new(test_genome()));
        let empty = Materializer::new(
            &Config::default(),
            Arc::new(registry),
            Arc::new(SequenceLibrary::new()),
        );
        let err = empty
            .expand_assembly(&assemble(vec![Ppp::forward(Part::Marker)]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingMarker(_)));
    }

    #[test]
    fn unexpanded_specials_are_fatal() {
        let err = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(Part::InlineProtein {
                aa: "MGS".to_string(),
            })]))
            .unwrap_err();
        assert!(matches!(err, Error::UnexpandedProtein));

        let err = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(Part::HeterologyBlock)]))
            .unwrap_err();
        assert!(matches!(err, Error::UnexpandedHeterology));
    }

    #[test]
    fn parse_errors_surface_with_location() {
        let err = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(Part::ParseError {
                message: "unterminated slice".to_string(),
                loc: SourceLoc { line: 3, col: 14 },
            })]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unterminated slice at line 3, column 14"
        );
    }

    #[test]
    fn dna_source_pragma_is_stamped() {
        let mut ppp = Ppp::forward(gene("gADH1"));
        ppp.pragmas.add("dnasrc", "plasmid-17");
        let slices = materializer()
            .expand_assembly(&assemble(vec![ppp]))
            .unwrap();
        assert_eq!(slices[0].dna_source, "plasmid-17");
    }

    struct StubResolver;

    impl PartResolver for StubResolver {
        fn fetch_sequence(
            &self,
            _library: &SequenceLibrary,
            ppp: &Ppp,
            part_id: &str,
        ) -> Result<DnaSlice, DataError> {
            let m = materializer();
            let mut slice = m.inline_part(ppp, b"TTTTCCCC", "");
            slice.description = part_id.to_string();
            Ok(slice)
        }
    }

    #[test]
    fn external_part_takes_name_and_source_from_the_ppp() {
        let mut ppp = Ppp::forward(Part::ExternalId {
            id: "R123".to_string(),
        });
        ppp.pragmas.add("name", "my-insert");
        ppp.pragmas.add("dnasrc", "registry");
        let m = materializer().with_part_resolver(Arc::new(StubResolver));
        let slices = m.expand_assembly(&assemble(vec![ppp])).unwrap();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].description, "my-insert");
        assert_eq!(slices[0].dna_source, "registry");
        assert!(slices[0].pragmas.contains("name"));
        assert_eq!(slices[0].dna, b"TTTTCCCC".to_vec());
    }

    #[test]
    fn external_part_without_resolver_fails() {
        let err = materializer()
            .expand_assembly(&assemble(vec![Ppp::forward(Part::ExternalId {
                id: "R123".to_string(),
            })]))
            .unwrap_err();
        assert!(matches!(err, Error::Data(DataError::ExternalPart { .. })));
    }

    #[derive(Default)]
    struct RecordingCandidates {
        queries: Mutex<Vec<(String, String, String)>>,
    }

    impl CandidateSource for RecordingCandidates {
        fn fetch_candidates(
            &self,
            url: &str,
            insert_name: &str,
            breed_code: &str,
        ) -> Vec<PartCandidate> {
            self.queries.lock().unwrap().push((
                url.to_string(),
                insert_name.to_string(),
                breed_code.to_string(),
            ));
            vec![PartCandidate {
                id: "c1".to_string(),
                name: insert_name.to_string(),
            }]
        }
    }

    #[test]
    fn candidate_lookup_for_upstream_and_downstream() {
        let recorder = Arc::new(RecordingCandidates::default());
        let config = Config {
            proxy_url: Some("http://proxy.local/parts".to_string()),
            ..Config::default()
        };
        let m = materializer_with_config(&config).with_candidate_source(recorder.clone());

        let slices = m
            .expand_assembly(&assemble(vec![
                Ppp::forward(gene("uADH1")),
                Ppp::forward(gene("dADH1")),
                Ppp::forward(gene("gADH1")),
            ]))
            .unwrap();

        assert_eq!(slices[0].breed, Breed::Upstream);
        assert_eq!(slices[0].external_candidates.len(), 1);
        assert_eq!(slices[0].external_candidates[0].name, "US_ADH1");
        assert_eq!(slices[1].breed, Breed::Downstream);
        assert_eq!(slices[1].external_candidates[0].name, "DS_ADH1");
        assert!(slices[2].external_candidates.is_empty());

        let queries = recorder.queries.lock().unwrap();
        assert_eq!(
            *queries,
            vec![
                (
                    "http://proxy.local/parts".to_string(),
                    "US_ADH1".to_string(),
                    "US".to_string()
                ),
                (
                    "http://proxy.local/parts".to_string(),
                    "DS_ADH1".to_string(),
                    "DS".to_string()
                ),
            ]
        );
    }

    #[test]
    fn no_candidate_lookup_without_proxy_url() {
        let recorder = Arc::new(RecordingCandidates::default());
        let m = materializer().with_candidate_source(recorder.clone());
        let slices = m
            .expand_assembly(&assemble(vec![Ppp::forward(gene("uADH1"))]))
            .unwrap();
        assert!(slices[0].external_candidates.is_empty());
        assert!(recorder.queries.lock().unwrap().is_empty());
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
