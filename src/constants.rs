//! Crate-wide defaults.

/// Reference genome assumed when neither the part nor the assembly names one.
pub const DEFAULT_REF_GENOME: &str = "cenpk";

/// Default width of upstream/downstream flanking regions, in bases.
pub const DEFAULT_FLANK: i32 = 500;

/// Canonical promoter window upstream of a feature start, in bases.
pub const PROMOTER_LEN: i32 = 500;

/// Canonical terminator window downstream of a feature end, in bases.
pub const TERMINATOR_LEN: i32 = 500;

/// Canonical 3' tail realized for an mRNA part, in bases.
pub const MRNA_TAIL: i32 = 200;

/// How far an approximate slice endpoint is widened outward before the
/// physical sequence is fetched, in bases.
pub const DEFAULT_APPROX_MARGIN: i32 = 100;

/// Library gene used for selection-marker parts.
pub const MARKER_GENE: &str = "URA3";

/// Pragma selecting the reference genome for a part or assembly.
pub const PRAGMA_REF_GENOME: &str = "refgenome";

/// Pragma overriding the effective sequence-source name.
pub const PRAGMA_DNA_SOURCE: &str = "dnasrc";

/// Pragma naming a slice explicitly.
pub const PRAGMA_NAME: &str = "name";

/// Pragma attaching an external URI to a part.
pub const PRAGMA_URI: &str = "uri";

/// Pragma requesting a fusion junction after the part.
pub const PRAGMA_FUSE: &str = "fuse";
