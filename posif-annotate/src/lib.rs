//! Annotation of detected sRNA regions against a gene feature table.
//!
//! Each region is matched to the gene it overlaps best. The result is a
//! [`Location`](posif_core::models::Location): intergenic, a bare gene
//! identifier, or sense/antisense to a gene when a strand is requested.
//!
//! ## Quick Start
//!
//! ```rust
//! use posif_annotate::{annotate, GeneMatcher};
//! use posif_core::models::{GeneFeature, IndexedRegion, Region, Strand};
//!
//! let genes = vec![GeneFeature::new(50, 150, Strand::Plus, "ID=geneA;note=x")];
//! let regions = vec![
//!     IndexedRegion::new(0, Region::new(60, 140)),
//!     IndexedRegion::new(2, Region::new(400, 450)),
//! ];
//!
//! let rows = annotate(&regions, &genes, Some(Strand::Minus));
//! assert_eq!(rows[0].name, "Rev-sRNA-0");
//! assert_eq!(rows[0].location_label(), "Antisense to geneA");
//! assert_eq!(rows[1].name, "Rev-sRNA-2");
//! assert_eq!(rows[1].location_label(), "Intergenic");
//!
//! // single lookups go through the matcher directly
//! let matcher = GeneMatcher::new(&genes);
//! let location = matcher.locate(&Region::new(60, 140), None).unwrap();
//! assert_eq!(location.to_string(), "geneA");
//! ```

pub mod annotator;
pub mod matcher;

// re-exports
pub use annotator::{annotate, region_name};
pub use matcher::{GeneMatcher, overlap_percent};

/// Minimum overlap percentage for a single best gene to count as a match.
pub const MIN_SINGLE_OVERLAP_PERCENT: f64 = 50.0;
