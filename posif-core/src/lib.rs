//! Core infrastructure for posif: small RNA (sRNA) candidate detection from
//! per-base read coverage.
//!
//! This crate holds the record types shared by the detection and annotation
//! crates, the error type every crate reports through, and a couple of small
//! file helpers.
//!
//! ```rust
//! use posif_core::models::{GeneFeature, Region, Strand};
//!
//! let gene = GeneFeature::new(50, 150, Strand::Plus, "ID=geneA;note=x");
//! let region = Region::new(60, 140);
//!
//! assert!(gene.overlaps(&region));
//! assert_eq!(gene.gene_id().unwrap(), "geneA");
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::{PosifError, Result};
