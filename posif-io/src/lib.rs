//! # Input/Output utilities for posif.
//!
//! Readers turn the tab-separated per-base coverage tracks and GFF-like
//! annotation tables into the record types of `posif-core`; writers dump
//! annotated regions as CSV and scored samples as TSV. Plain and `.gz`
//! inputs are both accepted.
//!
pub mod coverage;
pub mod features;
pub mod writers;

// re-expose core functions
pub use coverage::*;
pub use features::*;
pub use writers::*;
