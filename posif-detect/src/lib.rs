//! Detection of small RNA candidate regions from per-base read coverage.
//!
//! Detection runs in stages:
//!
//! 1. An [`OutlierScorer`] labels every coverage position inlier or outlier
//!    from its read count alone. [`IsolationForest`] is the default scorer.
//! 2. Outlier positions are split into maximal runs of consecutive
//!    coordinates ([`grouper::group_consecutive`]); runs of a single position
//!    are dropped.
//! 3. Runs closer than the merge gap are merged and short regions are
//!    filtered out ([`merge::RegionMerging`]). Survivors keep their index in
//!    the merged list.
//!
//! # Example
//!
//! ```rust
//! use posif_core::models::CoverageSample;
//! use posif_detect::{Detector, DetectorConfig};
//!
//! let samples: Vec<CoverageSample> = (1..=200)
//!     .map(|p| CoverageSample::new(p, if (50..=90).contains(&p) { 500.0 } else { 5.0 }))
//!     .collect();
//!
//! let config = DetectorConfig {
//!     contamination: 0.205,
//!     ..Default::default()
//! };
//! let detector = Detector::new(config).unwrap();
//! let regions = detector.detect(&samples).unwrap();
//!
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].index, 0);
//! assert_eq!((regions[0].region.start, regions[0].region.end), (50, 90));
//! ```

pub mod config;
pub mod detector;
pub mod grouper;
pub mod iforest;
pub mod merge;
pub mod scorer;

// re-exports
pub use config::DetectorConfig;
pub use detector::{Detector, detect};
pub use iforest::{IsolationForest, IsolationForestBuilder};
pub use merge::RegionMerging;
pub use scorer::{OutlierCall, OutlierScorer};
