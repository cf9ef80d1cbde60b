use serde::{Deserialize, Serialize};

use posif_core::consts::{DEFAULT_CONTAMINATION, MERGE_GAP, MIN_REGION_LENGTH, MIN_RUN_LENGTH};

use crate::iforest::{DEFAULT_MAX_SAMPLES, DEFAULT_N_ESTIMATORS, DEFAULT_SEED};

///
/// Tunables for one detection run.
///
/// Every field has a default, so a config file only needs to name the values
/// it overrides.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DetectorConfig {
    /// Expected proportion of outlier positions, in (0, 1).
    pub contamination: f64,
    pub n_estimators: usize,
    /// Per-tree subsample size, clamped to the number of samples.
    pub max_samples: usize,
    pub seed: u64,
    pub min_run_length: usize,
    pub merge_gap: u32,
    pub min_region_length: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            contamination: DEFAULT_CONTAMINATION,
            n_estimators: DEFAULT_N_ESTIMATORS,
            max_samples: DEFAULT_MAX_SAMPLES,
            seed: DEFAULT_SEED,
            min_run_length: MIN_RUN_LENGTH,
            merge_gap: MERGE_GAP,
            min_region_length: MIN_REGION_LENGTH,
        }
    }
}
