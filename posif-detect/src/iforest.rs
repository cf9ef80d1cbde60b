//! Isolation forest over a 1-D signal.
//!
//! Every tree is grown on a random subsample by splitting at a uniformly drawn
//! value between the node's minimum and maximum. Values that are isolated
//! after few splits are anomalous. The score of a value is
//! `-2^(-E[h(x)] / c(psi))` shifted so that the `contamination` quantile of the
//! training scores sits at zero: negative scores are outliers.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use posif_core::consts::DEFAULT_CONTAMINATION;
use posif_core::{PosifError, Result};

use crate::scorer::{OutlierCall, OutlierScorer};

pub const DEFAULT_N_ESTIMATORS: usize = 100;
pub const DEFAULT_MAX_SAMPLES: usize = 5000;
pub const DEFAULT_SEED: u64 = 0;

const EULER_GAMMA: f64 = 0.5772156649;

/// Builder for constructing an [`IsolationForest`].
///
/// # Examples
///
/// ```rust
/// use posif_detect::IsolationForest;
///
/// let forest = IsolationForest::builder()
///     .with_contamination(0.1)
///     .with_n_estimators(50)
///     .with_seed(42)
///     .finish()
///     .unwrap();
/// ```
pub struct IsolationForestBuilder {
    n_estimators: usize,
    max_samples: usize,
    contamination: f64,
    seed: u64,
}

impl Default for IsolationForestBuilder {
    fn default() -> Self {
        IsolationForestBuilder {
            n_estimators: DEFAULT_N_ESTIMATORS,
            max_samples: DEFAULT_MAX_SAMPLES,
            contamination: DEFAULT_CONTAMINATION,
            seed: DEFAULT_SEED,
        }
    }
}

impl IsolationForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn with_contamination(mut self, contamination: f64) -> Self {
        self.contamination = contamination;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the parameters and build the forest.
    pub fn finish(self) -> Result<IsolationForest> {
        if !(self.contamination > 0.0 && self.contamination < 1.0) {
            return Err(PosifError::InvalidInput(format!(
                "contamination must be in (0, 1), got {}",
                self.contamination
            )));
        }
        if self.n_estimators == 0 {
            return Err(PosifError::InvalidInput(
                "n_estimators must be at least 1".to_string(),
            ));
        }
        if self.max_samples == 0 {
            return Err(PosifError::InvalidInput(
                "max_samples must be at least 1".to_string(),
            ));
        }

        Ok(IsolationForest {
            n_estimators: self.n_estimators,
            max_samples: self.max_samples,
            contamination: self.contamination,
            seed: self.seed,
        })
    }
}

/// Isolation-based [`OutlierScorer`]. Runs single-threaded and is fully
/// determined by its seed.
#[derive(Debug, Clone, PartialEq)]
pub struct IsolationForest {
    n_estimators: usize,
    max_samples: usize,
    contamination: f64,
    seed: u64,
}

enum Node {
    Split {
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        size: usize,
    },
}

struct IsolationTree {
    nodes: Vec<Node>,
}

impl IsolationTree {
    fn grow(values: Vec<f64>, max_depth: usize, rng: &mut StdRng) -> Self {
        let mut tree = IsolationTree { nodes: Vec::new() };
        tree.grow_node(values, 0, max_depth, rng);
        tree
    }

    /// Grow the subtree for `values` and return its node index.
    fn grow_node(
        &mut self,
        values: Vec<f64>,
        depth: usize,
        max_depth: usize,
        rng: &mut StdRng,
    ) -> usize {
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        if values.len() <= 1 || depth >= max_depth || min >= max {
            self.nodes.push(Node::Leaf { size: values.len() });
            return self.nodes.len() - 1;
        }

        let threshold = rng.random_range(min..max);
        let (left_values, right_values): (Vec<f64>, Vec<f64>) =
            values.into_iter().partition(|&v| v <= threshold);

        // reserve the slot so children land after their parent
        let idx = self.nodes.len();
        self.nodes.push(Node::Leaf { size: 0 });

        let left = self.grow_node(left_values, depth + 1, max_depth, rng);
        let right = self.grow_node(right_values, depth + 1, max_depth, rng);
        self.nodes[idx] = Node::Split {
            threshold,
            left,
            right,
        };
        idx
    }

    fn path_length(&self, value: f64) -> f64 {
        let mut idx = 0;
        let mut depth = 0.0;
        loop {
            match self.nodes[idx] {
                Node::Split {
                    threshold,
                    left,
                    right,
                } => {
                    idx = if value <= threshold { left } else { right };
                    depth += 1.0;
                }
                Node::Leaf { size } => return depth + average_path_length(size),
            }
        }
    }
}

///
/// Average path length of an unsuccessful search in a binary search tree of
/// `n` nodes.
///
pub fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

///
/// Percentile `q` (0..=100) of `values` with linear interpolation between the
/// two closest ranks.
///
pub fn percentile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

impl IsolationForest {
    pub fn builder() -> IsolationForestBuilder {
        IsolationForestBuilder::new()
    }

    ///
    /// Raw anomaly scores `-2^(-E[h(x)] / c(psi))`, in `[-1, 0)`. Lower is more
    /// anomalous.
    ///
    /// # Errors
    /// [`PosifError::InvalidInput`] when `values` is empty or holds a NaN or
    /// infinite value.
    ///
    pub fn score_samples(&self, values: &[f64]) -> Result<Vec<f64>> {
        if values.is_empty() {
            return Err(PosifError::InvalidInput(
                "cannot fit an isolation forest on zero samples".to_string(),
            ));
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite()) {
            return Err(PosifError::InvalidInput(format!(
                "cannot fit an isolation forest on non-finite value {}",
                v
            )));
        }

        let n = values.len();
        let psi = self.max_samples.min(n);
        let max_depth = (psi as f64).log2().ceil() as usize;

        debug!(
            "Growing {} isolation trees (psi={}, max_depth={}, seed={})",
            self.n_estimators, psi, max_depth, self.seed
        );

        let mut rng = StdRng::seed_from_u64(self.seed);
        let trees: Vec<IsolationTree> = (0..self.n_estimators)
            .map(|_| {
                let subsample: Vec<f64> = sample(&mut rng, n, psi)
                    .into_iter()
                    .map(|i| values[i])
                    .collect();
                IsolationTree::grow(subsample, max_depth, &mut rng)
            })
            .collect();

        let normaliser = average_path_length(psi);
        let n_trees = trees.len() as f64;

        let scores = values
            .iter()
            .map(|&v| {
                let mean_depth = trees.iter().map(|t| t.path_length(v)).sum::<f64>() / n_trees;
                // a single-sample forest carries no information: score it as average
                let normalised = if normaliser > 0.0 {
                    mean_depth / normaliser
                } else {
                    1.0
                };
                -(2f64.powf(-normalised))
            })
            .collect();

        Ok(scores)
    }
}

impl OutlierScorer for IsolationForest {
    fn score(&self, values: &[f64]) -> Result<Vec<OutlierCall>> {
        let raw = self.score_samples(values)?;
        let offset = percentile(&raw, 100.0 * self.contamination);

        Ok(raw
            .into_iter()
            .map(|s| {
                let score = s - offset;
                OutlierCall {
                    is_outlier: score < 0.0,
                    score,
                }
            })
            .collect())
    }
}
