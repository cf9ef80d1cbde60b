use posif_core::Result;

/// Outlier call for a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierCall {
    pub is_outlier: bool,
    /// Higher is more normal. Outliers have negative scores.
    pub score: f64,
}

///
/// Anything that can label a 1-D signal inlier/outlier.
///
/// Implementors fit themselves to `values` and score those same values in one
/// pass; the returned vector has one call per value, in input order.
///
pub trait OutlierScorer: Send + Sync {
    fn score(&self, values: &[f64]) -> Result<Vec<OutlierCall>>;
}
