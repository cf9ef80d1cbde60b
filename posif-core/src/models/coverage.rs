/// Read count at one assayed genomic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageSample {
    pub position: u32,
    pub readcount: f64,
}

impl CoverageSample {
    pub fn new(position: u32, readcount: f64) -> Self {
        CoverageSample {
            position,
            readcount,
        }
    }
}

/// A coverage sample together with the outlier call made for it.
///
/// `score` follows the scorer convention: higher is more normal, negative
/// values are outliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSample {
    pub position: u32,
    pub readcount: f64,
    pub is_outlier: bool,
    pub score: f64,
}

impl ScoredSample {
    /// Decision column in the `-1` (outlier) / `1` (inlier) convention.
    pub fn decision(&self) -> i8 {
        if self.is_outlier { -1 } else { 1 }
    }
}
