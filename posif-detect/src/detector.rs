use log::{debug, info};

use posif_core::models::{CoverageSample, IndexedRegion, Region, ScoredSample};
use posif_core::{PosifError, Result};

use crate::config::DetectorConfig;
use crate::grouper::group_consecutive;
use crate::iforest::IsolationForest;
use crate::merge::RegionMerging;
use crate::scorer::OutlierScorer;

///
/// Finds sRNA candidate regions in one coverage track.
///
/// The detector owns its scorer, so two tracks processed side by side each
/// need their own `Detector`.
///
pub struct Detector<S: OutlierScorer = IsolationForest> {
    config: DetectorConfig,
    scorer: S,
}

impl Detector<IsolationForest> {
    /// Create a detector backed by an [`IsolationForest`] built from `config`.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        let scorer = IsolationForest::builder()
            .with_contamination(config.contamination)
            .with_n_estimators(config.n_estimators)
            .with_max_samples(config.max_samples)
            .with_seed(config.seed)
            .finish()?;
        Ok(Detector { config, scorer })
    }
}

impl<S: OutlierScorer> Detector<S> {
    pub fn with_scorer(config: DetectorConfig, scorer: S) -> Self {
        Detector { config, scorer }
    }

    ///
    /// Score every sample of the track.
    ///
    /// The input is left untouched; the returned records carry the outlier
    /// label and score next to the original position and read count.
    ///
    pub fn score_samples(&self, samples: &[CoverageSample]) -> Result<Vec<ScoredSample>> {
        if samples.is_empty() {
            return Err(PosifError::InvalidInput(
                "coverage track has no samples".to_string(),
            ));
        }

        let readcounts: Vec<f64> = samples.iter().map(|s| s.readcount).collect();
        let calls = self.scorer.score(&readcounts)?;

        Ok(samples
            .iter()
            .zip(calls)
            .map(|(s, c)| ScoredSample {
                position: s.position,
                readcount: s.readcount,
                is_outlier: c.is_outlier,
                score: c.score,
            })
            .collect())
    }

    ///
    /// Detect candidate regions from already scored samples.
    ///
    /// Outlier positions are grouped into consecutive runs, single-position
    /// runs are dropped, nearby runs are merged and short regions filtered.
    /// Each surviving region keeps its index in the merged list.
    ///
    pub fn regions_from_scored(&self, scored: &[ScoredSample]) -> Vec<IndexedRegion> {
        let outlier_positions = scored.iter().filter(|s| s.is_outlier).map(|s| s.position);

        let raw: Vec<Region> = group_consecutive(outlier_positions, 1)
            .filter(|run| run.len() >= self.config.min_run_length)
            .filter_map(|run| Some(Region::new(*run.first()?, *run.last()?)))
            .collect();

        let merged = raw.merge_within(self.config.merge_gap);
        let regions = merged.filter_min_length(self.config.min_region_length);

        debug!(
            "{} runs, {} merged regions, {} kept (min length {})",
            raw.len(),
            merged.len(),
            regions.len(),
            self.config.min_region_length
        );

        regions
    }

    ///
    /// Detect sRNA candidate regions in a coverage track.
    ///
    /// # Arguments
    /// - samples: coverage samples in ascending position order
    ///
    /// # Errors
    /// [`PosifError::InvalidInput`] when `samples` is empty.
    ///
    pub fn detect(&self, samples: &[CoverageSample]) -> Result<Vec<IndexedRegion>> {
        let scored = self.score_samples(samples)?;
        let n_outliers = scored.iter().filter(|s| s.is_outlier).count();
        info!(
            "{} of {} positions flagged as outliers",
            n_outliers,
            scored.len()
        );
        Ok(self.regions_from_scored(&scored))
    }
}

///
/// Detect regions with default settings and the given contamination fraction.
///
pub fn detect(samples: &[CoverageSample], contamination: f64) -> Result<Vec<IndexedRegion>> {
    let config = DetectorConfig {
        contamination,
        ..Default::default()
    };
    Detector::new(config)?.detect(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::OutlierCall;
    use pretty_assertions::assert_eq;
    use rstest::*;

    /// Flags every value above a fixed threshold.
    struct ThresholdScorer(f64);

    impl OutlierScorer for ThresholdScorer {
        fn score(&self, values: &[f64]) -> Result<Vec<OutlierCall>> {
            Ok(values
                .iter()
                .map(|&v| OutlierCall {
                    is_outlier: v > self.0,
                    score: self.0 - v,
                })
                .collect())
        }
    }

    fn coverage(n: u32, high: &[(u32, u32)]) -> Vec<CoverageSample> {
        (1..=n)
            .map(|p| {
                let is_high = high.iter().any(|&(s, e)| s <= p && p <= e);
                CoverageSample::new(p, if is_high { 500.0 } else { 5.0 })
            })
            .collect()
    }

    fn coords(regions: &[IndexedRegion]) -> Vec<Region> {
        regions.iter().map(|r| r.region).collect()
    }

    #[fixture]
    fn threshold_detector() -> Detector<ThresholdScorer> {
        Detector::with_scorer(DetectorConfig::default(), ThresholdScorer(100.0))
    }

    #[rstest]
    fn test_empty_track_is_invalid_input() {
        assert!(matches!(
            detect(&[], 0.05),
            Err(PosifError::InvalidInput(_))
        ));
    }

    #[rstest]
    fn test_infinite_readcount_is_invalid_input() {
        let mut samples = coverage(30, &[(10, 15)]);
        samples[3].readcount = f64::INFINITY;
        assert!(matches!(
            detect(&samples, 0.2),
            Err(PosifError::InvalidInput(_))
        ));
    }

    #[rstest]
    fn test_short_block_is_filtered_out() {
        // positions 10-15 are the only outliers: run [10, 15] has width 5 < 20
        let samples = coverage(30, &[(10, 15)]);
        let detector = Detector::new(DetectorConfig {
            contamination: 0.2,
            ..Default::default()
        })
        .unwrap();

        let scored = detector.score_samples(&samples).unwrap();
        let flagged: Vec<u32> = scored
            .iter()
            .filter(|s| s.is_outlier)
            .map(|s| s.position)
            .collect();
        assert_eq!(flagged, (10..=15).collect::<Vec<u32>>());

        assert!(detector.detect(&samples).unwrap().is_empty());
    }

    #[rstest]
    fn test_nearby_runs_merge(threshold_detector: Detector<ThresholdScorer>) {
        let samples = coverage(300, &[(100, 140), (143, 160)]);
        let regions = threshold_detector.detect(&samples).unwrap();
        assert_eq!(regions, vec![IndexedRegion::new(0, Region::new(100, 160))]);
    }

    #[rstest]
    fn test_index_survives_length_filter(threshold_detector: Detector<ThresholdScorer>) {
        // [10, 15] is merged region 0 and too short; [100, 160] stays region 1
        let samples = coverage(300, &[(10, 15), (100, 160)]);
        let regions = threshold_detector.detect(&samples).unwrap();
        assert_eq!(regions, vec![IndexedRegion::new(1, Region::new(100, 160))]);
    }

    #[rstest]
    fn test_distant_runs_stay_separate(threshold_detector: Detector<ThresholdScorer>) {
        let samples = coverage(300, &[(100, 140), (150, 190)]);
        let regions = threshold_detector.detect(&samples).unwrap();
        assert_eq!(
            regions,
            vec![
                IndexedRegion::new(0, Region::new(100, 140)),
                IndexedRegion::new(1, Region::new(150, 190)),
            ]
        );
    }

    #[rstest]
    fn test_isolated_outliers_are_ignored(threshold_detector: Detector<ThresholdScorer>) {
        // single positions every 3 bp would merge into a long region if kept
        let spikes: Vec<(u32, u32)> = (10..100).step_by(3).map(|p| (p, p)).collect();
        let samples = coverage(200, &spikes);
        assert!(threshold_detector.detect(&samples).unwrap().is_empty());
    }

    #[rstest]
    fn test_no_outliers_gives_no_regions(threshold_detector: Detector<ThresholdScorer>) {
        let samples = coverage(100, &[]);
        assert!(threshold_detector.detect(&samples).unwrap().is_empty());
    }

    #[rstest]
    fn test_gaps_in_positions_break_runs(threshold_detector: Detector<ThresholdScorer>) {
        // positions jump from 129 to 140: two runs 100-129 and 140-170, gap 11
        let samples: Vec<CoverageSample> = (1..=129u32)
            .chain(140..=300)
            .map(|p| {
                let high = (100..=170).contains(&p);
                CoverageSample::new(p, if high { 500.0 } else { 5.0 })
            })
            .collect();

        let regions = threshold_detector.detect(&samples).unwrap();
        assert_eq!(coords(&regions), vec![Region::new(100, 129), Region::new(140, 170)]);
    }

    #[rstest]
    fn test_scored_samples_keep_input_order(threshold_detector: Detector<ThresholdScorer>) {
        let samples = coverage(10, &[(4, 5)]);
        let scored = threshold_detector.score_samples(&samples).unwrap();

        assert_eq!(scored.len(), samples.len());
        assert_eq!(scored[3].position, 4);
        assert_eq!(scored[3].decision(), -1);
        assert_eq!(scored[0].decision(), 1);
    }

    #[rstest]
    fn test_isolation_forest_finds_long_block() {
        let samples = coverage(200, &[(50, 90)]);
        let regions = detect(&samples, 0.205).unwrap();
        assert_eq!(coords(&regions), vec![Region::new(50, 90)]);
    }
}
