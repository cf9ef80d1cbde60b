use posif_core::models::{GeneFeature, Location, Region, Strand};
use posif_core::Result;

use crate::MIN_SINGLE_OVERLAP_PERCENT;

///
/// Percentage of `region` covered by `feature`.
///
/// A zero-width region can only overlap a feature by being strictly inside
/// it, so it counts as fully covered.
///
pub fn overlap_percent(feature: &GeneFeature, region: &Region) -> f64 {
    let width = region.width();
    if width == 0 {
        return 100.0;
    }
    100.0 * feature.intersect(region) as f64 / f64::from(width)
}

///
/// Read-only view over a gene table that resolves regions to locations.
///
/// The matcher borrows the table, so one table can back any number of
/// matchers, including ones used from different threads.
///
pub struct GeneMatcher<'a> {
    features: &'a [GeneFeature],
}

impl<'a> GeneMatcher<'a> {
    pub fn new(features: &'a [GeneFeature]) -> Self {
        GeneMatcher { features }
    }

    /// Features overlapping `region` with their overlap percentage, in table order.
    pub fn candidates(&self, region: &Region) -> Vec<(usize, f64)> {
        self.features
            .iter()
            .enumerate()
            .filter(|(_, f)| f.overlaps(region))
            .map(|(i, f)| (i, overlap_percent(f, region)))
            .collect()
    }

    ///
    /// Find the location of `region` relative to the gene table.
    ///
    /// Among overlapping genes the one with the largest overlap percentage
    /// wins. When several genes tie and a strand is requested, the first of
    /// the first two tied genes on that strand is preferred, falling back to
    /// the first tied gene. A single best gene covering less than half of
    /// the region is not a match. Ties are always a match, however small.
    ///
    /// # Arguments
    /// - region: detected region
    /// - strand: strand of the coverage track, `None` for unstranded data
    ///
    /// # Errors
    /// [`PosifError::MalformedAnnotation`](posif_core::PosifError::MalformedAnnotation)
    /// when the selected gene has no `ID=<value>;` attribute.
    ///
    pub fn locate(&self, region: &Region, strand: Option<Strand>) -> Result<Location> {
        let candidates = self.candidates(region);
        if candidates.is_empty() {
            return Ok(Location::Intergenic);
        }

        let max_overlap = candidates
            .iter()
            .map(|&(_, pct)| pct)
            .fold(f64::NEG_INFINITY, f64::max);
        let tied: Vec<usize> = candidates
            .iter()
            .filter(|&&(_, pct)| pct == max_overlap)
            .map(|&(i, _)| i)
            .collect();

        // only the first two tied genes are consulted
        let selected = match strand {
            Some(s) if tied.len() > 1 => {
                if self.features[tied[0]].strand == s {
                    tied[0]
                } else if self.features[tied[1]].strand == s {
                    tied[1]
                } else {
                    tied[0]
                }
            }
            _ => tied[0],
        };

        if tied.len() == 1 && max_overlap < MIN_SINGLE_OVERLAP_PERCENT {
            return Ok(Location::Intergenic);
        }

        let feature = &self.features[selected];
        let gene_id = feature.gene_id()?.to_string();

        Ok(match strand {
            None => Location::Gene(gene_id),
            Some(s) if feature.strand == s => Location::Sense(gene_id),
            Some(_) => Location::Antisense(gene_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posif_core::PosifError;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn gene_a() -> Vec<GeneFeature> {
        vec![GeneFeature::new(50, 150, Strand::Plus, "ID=geneA;note=x")]
    }

    #[rstest]
    #[case(None, Location::Gene("geneA".to_string()))]
    #[case(Some(Strand::Plus), Location::Sense("geneA".to_string()))]
    #[case(Some(Strand::Minus), Location::Antisense("geneA".to_string()))]
    fn test_region_inside_single_gene(
        gene_a: Vec<GeneFeature>,
        #[case] strand: Option<Strand>,
        #[case] expected: Location,
    ) {
        let matcher = GeneMatcher::new(&gene_a);
        let location = matcher.locate(&Region::new(60, 140), strand).unwrap();
        assert_eq!(location, expected);
    }

    #[rstest]
    fn test_no_overlap_is_intergenic(gene_a: Vec<GeneFeature>) {
        let matcher = GeneMatcher::new(&gene_a);
        for strand in [None, Some(Strand::Plus), Some(Strand::Minus)] {
            let location = matcher.locate(&Region::new(200, 260), strand).unwrap();
            assert_eq!(location, Location::Intergenic);
        }
    }

    #[rstest]
    fn test_empty_table_is_intergenic() {
        let matcher = GeneMatcher::new(&[]);
        assert_eq!(
            matcher.locate(&Region::new(1, 100), None).unwrap(),
            Location::Intergenic
        );
    }

    #[rstest]
    fn test_weak_single_overlap_is_intergenic() {
        // gene covers 40 of the region's 100 units
        let genes = vec![GeneFeature::new(160, 300, Strand::Plus, "ID=geneB;")];
        let matcher = GeneMatcher::new(&genes);
        let location = matcher.locate(&Region::new(100, 200), Some(Strand::Plus)).unwrap();
        assert_eq!(location, Location::Intergenic);
    }

    #[rstest]
    fn test_exactly_half_overlap_matches() {
        let genes = vec![GeneFeature::new(150, 300, Strand::Plus, "ID=geneB;")];
        let matcher = GeneMatcher::new(&genes);
        let location = matcher.locate(&Region::new(100, 200), None).unwrap();
        assert_eq!(location, Location::Gene("geneB".to_string()));
    }

    #[rstest]
    fn test_weak_tied_overlap_still_matches() {
        // two genes each covering 30% of the region
        let genes = vec![
            GeneFeature::new(10, 130, Strand::Plus, "ID=left;"),
            GeneFeature::new(170, 300, Strand::Minus, "ID=right;"),
        ];
        let matcher = GeneMatcher::new(&genes);
        let location = matcher.locate(&Region::new(100, 200), Some(Strand::Minus)).unwrap();
        assert_eq!(location, Location::Sense("right".to_string()));
    }

    #[rstest]
    fn test_best_overlap_wins() {
        let genes = vec![
            GeneFeature::new(10, 120, Strand::Plus, "ID=small;"),
            GeneFeature::new(130, 300, Strand::Plus, "ID=large;"),
        ];
        let matcher = GeneMatcher::new(&genes);
        let location = matcher.locate(&Region::new(100, 200), None).unwrap();
        assert_eq!(location, Location::Gene("large".to_string()));
    }

    #[rstest]
    #[case(Some(Strand::Plus), Location::Sense("plus".to_string()))]
    #[case(Some(Strand::Minus), Location::Sense("minus".to_string()))]
    #[case(None, Location::Gene("plus".to_string()))]
    fn test_tie_prefers_requested_strand(#[case] strand: Option<Strand>, #[case] expected: Location) {
        let genes = vec![
            GeneFeature::new(10, 300, Strand::Plus, "ID=plus;"),
            GeneFeature::new(20, 400, Strand::Minus, "ID=minus;"),
        ];
        let matcher = GeneMatcher::new(&genes);
        assert_eq!(matcher.locate(&Region::new(100, 200), strand).unwrap(), expected);
    }

    #[rstest]
    fn test_tie_only_consults_first_two() {
        // the third tied gene is on the requested strand but is never looked at
        let genes = vec![
            GeneFeature::new(10, 300, Strand::Plus, "ID=first;"),
            GeneFeature::new(20, 300, Strand::Plus, "ID=second;"),
            GeneFeature::new(30, 300, Strand::Minus, "ID=third;"),
        ];
        let matcher = GeneMatcher::new(&genes);
        let location = matcher.locate(&Region::new(100, 200), Some(Strand::Minus)).unwrap();
        assert_eq!(location, Location::Antisense("first".to_string()));
    }

    #[rstest]
    fn test_unstranded_gene_is_antisense() {
        let genes = vec![GeneFeature::new(50, 150, Strand::Unstranded, "ID=geneU;")];
        let matcher = GeneMatcher::new(&genes);
        let location = matcher.locate(&Region::new(60, 140), Some(Strand::Plus)).unwrap();
        assert_eq!(location, Location::Antisense("geneU".to_string()));
    }

    #[rstest]
    fn test_malformed_attribute_is_an_error() {
        let genes = vec![GeneFeature::new(50, 150, Strand::Plus, "Parent=x;")];
        let matcher = GeneMatcher::new(&genes);
        assert!(matches!(
            matcher.locate(&Region::new(60, 140), None),
            Err(PosifError::MalformedAnnotation(_))
        ));
    }

    #[rstest]
    fn test_malformed_attribute_ignored_when_not_selected() {
        let genes = vec![
            GeneFeature::new(50, 90, Strand::Plus, "Parent=x;"),
            GeneFeature::new(80, 150, Strand::Plus, "ID=good;"),
        ];
        let matcher = GeneMatcher::new(&genes);
        let location = matcher.locate(&Region::new(60, 140), None).unwrap();
        assert_eq!(location, Location::Gene("good".to_string()));
    }

    #[rstest]
    #[case(GeneFeature::new(50, 150, Strand::Plus, "ID=a;"), 100.0)]
    #[case(GeneFeature::new(100, 150, Strand::Plus, "ID=a;"), 50.0)]
    #[case(GeneFeature::new(70, 80, Strand::Plus, "ID=a;"), 12.5)]
    fn test_overlap_percent(#[case] feature: GeneFeature, #[case] expected: f64) {
        assert_eq!(overlap_percent(&feature, &Region::new(60, 140)), expected);
    }

    #[rstest]
    fn test_zero_width_region_inside_gene() {
        let genes = vec![GeneFeature::new(50, 150, Strand::Minus, "ID=geneZ;")];
        let matcher = GeneMatcher::new(&genes);
        let location = matcher.locate(&Region::new(100, 100), Some(Strand::Minus)).unwrap();
        assert_eq!(location, Location::Sense("geneZ".to_string()));
    }
}
