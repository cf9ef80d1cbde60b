//! Merging and length filtering of candidate regions.

use posif_core::models::{IndexedRegion, Region};

/// Region list operations used after runs have been turned into regions.
///
/// Both functions return new vectors and leave `self` untouched.
pub trait RegionMerging {
    /// Merge regions that lie within `gap` coordinate units of each other.
    ///
    /// Single sweep in input order: when `next.start - current.end <= gap`
    /// the current merged region's end becomes `next.end`, otherwise `next`
    /// opens a new merged region. Merged regions are not re-scanned.
    ///
    /// # Example
    /// ```text
    /// gap: 5
    /// in:  [100, 140] [143, 160] [200, 230]
    /// out: [100, 160] [200, 230]
    /// ```
    fn merge_within(&self, gap: u32) -> Vec<Region>;

    /// Keep regions with `end - start >= min_length`, each tagged with its
    /// index in `self`.
    fn filter_min_length(&self, min_length: u32) -> Vec<IndexedRegion>;
}

impl RegionMerging for [Region] {
    fn merge_within(&self, gap: u32) -> Vec<Region> {
        let mut merged: Vec<Region> = Vec::with_capacity(self.len());

        for region in self {
            match merged.last_mut() {
                Some(current) if i64::from(region.start) - i64::from(current.end) <= i64::from(gap) => {
                    current.end = region.end;
                }
                _ => merged.push(*region),
            }
        }

        merged
    }

    fn filter_min_length(&self, min_length: u32) -> Vec<IndexedRegion> {
        self.iter()
            .enumerate()
            .filter(|(_, r)| i64::from(r.end) - i64::from(r.start) >= i64::from(min_length))
            .map(|(i, r)| IndexedRegion::new(i, *r))
            .collect()
    }
}
