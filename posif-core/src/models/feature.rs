use once_cell::sync::Lazy;
use regex::Regex;
use crate::errors::{PosifError, Result};
use crate::models::{Region, Strand};

static GENE_ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ID=([^;]*);.*$").unwrap());

///
/// One `gene` row of a GFF-like annotation table.
///
/// `attributes` is column 9 kept verbatim; the gene identifier is only
/// extracted when a feature is actually selected as a region's best match.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneFeature {
    pub start: u32,
    pub end: u32,
    pub strand: Strand,
    pub attributes: String,
}

impl GeneFeature {
    pub fn new(start: u32, end: u32, strand: Strand, attributes: &str) -> Self {
        GeneFeature {
            start,
            end,
            strand,
            attributes: attributes.to_string(),
        }
    }

    ///
    /// Extract the gene identifier from an attribute string of the form
    /// `ID=<value>;...`.
    ///
    /// The attribute must start with `ID=` and the value must be terminated by
    /// a `;`. Anything else is a [PosifError::MalformedAnnotation].
    ///
    pub fn gene_id(&self) -> Result<&str> {
        GENE_ID_PATTERN
            .captures(&self.attributes)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| PosifError::MalformedAnnotation(self.attributes.clone()))
    }

    ///
    /// Check whether this feature overlaps a region.
    ///
    /// A feature overlaps when either of its ends lies strictly inside
    /// `(region.start, region.end)`, or when it strictly contains the region.
    /// Features sharing exactly one boundary with the region do not count.
    ///
    #[inline]
    pub fn overlaps(&self, region: &Region) -> bool {
        let strictly_inside = |x: u32| region.start < x && x < region.end;
        strictly_inside(self.start)
            || strictly_inside(self.end)
            || (self.start < region.start && region.end < self.end)
    }

    /// Compute the intersect between this feature and a region.
    #[inline]
    pub fn intersect(&self, region: &Region) -> i64 {
        i64::from(self.end.min(region.end)) - i64::from(self.start.max(region.start))
    }
}
