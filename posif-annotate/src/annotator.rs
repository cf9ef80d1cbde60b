use log::{info, warn};

use posif_core::models::{AnnotatedRegion, GeneFeature, IndexedRegion, Strand};

use crate::matcher::GeneMatcher;

///
/// Output name of the `index`-th region of a track.
///
/// `sRNA-{index}` without strand context, `Fwd-sRNA-{index}` for the forward
/// track and `Rev-sRNA-{index}` for the reverse track.
///
pub fn region_name(index: usize, strand: Option<Strand>) -> String {
    match strand {
        None | Some(Strand::Unstranded) => format!("sRNA-{}", index),
        Some(Strand::Plus) => format!("Fwd-sRNA-{}", index),
        Some(Strand::Minus) => format!("Rev-sRNA-{}", index),
    }
}

///
/// Annotate every region against the gene table.
///
/// One row per region, same order, named after the region's index. A region
/// whose best gene carries a malformed attribute gets no location; the
/// remaining regions are still annotated.
///
/// # Arguments
/// - regions: detected regions of one track
/// - features: gene table, shared read-only
/// - strand: strand of the track, `None` for unstranded data
///
pub fn annotate(
    regions: &[IndexedRegion],
    features: &[GeneFeature],
    strand: Option<Strand>,
) -> Vec<AnnotatedRegion> {
    // an unstranded request carries no strand context
    let strand = strand.filter(|s| *s != Strand::Unstranded);
    let matcher = GeneMatcher::new(features);

    let rows: Vec<AnnotatedRegion> = regions
        .iter()
        .map(|indexed| {
            let region = &indexed.region;
            let name = region_name(indexed.index, strand);
            let location = match matcher.locate(region, strand) {
                Ok(location) => Some(location),
                Err(e) => {
                    warn!("{} ({}-{}): {}", name, region.start, region.end, e);
                    None
                }
            };
            AnnotatedRegion {
                name,
                start: region.start,
                end: region.end,
                location,
            }
        })
        .collect();

    info!(
        "Annotated {} regions ({} without location)",
        rows.len(),
        rows.iter().filter(|r| r.location.is_none()).count()
    );

    rows
}
