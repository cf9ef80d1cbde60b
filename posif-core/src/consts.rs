/// Default expected proportion of outlier positions in a coverage track.
pub const DEFAULT_CONTAMINATION: f64 = 0.05;

/// Runs shorter than this are isolated outliers, not candidate regions.
pub const MIN_RUN_LENGTH: usize = 2;

/// Regions separated by at most this many coordinate units are merged.
pub const MERGE_GAP: u32 = 5;

/// Merged regions must satisfy `end - start >= MIN_REGION_LENGTH`.
pub const MIN_REGION_LENGTH: u32 = 20;

/// Feature type retained from the annotation table.
pub const GENE_FEATURE_TYPE: &str = "gene";

pub const INTERGENIC: &str = "Intergenic";

pub const OUTPUT_FILE: &str = "sRNA_output.csv";
pub const FWD_OUTPUT_FILE: &str = "sRNA_fwd_output.csv";
pub const REV_OUTPUT_FILE: &str = "sRNA_rev_output.csv";
