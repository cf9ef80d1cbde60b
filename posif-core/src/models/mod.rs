pub mod annotated;
pub mod coverage;
pub mod feature;
pub mod mode;
pub mod region;
pub mod strand;

// re-export for cleaner imports
pub use self::annotated::{AnnotatedRegion, Location};
pub use self::coverage::{CoverageSample, ScoredSample};
pub use self::feature::GeneFeature;
pub use self::mode::{Organism, StrandMode};
pub use self::region::{IndexedRegion, Region};
pub use self::strand::Strand;
