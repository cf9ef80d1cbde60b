use std::fmt::{self, Display};

use crate::consts::INTERGENIC;

/// Where a detected region sits relative to the annotated genes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Intergenic,
    /// Best-matching gene, no strand context requested.
    Gene(String),
    Sense(String),
    Antisense(String),
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Intergenic => write!(f, "{}", INTERGENIC),
            Location::Gene(id) => write!(f, "{}", id),
            Location::Sense(id) => write!(f, "Sense to {}", id),
            Location::Antisense(id) => write!(f, "Antisense to {}", id),
        }
    }
}

///
/// One output row: a detected region and its annotation.
///
/// `location` is `None` when the selected gene's attribute string did not
/// carry a parsable `ID=` field.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRegion {
    pub name: String,
    pub start: u32,
    pub end: u32,
    pub location: Option<Location>,
}

impl AnnotatedRegion {
    /// Location label as written to output files; empty when missing.
    pub fn location_label(&self) -> String {
        self.location
            .as_ref()
            .map_or(String::new(), |l| l.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(Location::Intergenic, "Intergenic")]
    #[case(Location::Gene("geneA".to_string()), "geneA")]
    #[case(Location::Sense("geneA".to_string()), "Sense to geneA")]
    #[case(Location::Antisense("geneA".to_string()), "Antisense to geneA")]
    fn test_location_labels(#[case] location: Location, #[case] expected: &str) {
        assert_eq!(location.to_string(), expected);
    }

    #[rstest]
    fn test_missing_location_label_is_empty() {
        let row = AnnotatedRegion {
            name: "sRNA-0".to_string(),
            start: 1,
            end: 30,
            location: None,
        };
        assert_eq!(row.location_label(), "");
    }
}
