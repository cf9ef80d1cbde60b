use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::PosifError;

///
/// Organisms with a bundled annotation table.
///
/// Each organism maps to `<annotations_dir>/<display name>.gff`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Organism {
    BacillusSubtilis168,
    ClostridiumDifficileS0253,
    EscherichiaColiK12,
    ListeriaMonocytogenesEgdE,
    MycobacteriumTuberculosisH37Rv,
    PseudomonasAeruginosaPao1,
    SalmonellaEntericaLt2,
    StaphylococcusAureusNctc8325,
    StreptococcusPneumoniaeHu17,
    VibrioCholeraeRfb16,
}

impl Organism {
    pub const ALL: [Organism; 10] = [
        Organism::BacillusSubtilis168,
        Organism::ClostridiumDifficileS0253,
        Organism::EscherichiaColiK12,
        Organism::ListeriaMonocytogenesEgdE,
        Organism::MycobacteriumTuberculosisH37Rv,
        Organism::PseudomonasAeruginosaPao1,
        Organism::SalmonellaEntericaLt2,
        Organism::StaphylococcusAureusNctc8325,
        Organism::StreptococcusPneumoniaeHu17,
        Organism::VibrioCholeraeRfb16,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Organism::BacillusSubtilis168 => "Bacillus subtilis 168",
            Organism::ClostridiumDifficileS0253 => "Clostridium difficile S-0253",
            Organism::EscherichiaColiK12 => "Escherichia coli K-12",
            Organism::ListeriaMonocytogenesEgdE => "Listeria monocytogenes EGD-e",
            Organism::MycobacteriumTuberculosisH37Rv => "Mycobacterium tuberculosis H37Rv",
            Organism::PseudomonasAeruginosaPao1 => "Pseudomonas aeruginosa PAO1",
            Organism::SalmonellaEntericaLt2 => "Salmonella enterica LT2",
            Organism::StaphylococcusAureusNctc8325 => "Staphylococcus aureus NCTC 8325",
            Organism::StreptococcusPneumoniaeHu17 => "Streptococcus pneumoniae Hu17",
            Organism::VibrioCholeraeRfb16 => "Vibrio cholerae RFB16",
        }
    }

    ///
    /// Path of the organism's annotation table inside `annotations_dir`.
    ///
    pub fn annotation_path<P: AsRef<Path>>(&self, annotations_dir: P) -> PathBuf {
        annotations_dir
            .as_ref()
            .join(format!("{}.gff", self.name()))
    }
}

impl FromStr for Organism {
    type Err = PosifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Organism::ALL
            .iter()
            .find(|o| o.name() == s)
            .copied()
            .ok_or_else(|| PosifError::UnknownOrganism(s.to_string()))
    }
}

impl Display for Organism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether coverage was collected per strand or as one combined track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrandMode {
    StrandSpec,
    NonStrandSpec,
}

impl FromStr for StrandMode {
    type Err = PosifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strand_spec" => Ok(StrandMode::StrandSpec),
            "non_strand_spec" => Ok(StrandMode::NonStrandSpec),
            _ => Err(PosifError::UnknownStrandMode(s.to_string())),
        }
    }
}

impl Display for StrandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrandMode::StrandSpec => write!(f, "strand_spec"),
            StrandMode::NonStrandSpec => write!(f, "non_strand_spec"),
        }
    }
}
