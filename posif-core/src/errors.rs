use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosifError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required input: {0}")]
    MissingRequiredInput(String),

    #[error("Malformed annotation attribute (expected `ID=<value>;...`): {0}")]
    MalformedAnnotation(String),

    #[error("Error parsing coverage line {line}: {reason}")]
    CoverageParse { line: usize, reason: String },

    #[error("Error parsing feature line {line}: {reason}")]
    FeatureParse { line: usize, reason: String },

    #[error("Unknown organism: {0}")]
    UnknownOrganism(String),

    #[error("Unknown strand mode: {0}")]
    UnknownStrandMode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PosifError>;
