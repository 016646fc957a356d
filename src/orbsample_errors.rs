use thiserror::Error;

/// Broad family an [`OrbSampleError`] belongs to.
///
/// Definition errors are raised before any sample is produced, computation
/// errors while propagating, and I/O errors while reading or writing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Definition,
    Computation,
    Io,
}

#[derive(Error, Debug)]
pub enum OrbSampleError {
    #[error("Invalid orbit definition: {0}")]
    InvalidOrbitDefinition(String),

    #[error("Unknown attractor: {0}")]
    UnknownAttractor(String),

    #[error("Invalid gravitational parameter for {name}: {mu}")]
    InvalidGravitationalParameter { name: String, mu: f64 },

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("Duplicate orbit name in catalog: {0}")]
    DuplicateOrbitName(String),

    #[error("Unable to parse orbit catalog: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    #[error("Kepler equation did not converge: {0}")]
    KeplerNonConvergence(#[from] roots::SearchError),

    #[error("Propagation by {seconds} s produced a non-finite state")]
    NonFiniteState { seconds: f64 },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed position row at line {line}: {reason}")]
    MalformedPositionRow { line: u64, reason: String },

    #[error("Files contain different numbers of records a: {left} b: {right}")]
    RecordCountMismatch { left: usize, right: usize },

    #[error("Unable to install the log subscriber: {0}")]
    LoggingInit(String),
}

impl OrbSampleError {
    pub fn category(&self) -> ErrorCategory {
        use OrbSampleError::*;
        match self {
            InvalidOrbitDefinition(_)
            | UnknownAttractor(_)
            | InvalidGravitationalParameter { .. }
            | InvalidEpoch(_)
            | DuplicateOrbitName(_)
            | CatalogParse(_) => ErrorCategory::Definition,

            KeplerNonConvergence(_) | NonFiniteState { .. } => ErrorCategory::Computation,

            IoError(_)
            | CsvError(_)
            | MalformedPositionRow { .. }
            | RecordCountMismatch { .. }
            | LoggingInit(_) => ErrorCategory::Io,
        }
    }
}

impl PartialEq for OrbSampleError {
    fn eq(&self, other: &Self) -> bool {
        use OrbSampleError::*;
        match (self, other) {
            (InvalidOrbitDefinition(a), InvalidOrbitDefinition(b)) => a == b,
            (UnknownAttractor(a), UnknownAttractor(b)) => a == b,
            (
                InvalidGravitationalParameter { name: a, mu: ma },
                InvalidGravitationalParameter { name: b, mu: mb },
            ) => a == b && ma.to_bits() == mb.to_bits(),
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,
            (DuplicateOrbitName(a), DuplicateOrbitName(b)) => a == b,
            (KeplerNonConvergence(a), KeplerNonConvergence(b)) => a == b,
            (NonFiniteState { seconds: a }, NonFiniteState { seconds: b }) => {
                a.to_bits() == b.to_bits()
            }
            (
                MalformedPositionRow { line: la, reason: ra },
                MalformedPositionRow { line: lb, reason: rb },
            ) => la == lb && ra == rb,
            (
                RecordCountMismatch { left: la, right: ra },
                RecordCountMismatch { left: lb, right: rb },
            ) => la == lb && ra == rb,
            (LoggingInit(a), LoggingInit(b)) => a == b,

            // foreign payloads are not comparable: same variant means equal
            (CatalogParse(_), CatalogParse(_)) => true,
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
