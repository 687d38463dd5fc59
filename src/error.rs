/// Reasons why a distance or spread computation may fail.
///
/// `ZeroMagnitude`, `NonFinite`, `MalformedBatch`, `InvalidRadius` and
/// `InvalidStep` form the invalid-input class; see
/// [`GeodesicError::is_invalid_input`].
#[derive(Clone, Debug, PartialEq)]
pub enum GeodesicError {
    /// A vector has no direction. `row` is set when it came from a batch.
    ZeroMagnitude {
        row: Option<usize>,
    },
    NonFinite {
        row: Option<usize>,
    },
    /// Flat batch data whose length is not a multiple of three.
    MalformedBatch {
        len: usize,
    },
    InvalidRadius {
        radius: f64,
    },
    /// Random-walk step length that is negative or not finite.
    InvalidStep {
        step_size: f64,
    },
    InvalidMode {
        given: String,
    },
    /// A statistic was requested over zero samples.
    EmptyInput,
    Config {
        message: String,
    },
}

impl GeodesicError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GeodesicError::ZeroMagnitude { .. }
                | GeodesicError::NonFinite { .. }
                | GeodesicError::MalformedBatch { .. }
                | GeodesicError::InvalidRadius { .. }
                | GeodesicError::InvalidStep { .. }
        )
    }
}

impl std::fmt::Display for GeodesicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeodesicError::ZeroMagnitude { row: None } => {
                write!(f, "input vectors must be nonzero")
            }
            GeodesicError::ZeroMagnitude { row: Some(row) } => {
                write!(f, "batch row {row} has zero magnitude")
            }
            GeodesicError::NonFinite { row: None } => {
                write!(f, "input vectors must have finite components")
            }
            GeodesicError::NonFinite { row: Some(row) } => {
                write!(f, "batch row {row} has a non-finite component")
            }
            GeodesicError::MalformedBatch { len } => write!(
                f,
                "batch data of length {len} cannot be shaped as N×3"
            ),
            GeodesicError::InvalidRadius { radius } => {
                write!(f, "sphere radius must be finite and positive (got {radius})")
            }
            GeodesicError::InvalidStep { step_size } => write!(
                f,
                "walk step size must be finite and non-negative (got {step_size})"
            ),
            GeodesicError::InvalidMode { given } => write!(
                f,
                "invalid output mode {given:?} (expected 'rad', 'deg' or 'arc')"
            ),
            GeodesicError::EmptyInput => write!(f, "statistic requested over zero samples"),
            GeodesicError::Config { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for GeodesicError {}
