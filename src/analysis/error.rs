use std::fmt;

use super::param::ParamId;

/// Error type for the dimensional analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No parameters to analyse.
    EmptyParameterList,
    /// A repeating or dependent handle does not belong to the parameter set.
    UnknownParam { id: ParamId },
    /// No subset of the candidate pool forms a valid repeating set.
    SearchExhausted { required: usize, pool: usize },
    /// The group matrix for `param` does not have exactly one null direction.
    DegenerateNullSpace { param: String, dimension: usize },
    /// The null vector for `param` has no non-zero component.
    ZeroExponents { param: String },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyParameterList => write!(f, "parameter list is empty"),
            AnalysisError::UnknownParam { id } => {
                write!(f, "parameter {} is not part of the parameter list", id)
            }
            AnalysisError::SearchExhausted { required, pool } => write!(
                f,
                "no valid set of {} repeating parameters among {} candidates",
                required, pool
            ),
            AnalysisError::DegenerateNullSpace { param, dimension } => write!(
                f,
                "null space for '{}' has dimension {}, expected 1",
                param, dimension
            ),
            AnalysisError::ZeroExponents { param } => {
                write!(f, "all exponents for '{}' vanished", param)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
