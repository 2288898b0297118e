//! Error types for puzzle generation and I/O operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A grid violated the Latin-square contract
    InvalidGrid {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// A cage violated its construction contract
    ///
    /// Covers operator arity (no operator on multi-cell cages, subtraction
    /// outside pairs), duplicate or out-of-bounds cells, and cage sets that
    /// fail to partition the grid exactly.
    InvalidCage {
        /// Description of the violated contract
        reason: String,
    },

    /// Numerical computation produced an out-of-range result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// The uniqueness search exhausted its node budget
    ///
    /// The verdict is indeterminate; callers treat this as a signal to
    /// discard the attempt and retry, never as a fatal condition.
    SolverBudget {
        /// Nodes explored before the search was abandoned
        nodes: u64,
    },

    /// Every generation attempt was discarded without a unique puzzle
    GenerationFailed {
        /// Number of attempts exhausted
        attempts: usize,
        /// Requested grid size
        size: usize,
    },

    /// Failed to serialize a puzzle to JSON
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid grid: {reason}")
            }
            Self::InvalidCage { reason } => {
                write!(f, "Invalid cage: {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::SolverBudget { nodes } => {
                write!(f, "Solver search budget exhausted after {nodes} nodes")
            }
            Self::GenerationFailed { attempts, size } => {
                write!(
                    f,
                    "Failed to generate a unique {size}x{size} puzzle after {attempts} attempts"
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize puzzle: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<serde_json::Error> for PuzzleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid grid error
pub fn invalid_grid(reason: impl Into<String>) -> PuzzleError {
    PuzzleError::InvalidGrid {
        reason: reason.into(),
    }
}

/// Create an invalid cage error
pub fn invalid_cage(reason: impl Into<String>) -> PuzzleError {
    PuzzleError::InvalidCage {
        reason: reason.into(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
