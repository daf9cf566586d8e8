//! Error types for the sonar engines.

use qsonar_hal::HalError;
use qsonar_ir::IrError;
use thiserror::Error;

/// Errors returned by the ping and counting scan engines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// A circuit could not be built. Engine code only triggers this through a
    /// construction defect.
    #[error("Circuit construction failed: {0}")]
    Circuit(#[from] IrError),

    /// The backend could not execute the circuit.
    #[error("Execution failed: {0}")]
    Execution(#[from] HalError),

    /// The counting scan was given the wrong number of targets.
    #[error("Counting scan needs exactly {expected} targets, got {got}")]
    InvalidTargetCount { expected: usize, got: usize },

    /// A register of size zero was requested.
    #[error("'{builder}' needs at least one qubit")]
    EmptyRegister { builder: &'static str },

    /// The backend returned something other than one well-formed bitstring.
    #[error("Malformed outcome from '{circuit}': {reason}")]
    MalformedOutcome { circuit: String, reason: String },

    /// The decoded count lies outside what four targets can produce.
    #[error("Decoded count {count} is outside 0..={max}")]
    CountOutOfRange { count: u64, max: u8 },
}

impl EngineError {
    /// Whether the error was caused by the caller's input rather than by the
    /// backend or a defect in circuit construction.
    pub fn is_rejected_request(&self) -> bool {
        matches!(self, EngineError::InvalidTargetCount { .. })
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
