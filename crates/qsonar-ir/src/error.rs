//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building a circuit.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is outside the declared register.
    #[error("Qubit {qubit} not found in circuit with {num_qubits} qubits{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Declared register size.
        num_qubits: usize,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Classical bit index is outside the declared register.
    #[error("Classical bit {clbit} not found in circuit with {num_clbits} bits{}", format_gate_context(.gate_name))]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: ClbitId,
        /// Declared register size.
        num_clbits: usize,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Instruction carries the wrong number of operands.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation or qubit mapping.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Sub-circuit mapping does not cover the sub-circuit's register.
    #[error("Qubit mapping has {got} entries but sub-circuit '{subcircuit}' has {expected} qubits")]
    MappingSizeMismatch {
        /// Name of the inlined circuit.
        subcircuit: String,
        /// Number of qubits in the sub-circuit.
        expected: usize,
        /// Number of entries in the supplied mapping.
        got: usize,
    },

    /// Qubit was already measured; the model forbids mid-circuit reuse.
    #[error("Qubit {qubit} was already measured{}", format_gate_context(.gate_name))]
    QubitAlreadyMeasured {
        /// The measured qubit.
        qubit: QubitId,
        /// Operation that tried to touch it.
        gate_name: Option<String>,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
