//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The unitary gates a qsonar circuit may contain.
///
/// Angles are radians. Two-qubit gates take their operands as
/// `(control, target)`; for [`StandardGate::Swap`] the order is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled phase gate: `|11⟩ → e^{iθ}|11⟩`.
    CP(f64),
    /// SWAP gate.
    Swap,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::CX => "cx",
            StandardGate::CP(_) => "cp",
            StandardGate::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H | StandardGate::X => 1,
            StandardGate::CX | StandardGate::CP(_) | StandardGate::Swap => 2,
        }
    }

    /// Rotation angle, for parameterized gates.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::CP(theta) => Some(*theta),
            _ => None,
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(theta) => write!(f, "{}({theta:.6})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}
