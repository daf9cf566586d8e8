//! Interaction-free sonar ping.
//!
//! The probe qubit is put in superposition and entangled with the target cell
//! qubit through a CNOT. An occupied cell is prepared as `|1⟩`, which the
//! surrounding Hadamards turn into `|−⟩`; the CNOT then kicks a phase back
//! onto the probe and the final Hadamard maps it to `|1⟩`. An empty cell
//! leaves the probe's two Hadamards to cancel, so it reads `0`.
//!
//! This is a deterministic stand-in for the Elitzur–Vaidman bomb tester,
//! which in its physical form succeeds only with some probability.

use qsonar_ir::{Circuit, ClbitId, QubitId};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Probe qubit, measured into classical bit 0.
pub const PROBE: QubitId = QubitId(0);

/// Target cell qubit.
pub const TARGET: QubitId = QubitId(1);

/// Build the ping circuit for one cell.
pub fn ping_circuit(target_present: bool) -> EngineResult<Circuit> {
    let mut circuit = Circuit::with_size("sonar_ping", 2, 1);

    if target_present {
        circuit.x(TARGET)?;
    }
    circuit
        .h(PROBE)?
        .h(TARGET)?
        .cx(PROBE, TARGET)?
        .h(TARGET)?
        .h(PROBE)?
        .measure(PROBE, ClbitId(0))?;

    debug!(target_present, ops = circuit.num_ops(), "built ping circuit");
    Ok(circuit)
}

/// Read the probe bit out of a one-bit outcome.
pub fn decode_ping(bitstring: &str) -> EngineResult<u8> {
    match bitstring {
        "0" => Ok(0),
        "1" => Ok(1),
        _ => Err(EngineError::MalformedOutcome {
            circuit: "sonar_ping".into(),
            reason: format!("'{bitstring}' is not a single bit"),
        }),
    }
}
