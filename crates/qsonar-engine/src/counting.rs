//! Phase-estimation counting scan.
//!
//! Each marked target qubit sits in `|1⟩`, an eigenstate of every controlled
//! phase gate, so the phases kick back onto the counting register. Counting
//! qubit `c` collects `count · 2^(2-c) · π/4`, which makes the register hold
//! the fraction `count / 8` in Fourier form. The inverse QFT turns that into a
//! computational basis state that a single shot reads exactly.

use std::f64::consts::PI;

use qsonar_ir::{Circuit, QubitId};
use tracing::{debug, error};

use crate::decode::decode_register;
use crate::error::{EngineError, EngineResult};
use crate::fourier::inverse_qft;

/// Size of the counting register, qubits `0..3`.
pub const COUNTING_QUBITS: u32 = 3;

/// Number of cells one scan covers, held in qubits `3..7`.
pub const TARGET_QUBITS: u32 = 4;

/// Largest count a scan can report.
pub const MAX_COUNT: u8 = TARGET_QUBITS as u8;

/// Phase angle controlled by counting qubit `c`.
///
/// Counting qubit 0 holds the highest-order output bit, so its power of two
/// is the largest.
pub fn kickback_angle(c: u32) -> f64 {
    let power = COUNTING_QUBITS - 1 - c;
    f64::from(1u32 << power) * (PI / 4.0)
}

/// Build the counting circuit for one row or column.
///
/// # Errors
///
/// [`EngineError::InvalidTargetCount`] unless `targets` has exactly four
/// entries.
pub fn counting_circuit(targets: &[bool]) -> EngineResult<Circuit> {
    if targets.len() != TARGET_QUBITS as usize {
        return Err(EngineError::InvalidTargetCount {
            expected: TARGET_QUBITS as usize,
            got: targets.len(),
        });
    }

    let mut circuit = Circuit::new("counting_scan");
    let counting = circuit.add_qreg("count", COUNTING_QUBITS);
    let cells = circuit.add_qreg("target", TARGET_QUBITS);
    let readout = circuit.add_creg("count", COUNTING_QUBITS);

    let marked: Vec<QubitId> = cells
        .iter()
        .zip(targets)
        .filter(|&(_, &present)| present)
        .map(|(&q, _)| q)
        .collect();

    for &t in &marked {
        circuit.x(t)?;
    }

    for &c in &counting {
        circuit.h(c)?;
    }

    for (i, &c) in counting.iter().enumerate() {
        let angle = kickback_angle(i as u32);
        for &t in &marked {
            circuit.cp(angle, c, t)?;
        }
    }

    circuit.append_subcircuit(&inverse_qft(COUNTING_QUBITS)?, &counting)?;

    for (&q, &c) in counting.iter().zip(&readout) {
        circuit.measure(q, c)?;
    }

    debug!(
        marked = marked.len(),
        ops = circuit.num_ops(),
        depth = circuit.depth(),
        "built counting circuit"
    );
    Ok(circuit)
}

/// Decode a counting-register bitstring into a count.
///
/// # Errors
///
/// [`EngineError::CountOutOfRange`] for values above four. They cannot come
/// from a correct backend, so the value is logged and never clamped.
pub fn decode_scan(bitstring: &str) -> EngineResult<u8> {
    let count = decode_register(bitstring)?;
    match u8::try_from(count) {
        Ok(n) if n <= MAX_COUNT => Ok(n),
        _ => {
            error!(bitstring, count, "counting register decoded out of range");
            Err(EngineError::CountOutOfRange {
                count,
                max: MAX_COUNT,
            })
        }
    }
}
