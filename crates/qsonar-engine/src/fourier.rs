//! Inverse quantum Fourier transform builder.

use std::f64::consts::PI;

use qsonar_ir::{Circuit, QubitId};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Build the inverse QFT over `n` qubits, with no measurements.
///
/// The gate order is fixed and the counting decode depends on it:
///
/// 1. `swap(i, n-1-i)` for `i` in `0..n/2`, before anything else;
/// 2. for `i` from `n-1` down to `0`: `cp(-π/2^(j-i), j, i)` for `j` from
///    `n-1` down to `i+1`, then `h(i)`.
///
/// Two calls with the same `n` return identical instruction lists.
///
/// # Errors
///
/// Returns [`EngineError::EmptyRegister`] for `n == 0`.
pub fn inverse_qft(n: u32) -> EngineResult<Circuit> {
    if n == 0 {
        return Err(EngineError::EmptyRegister {
            builder: "inverse_qft",
        });
    }

    let mut circuit = Circuit::with_size(format!("iqft_{n}"), n, 0);

    for i in 0..n / 2 {
        circuit.swap(QubitId(i), QubitId(n - 1 - i))?;
    }

    for i in (0..n).rev() {
        for j in ((i + 1)..n).rev() {
            let angle = -PI / f64::from(1u32 << (j - i));
            circuit.cp(angle, QubitId(j), QubitId(i))?;
        }
        circuit.h(QubitId(i))?;
    }

    debug!(n, ops = circuit.num_ops(), "built inverse QFT");
    Ok(circuit)
}
