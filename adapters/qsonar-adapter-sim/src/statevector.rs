//! Statevector simulation engine.
//!
//! Amplitude index bit `q` holds the state of qubit `q`. Measurements are
//! deferred to the end of the circuit: the circuit model refuses any operation
//! on a qubit once it has been measured, so sampling the final state is
//! equivalent to collapsing at each `measure`.

use num_complex::Complex64;
use rand::Rng;

use qsonar_ir::{ClbitId, Instruction, InstructionKind, QubitId, StandardGate};

/// Probability mass below which an outcome is treated as impossible.
const EPSILON: f64 = 1e-12;

/// A statevector representing a quantum state.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) {
        let q = |i: usize| instruction.qubits[i].index();
        match &instruction.kind {
            InstructionKind::Gate(gate) => match *gate {
                StandardGate::H => self.apply_h(q(0)),
                StandardGate::X => self.apply_x(q(0)),
                StandardGate::CX => self.apply_cx(q(0), q(1)),
                StandardGate::CP(theta) => self.apply_cp(q(0), q(1), theta),
                StandardGate::Swap => self.apply_swap(q(0), q(1)),
            },
            // Deferred, see module docs.
            InstructionKind::Measure => {}
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..(1 << self.num_qubits) {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cp(&mut self, control: usize, target: usize, theta: f64) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] *= phase;
            }
        }
    }

    /// Sample a basis state.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        let mut last_possible = 0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > EPSILON {
                last_possible = i;
            }
            cumulative += p;
            if r < cumulative && p > EPSILON {
                return i;
            }
        }

        // Rounding left `r` above the accumulated mass.
        last_possible
    }

    /// The basis state with the highest probability, lowest index on ties.
    pub fn most_likely(&self) -> usize {
        let mut best = 0;
        let mut best_p = f64::NEG_INFINITY;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > best_p + EPSILON {
                best = i;
                best_p = p;
            }
        }
        best
    }
}

/// Render a sampled basis state as a classical bitstring.
///
/// Each `(qubit, clbit)` pair copies the qubit's value into that classical
/// bit; unmeasured classical bits read `0`. The highest classical bit is the
/// leftmost character.
pub fn outcome_to_bitstring(
    outcome: usize,
    measurements: &[(QubitId, ClbitId)],
    num_clbits: usize,
) -> String {
    let mut bits = vec![false; num_clbits];
    for (qubit, clbit) in measurements {
        bits[clbit.index()] = outcome & (1 << qubit.index()) != 0;
    }
    bits.iter().rev().map(|&b| if b { '1' } else { '0' }).collect()
}
