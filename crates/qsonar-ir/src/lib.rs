//! qsonar Circuit Model
//!
//! This crate provides the circuit description consumed by every qsonar
//! execution backend. A [`Circuit`] is an append-only log of operations over a
//! fixed qubit register and a fixed classical register; it carries no
//! amplitudes or probabilities and knows nothing about how it will be run.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   the two registers
//! - **Gates**: [`StandardGate`], the closed gate set the engines need
//! - **Instructions**: [`Instruction`] combining a gate or measurement with
//!   its operands
//! - **Circuit**: [`Circuit`], the builder and validated operation log
//!
//! # Example: interaction-free probe
//!
//! ```rust
//! use qsonar_ir::{Circuit, ClbitId, QubitId};
//!
//! let probe = QubitId(0);
//! let target = QubitId(1);
//!
//! let mut circuit = Circuit::with_size("ping", 2, 1);
//! circuit
//!     .h(probe)?
//!     .h(target)?
//!     .cx(probe, target)?
//!     .h(target)?
//!     .h(probe)?
//!     .measure(probe, ClbitId(0))?;
//!
//! assert_eq!(circuit.num_ops(), 6);
//! assert!(circuit.append_subcircuit(&Circuit::with_size("x", 3, 0), &[probe]).is_err());
//! # Ok::<(), qsonar_ir::IrError>(())
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X` | 1 | Pauli-X gate |
//! | `CX` | 2 | Controlled-NOT (control, target) |
//! | `CP(θ)` | 2 | Controlled phase (control, target) |
//! | `Swap` | 2 | SWAP gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Bit, Clbit, ClbitId, Qubit, QubitId, RegisterSlot};
