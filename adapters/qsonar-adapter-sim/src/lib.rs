//! qsonar Local Statevector Simulator
//!
//! This crate provides the local backend the sonar engines run against by
//! default. It uses dense statevector simulation, which is exact but limited
//! to ~20 qubits; the sonar circuits use at most four.
//!
//! # Features
//!
//! - **Exact Simulation**: full statevector over the `h`, `x`, `cx`, `cp`,
//!   `swap` gate set
//! - **Measurement Sampling**: per-shot Born-rule sampling, optionally seeded
//! - **Most-likely mode**: every shot reports the most probable outcome
//!
//! # Example
//!
//! ```ignore
//! use qsonar_adapter_sim::SimulatorBackend;
//! use qsonar_hal::Backend;
//! use qsonar_ir::{Circuit, ClbitId, QubitId};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::seeded(42);
//!
//!     let mut circuit = Circuit::with_size("flip", 1, 1);
//!     circuit.x(QubitId(0))?.measure(QubitId(0), ClbitId(0))?;
//!
//!     let result = backend.execute(&circuit, 1).await?;
//!     assert_eq!(result.counts.single_outcome(), Some("1"));
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::{QUBIT_CEILING, SamplingMode, SimulatorBackend};
