//! qsonar Hardware Abstraction Layer
//!
//! This crate defines the contract between the qsonar engines and whatever
//! executes their circuits: a local statevector simulator, a scripted test
//! double, or a remote service.
//!
//! # Overview
//!
//! - A common [`Backend`] trait: introspection, validation and execution
//! - [`Capabilities`] describing qubit count, gate set and shot limit
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//! - [`BackendConfig`] / [`BackendFactory`] for configuration-driven construction
//!
//! # Bitstring convention
//!
//! Every bitstring in [`Counts`] has one character per classical bit, with
//! the **highest** classical bit leftmost (OpenQASM convention). For a
//! 3-bit register where `c0 = 1`, `c1 = 0`, `c2 = 0` the key is `"001"`.
//! [`Counts::bits_in_register_order`] undoes that rendering.
//!
//! # Implementing a Custom Backend
//!
//! ```ignore
//! use qsonar_hal::{Backend, Capabilities, Counts, ExecutionResult, HalResult};
//! use qsonar_ir::Circuit;
//! use async_trait::async_trait;
//!
//! struct AlwaysZero {
//!     capabilities: Capabilities,
//! }
//!
//! #[async_trait]
//! impl Backend for AlwaysZero {
//!     fn name(&self) -> &str { "always_zero" }
//!
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.capabilities
//!     }
//!
//!     async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
//!         let key = "0".repeat(circuit.num_clbits());
//!         let mut counts = Counts::new();
//!         counts.insert(key, u64::from(shots));
//!         Ok(ExecutionResult::new(counts, shots))
//!     }
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory, ValidationResult};
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use result::{Counts, ExecutionResult};
