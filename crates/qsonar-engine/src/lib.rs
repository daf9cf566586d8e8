//! qsonar Sonar Engines
//!
//! The two measurement-encoding engines behind the game's hit/miss oracle:
//!
//! - [`SonarEngine::ping`] runs the interaction-free test on one cell and
//!   returns `0` (empty) or `1` (occupied);
//! - [`SonarEngine::count_scan`] runs phase estimation over four cells and
//!   returns how many are occupied without revealing which.
//!
//! Both build a fresh circuit per call, execute it once with a single shot on
//! the injected [`Backend`], and decode the one outcome. The engine keeps no
//! state between calls, so one instance can be shared behind an [`Arc`] by any
//! number of tasks.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use qsonar_adapter_sim::SimulatorBackend;
//! use qsonar_engine::SonarEngine;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = SonarEngine::new(Arc::new(SimulatorBackend::new()));
//!     assert_eq!(engine.ping(true).await?, 1);
//!     assert_eq!(engine.count_scan(&[true, false, true, true]).await?, 3);
//!     Ok(())
//! }
//! ```

pub mod counting;
pub mod decode;
pub mod error;
pub mod fourier;
pub mod ping;

use std::sync::Arc;

use qsonar_hal::Backend;
use qsonar_ir::Circuit;
use tracing::{debug, instrument};

pub use counting::{COUNTING_QUBITS, MAX_COUNT, TARGET_QUBITS, counting_circuit};
pub use error::{EngineError, EngineResult};
pub use fourier::inverse_qft;
pub use ping::ping_circuit;

/// Every engine circuit is deterministic, so one shot is enough.
pub const SHOTS: u32 = 1;

/// Ping and counting scan over a shared backend.
#[derive(Clone)]
pub struct SonarEngine {
    backend: Arc<dyn Backend>,
}

impl SonarEngine {
    /// Create an engine executing on `backend`.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// The backend circuits are sent to.
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Probe one cell: `1` if `target_present`, otherwise `0`.
    ///
    /// # Errors
    ///
    /// Backend failures are returned as [`EngineError::Execution`] and an
    /// unreadable outcome as [`EngineError::MalformedOutcome`].
    #[instrument(skip(self))]
    pub async fn ping(&self, target_present: bool) -> EngineResult<u8> {
        let circuit = ping_circuit(target_present)?;
        let bitstring = self.run_single_shot(&circuit).await?;
        let bit = ping::decode_ping(&bitstring)?;
        debug!(bit, "ping decoded");
        Ok(bit)
    }

    /// Count the occupied cells among exactly four.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTargetCount`] unless `targets.len() == 4`, plus
    /// the failures of [`SonarEngine::ping`] and
    /// [`EngineError::CountOutOfRange`] for a count the circuit cannot
    /// produce.
    #[instrument(skip(self))]
    pub async fn count_scan(&self, targets: &[bool]) -> EngineResult<u8> {
        let circuit = counting_circuit(targets)?;
        let bitstring = self.run_single_shot(&circuit).await?;
        let count = counting::decode_scan(&bitstring)?;
        debug!(count, %bitstring, "scan decoded");
        Ok(count)
    }

    async fn run_single_shot(&self, circuit: &Circuit) -> EngineResult<String> {
        let result = self.backend.execute(circuit, SHOTS).await?;
        let bitstring = decode::single_outcome(&result, circuit.name(), circuit.num_clbits())?;
        Ok(bitstring.to_string())
    }
}

impl std::fmt::Debug for SonarEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SonarEngine")
            .field("backend", &self.backend.name())
            .finish()
    }
}
