//! Simulator backend implementation.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, instrument};

use qsonar_hal::{
    Backend, BackendConfig, BackendFactory, Capabilities, Counts, ExecutionResult, HalError,
    HalResult,
};
use qsonar_ir::{Circuit, ClbitId, QubitId};

use crate::statevector::{Statevector, outcome_to_bitstring};

/// Default qubit limit, far above anything the sonar circuits need.
const DEFAULT_MAX_QUBITS: u32 = 20;

/// Widest register the dense statevector will ever allocate (2^24 amplitudes,
/// 256 MiB).
pub const QUBIT_CEILING: u32 = 24;

/// How the simulator turns a final state into shot outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Draw each shot from the Born distribution.
    #[default]
    Random,
    /// Report the most probable basis state for every shot.
    MostLikely,
}

impl FromStr for SamplingMode {
    type Err = HalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "most_likely" => Ok(Self::MostLikely),
            other => Err(HalError::Configuration(format!(
                "unknown sampling mode '{other}', expected 'random' or 'most_likely'"
            ))),
        }
    }
}

/// Local simulator backend.
///
/// This backend simulates circuits with a dense statevector, so it is limited
/// to roughly 20 qubits by memory. Executions are serialized through the
/// internal random number generator.
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Shared sampling source.
    rng: Mutex<StdRng>,
    sampling: SamplingMode,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::build(
            BackendConfig::new("simulator"),
            DEFAULT_MAX_QUBITS,
            None,
            SamplingMode::Random,
        )
    }

    /// Create a simulator with custom max qubits.
    ///
    /// # Errors
    ///
    /// [`HalError::Configuration`] if `max_qubits` exceeds [`QUBIT_CEILING`].
    pub fn with_max_qubits(max_qubits: u32) -> HalResult<Self> {
        Ok(Self::build(
            BackendConfig::new("simulator"),
            checked_max_qubits(max_qubits)?,
            None,
            SamplingMode::Random,
        ))
    }

    /// Create a simulator whose samples are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::build(
            BackendConfig::new("simulator"),
            DEFAULT_MAX_QUBITS,
            Some(seed),
            SamplingMode::Random,
        )
    }

    /// Set the sampling mode.
    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    /// The active sampling mode.
    pub fn sampling(&self) -> SamplingMode {
        self.sampling
    }

    fn build(
        config: BackendConfig,
        max_qubits: u32,
        seed: Option<u64>,
        sampling: SamplingMode,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut capabilities = Capabilities::simulator(max_qubits);
        capabilities.name.clone_from(&config.name);
        Self {
            config,
            capabilities,
            rng: Mutex::new(rng),
            sampling,
        }
    }

    fn check_limits(&self, circuit: &Circuit, shots: u32) -> HalResult<()> {
        let caps = &self.capabilities;
        if shots == 0 {
            return Err(HalError::InvalidShots(
                "at least one shot is required".into(),
            ));
        }
        if shots > caps.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} shots requested but simulator allows at most {}",
                caps.max_shots
            )));
        }
        if circuit.num_qubits() > caps.num_qubits.min(QUBIT_CEILING) as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                caps.num_qubits
            )));
        }
        Ok(())
    }

    /// Run simulation synchronously.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!(
            "Starting simulation: {} qubits, {} ops, {} shots",
            num_qubits,
            circuit.num_ops(),
            shots
        );

        let mut sv = Statevector::new(num_qubits);
        for inst in circuit.instructions() {
            sv.apply(inst);
        }

        let measurements: Vec<(QubitId, ClbitId)> = circuit.measurements().collect();
        let mut counts = Counts::new();

        match self.sampling {
            SamplingMode::MostLikely => {
                let outcome = sv.most_likely();
                let bitstring = outcome_to_bitstring(outcome, &measurements, circuit.num_clbits());
                counts.insert(bitstring, u64::from(shots));
            }
            SamplingMode::Random => {
                let mut rng = self
                    .rng
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                for _ in 0..shots {
                    let outcome = sv.sample(&mut *rng);
                    let bitstring =
                        outcome_to_bitstring(outcome, &measurements, circuit.num_clbits());
                    counts.insert(bitstring, 1);
                }
            }
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

fn checked_max_qubits(max_qubits: u32) -> HalResult<u32> {
    if max_qubits > QUBIT_CEILING {
        return Err(HalError::Configuration(format!(
            "max_qubits {max_qubits} exceeds the statevector ceiling of {QUBIT_CEILING}"
        )));
    }
    Ok(max_qubits)
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[instrument(skip(self, circuit))]
    async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        self.check_limits(circuit, shots)?;
        self.validate(circuit).await?.into_result()?;
        Ok(self.run_simulation(circuit, shots))
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = match config.get_u64("max_qubits")? {
            Some(v) => checked_max_qubits(u32::try_from(v).map_err(|_| {
                HalError::Configuration(format!("max_qubits {v} does not fit in u32"))
            })?)?,
            None => DEFAULT_MAX_QUBITS,
        };
        let seed = config.get_u64("seed")?;
        let sampling = match config.get_str("sampling")? {
            Some(mode) => mode.parse()?,
            None => SamplingMode::Random,
        };

        Ok(Self::build(config, max_qubits, seed, sampling))
    }
}
