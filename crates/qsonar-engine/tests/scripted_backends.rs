//! Engine behaviour against scripted test-double backends.
//!
//! These backends never simulate anything; they replay a fixed outcome or a
//! fixed failure so the engine's decode and error paths can be checked in
//! isolation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use qsonar_engine::{EngineError, SonarEngine};
use qsonar_hal::{Backend, Capabilities, Counts, ExecutionResult, HalError, HalResult};
use qsonar_ir::Circuit;

/// Replays the same counts on every call and records what it was sent.
struct Scripted {
    capabilities: Capabilities,
    outcomes: Vec<(&'static str, u64)>,
    seen: Mutex<Vec<(String, u32)>>,
}

impl Scripted {
    fn new(outcomes: &[(&'static str, u64)]) -> Self {
        Self {
            capabilities: Capabilities::simulator(8),
            outcomes: outcomes.to_vec(),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<(String, u32)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        self.seen
            .lock()
            .unwrap()
            .push((circuit.name().to_string(), shots));
        let counts: Counts = self
            .outcomes
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect();
        Ok(ExecutionResult::new(counts, shots))
    }
}

/// Fails every execution.
struct Broken {
    capabilities: Capabilities,
}

#[async_trait]
impl Backend for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn execute(&self, _circuit: &Circuit, _shots: u32) -> HalResult<ExecutionResult> {
        Err(HalError::BackendUnavailable("device offline".into()))
    }
}

#[tokio::test]
async fn test_engines_submit_one_shot_each() {
    let backend = Arc::new(Scripted::new(&[("0", 1)]));
    let engine = SonarEngine::new(backend.clone());

    engine.ping(false).await.unwrap();
    assert_eq!(backend.seen(), vec![("sonar_ping".to_string(), 1)]);
}

#[tokio::test]
async fn test_ping_returns_backend_bit() {
    let engine = SonarEngine::new(Arc::new(Scripted::new(&[("1", 1)])));
    // The engine trusts the backend; it does not second-guess the outcome.
    assert_eq!(engine.ping(false).await.unwrap(), 1);
}

#[tokio::test]
async fn test_scan_decodes_reversed_register() {
    // Highest classical bit leftmost: "100" is c2 = 1, which is the least
    // significant bit of the count.
    let engine = SonarEngine::new(Arc::new(Scripted::new(&[("100", 1)])));
    assert_eq!(engine.count_scan(&[false; 4]).await.unwrap(), 1);

    let engine = SonarEngine::new(Arc::new(Scripted::new(&[("001", 1)])));
    assert_eq!(engine.count_scan(&[false; 4]).await.unwrap(), 4);
}

#[tokio::test]
async fn test_scan_out_of_range_is_not_clamped() {
    let engine = SonarEngine::new(Arc::new(Scripted::new(&[("111", 1)])));
    let err = engine.count_scan(&[true; 4]).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::CountOutOfRange { count: 7, max: 4 }
    ));
    assert!(!err.is_rejected_request());
}

#[tokio::test]
async fn test_wrong_arity_never_reaches_backend() {
    let backend = Arc::new(Scripted::new(&[("000", 1)]));
    let engine = SonarEngine::new(backend.clone());

    let err = engine.count_scan(&[true, true, true]).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidTargetCount { expected: 4, got: 3 }));
    assert!(backend.seen().is_empty());
}

#[tokio::test]
async fn test_malformed_outcomes() {
    let cases: [&[(&'static str, u64)]; 3] = [
        &[],
        &[("0", 1), ("1", 1)],
        &[("01", 1)],
    ];
    for outcomes in cases {
        let engine = SonarEngine::new(Arc::new(Scripted::new(outcomes)));
        let err = engine.ping(true).await.unwrap_err();
        assert!(
            matches!(err, EngineError::MalformedOutcome { .. }),
            "{outcomes:?} gave {err:?}"
        );
    }

    let engine = SonarEngine::new(Arc::new(Scripted::new(&[("0z1", 1)])));
    let err = engine.count_scan(&[false; 4]).await.unwrap_err();
    assert!(matches!(err, EngineError::MalformedOutcome { .. }));
}

#[tokio::test]
async fn test_backend_failure_propagates() {
    let engine = SonarEngine::new(Arc::new(Broken {
        capabilities: Capabilities::simulator(8),
    }));

    let err = engine.ping(true).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Execution(HalError::BackendUnavailable(_))
    ));

    let err = engine.count_scan(&[true; 4]).await.unwrap_err();
    assert!(matches!(err, EngineError::Execution(_)));
    assert_eq!(format!("{:?}", engine), "SonarEngine { backend: \"broken\" }");
}
