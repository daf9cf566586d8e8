//! Whole-game flows over the simulator and over a faulty backend.

use std::sync::Arc;

use async_trait::async_trait;
use qsonar_adapter_sim::SimulatorBackend;
use qsonar_engine::{EngineError, SonarEngine};
use qsonar_game::{Board, Coord, GameError, ScanLine, Sector, Session, Status, selfcheck};
use qsonar_hal::{Backend, Capabilities, Counts, ExecutionResult, HalError, HalResult};
use qsonar_ir::Circuit;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn simulator_engine() -> SonarEngine {
    SonarEngine::new(Arc::new(SimulatorBackend::new()))
}

/// Answers every circuit with all-ones, which no correct scan produces.
struct StuckHigh {
    capabilities: Capabilities,
}

#[async_trait]
impl Backend for StuckHigh {
    fn name(&self) -> &str {
        "stuck_high"
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        let mut counts = Counts::new();
        counts.insert("1".repeat(circuit.num_clbits()), u64::from(shots));
        Ok(ExecutionResult::new(counts, shots))
    }
}

struct Offline {
    capabilities: Capabilities,
}

#[async_trait]
impl Backend for Offline {
    fn name(&self) -> &str {
        "offline"
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn execute(&self, _circuit: &Circuit, _shots: u32) -> HalResult<ExecutionResult> {
        Err(HalError::ExecutionFailed("resource exhaustion".into()))
    }
}

#[tokio::test]
async fn test_sweeping_every_cell_wins() {
    let mut rng = StdRng::seed_from_u64(77);
    let board = Board::random(4, &mut rng).unwrap();
    let ships = board.ships();
    let mut game = Session::new(board, simulator_engine());

    for coord in Coord::all() {
        let sector = game.ping(coord).await.unwrap();
        assert_eq!(sector == Sector::Ship, ships.contains(&coord), "{coord}");
    }
    assert!(game.is_won());
    assert_eq!(game.ships_found(), 4);
    assert_eq!(game.pings_used(), 16);
}

#[tokio::test]
async fn test_scans_sum_to_ship_count() {
    let mut rng = StdRng::seed_from_u64(3);
    let board = Board::random(6, &mut rng).unwrap();
    let mut game = Session::new(board.clone(), simulator_engine());

    let mut row_total = 0;
    let mut col_total = 0;
    for line in (0..4).map(ScanLine::Row).chain((0..4).map(ScanLine::Column)) {
        let count = game.scan(line).await.unwrap();
        let expected = line.targets(&board).iter().filter(|&&t| t).count();
        assert_eq!(usize::from(count), expected, "{line}");
        match line {
            ScanLine::Row(_) => row_total += usize::from(count),
            ScanLine::Column(_) => col_total += usize::from(count),
        }
    }
    assert_eq!(row_total, 6);
    assert_eq!(col_total, 6);
}

#[tokio::test]
async fn test_engine_defect_surfaces_as_game_error() {
    let engine = SonarEngine::new(Arc::new(StuckHigh {
        capabilities: Capabilities::simulator(8),
    }));
    let mut game = Session::new(Board::empty(), engine);

    let err = game.scan(ScanLine::Row(0)).await.unwrap_err();
    assert!(matches!(
        err,
        GameError::Engine(EngineError::CountOutOfRange { count: 7, .. })
    ));
    assert!(!err.is_user_error());
    // A failed scan does not use up the line.
    assert_eq!(game.scan_result(ScanLine::Row(0)), None);
}

#[tokio::test]
async fn test_selfcheck_reports_fault() {
    let engine = SonarEngine::new(Arc::new(StuckHigh {
        capabilities: Capabilities::simulator(8),
    }));
    let report = selfcheck::run(&engine).await;
    assert_eq!(report.status, Status::Fault);
    // ping(true) still reads 1 on a stuck-high backend.
    assert!(report.checks[1].passed());
    assert!(!report.checks[0].passed());
    assert!(report.checks[2].error.is_some());
}

#[tokio::test]
async fn test_offline_backend() {
    let engine = SonarEngine::new(Arc::new(Offline {
        capabilities: Capabilities::simulator(8),
    }));

    let report = selfcheck::run(&engine).await;
    assert!(!report.is_nominal());
    assert!(report.checks.iter().all(|c| c.observed.is_none()));

    let mut game = Session::new(Board::empty(), engine);
    let coord: Coord = "A1".parse().unwrap();
    let err = game.ping(coord).await.unwrap_err();
    assert!(matches!(err, GameError::Engine(EngineError::Execution(_))));
    assert_eq!(game.sector(coord), None);
}
