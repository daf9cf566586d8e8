//! Application state for the sonar server.

use std::net::SocketAddr;

use qsonar_engine::SonarEngine;
use qsonar_game::{Board, DEFAULT_SHIPS, GameResult};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Ships placed on the board at startup.
    pub ships: usize,
    /// Seed for board placement; random when absent.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 5000).into(),
            ships: DEFAULT_SHIPS,
            seed: None,
        }
    }
}

/// Shared application state.
///
/// The board is fixed for the lifetime of the server and only ever read.
pub struct AppState {
    /// Ship placement every request is answered against.
    pub board: Board,
    /// Engine shared by all handlers.
    pub engine: SonarEngine,
}

impl AppState {
    /// Create state around an explicit board.
    pub fn new(board: Board, engine: SonarEngine) -> Self {
        Self { board, engine }
    }

    /// Create state with a board placed according to `config`.
    pub fn with_config(config: ServerConfig, engine: SonarEngine) -> GameResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::random(config.ships, &mut rng)?;
        Ok(Self { board, engine })
    }
}
