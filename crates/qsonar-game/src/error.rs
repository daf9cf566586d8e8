//! Error types for the game layer.

use qsonar_engine::EngineError;
use thiserror::Error;

use crate::board::Coord;
use crate::scan::ScanLine;

/// Errors raised while setting up or playing a game.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    /// Not a cell on the 4×4 board.
    #[error("Invalid coordinate '{0}', expected A1..D4")]
    InvalidCoordinate(String),

    /// Not a row or column scan identifier.
    #[error("Invalid scan '{0}', expected e.g. scan-row-A or scan-col-3")]
    InvalidScan(String),

    /// More ships than cells.
    #[error("Cannot place {requested} ships on {cells} cells")]
    TooManyShips { requested: usize, cells: usize },

    /// The cell has been pinged before in this session.
    #[error("Sector {0} was already pinged")]
    AlreadyPinged(Coord),

    /// The line has been scanned before in this session.
    #[error("{0} was already scanned")]
    AlreadyScanned(ScanLine),

    /// The sonar engine failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl GameError {
    /// Whether the error stems from player input rather than the engine.
    pub fn is_user_error(&self) -> bool {
        match self {
            GameError::Engine(e) => e.is_rejected_request(),
            _ => true,
        }
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
