//! qsonar Battleship Game Layer
//!
//! Everything around the sonar engines that makes a game out of them:
//!
//! - [`Board`] and [`Coord`]: the 4×4 grid, rows `A`–`D`, columns `1`–`4`
//! - [`ScanLine`]: a row or column, parsed from `scan-row-A`, `col 3`, ...
//! - [`Session`]: one player's game with repeat protection and win tracking
//! - [`selfcheck`]: the known-answer boot check of the engines
//!
//! The board is owned by the caller and passed explicitly; the engines only
//! ever receive the booleans for one cell or one line.

pub mod board;
pub mod error;
pub mod scan;
pub mod selfcheck;
pub mod session;

pub use board::{Board, Coord, DEFAULT_SHIPS};
pub use error::{GameError, GameResult};
pub use scan::ScanLine;
pub use selfcheck::{SelfCheckReport, Status};
pub use session::{Sector, Session};
