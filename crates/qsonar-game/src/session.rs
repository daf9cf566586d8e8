//! A single game: one board, one engine, and what the player has learned.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use qsonar_engine::SonarEngine;
use tracing::info;

use crate::board::{Board, COLS, Coord, ROWS};
use crate::error::{GameError, GameResult};
use crate::scan::ScanLine;

/// What a ping revealed about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    /// The sonar found a ship.
    Ship,
    /// The sonar found open water.
    Clear,
}

/// Game state for one player.
///
/// Every cell may be pinged once and every line scanned once. A failed
/// engine call uses up neither.
#[derive(Debug)]
pub struct Session {
    board: Board,
    engine: SonarEngine,
    pinged: BTreeMap<Coord, Sector>,
    scanned: BTreeMap<ScanLine, u8>,
}

impl Session {
    /// Start a game on `board`.
    pub fn new(board: Board, engine: SonarEngine) -> Self {
        info!(ships = board.ship_count(), "game session started");
        Self {
            board,
            engine,
            pinged: BTreeMap::new(),
            scanned: BTreeMap::new(),
        }
    }

    /// Ping one cell.
    ///
    /// # Errors
    ///
    /// [`GameError::AlreadyPinged`] on a repeat; engine failures otherwise.
    pub async fn ping(&mut self, coord: Coord) -> GameResult<Sector> {
        if self.pinged.contains_key(&coord) {
            return Err(GameError::AlreadyPinged(coord));
        }

        let bit = self.engine.ping(self.board.is_ship(coord)).await?;
        let sector = if bit == 1 { Sector::Ship } else { Sector::Clear };
        self.pinged.insert(coord, sector);

        info!(%coord, ?sector, "sector pinged");
        Ok(sector)
    }

    /// Count the ships on one row or column.
    ///
    /// # Errors
    ///
    /// [`GameError::AlreadyScanned`] on a repeat; engine failures otherwise.
    pub async fn scan(&mut self, line: ScanLine) -> GameResult<u8> {
        if self.scanned.contains_key(&line) {
            return Err(GameError::AlreadyScanned(line));
        }

        let count = self.engine.count_scan(&line.targets(&self.board)).await?;
        self.scanned.insert(line, count);

        info!(%line, count, "line scanned");
        Ok(count)
    }

    /// Number of ships located by pings so far.
    pub fn ships_found(&self) -> usize {
        self.pinged.values().filter(|&&s| s == Sector::Ship).count()
    }

    /// Number of ships on the board.
    pub fn ships_total(&self) -> usize {
        self.board.ship_count()
    }

    /// Whether every ship has been located.
    pub fn is_won(&self) -> bool {
        self.ships_found() == self.ships_total()
    }

    /// Result of an earlier ping, if any.
    pub fn sector(&self, coord: Coord) -> Option<Sector> {
        self.pinged.get(&coord).copied()
    }

    /// Result of an earlier scan, if any.
    pub fn scan_result(&self, line: ScanLine) -> Option<u8> {
        self.scanned.get(&line).copied()
    }

    /// Number of pings spent.
    pub fn pings_used(&self) -> usize {
        self.pinged.len()
    }

    /// The player's view of the board.
    ///
    /// `S` marks a located ship, `.` open water, `?` an unpinged sector. Row
    /// and column scan results are shown at the end of each line.
    pub fn render(&self) -> String {
        let mut out = String::from("   ");
        for c in COLS {
            let _ = write!(out, " {c}");
        }
        out.push('\n');

        for (r, label) in ROWS.iter().enumerate() {
            let _ = write!(out, " {label} ");
            for c in 0..COLS.len() {
                let coord = Coord::at(r as u8, c as u8);
                let mark = match self.sector(coord) {
                    Some(Sector::Ship) => 'S',
                    Some(Sector::Clear) => '.',
                    None => '?',
                };
                let _ = write!(out, " {mark}");
            }
            if let Some(n) = self.scan_result(ScanLine::Row(r as u8)) {
                let _ = write!(out, "  [{n}]");
            }
            out.push('\n');
        }

        out.push_str("   ");
        for c in 0..COLS.len() {
            match self.scan_result(ScanLine::Column(c as u8)) {
                Some(n) => {
                    let _ = write!(out, " {n}");
                }
                None => out.push_str("  "),
            }
        }
        out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use qsonar_adapter_sim::SimulatorBackend;

    fn session(ships: &[&str]) -> Session {
        let board = Board::from_ships(ships.iter().map(|s| s.parse().unwrap()));
        Session::new(board, SonarEngine::new(Arc::new(SimulatorBackend::new())))
    }

    fn c(s: &str) -> Coord {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_ping_hits_and_misses() {
        let mut game = session(&["A1", "C3"]);
        assert_eq!(game.ping(c("A1")).await.unwrap(), Sector::Ship);
        assert_eq!(game.ping(c("A2")).await.unwrap(), Sector::Clear);
        assert_eq!(game.ships_found(), 1);
        assert_eq!(game.pings_used(), 2);
        assert!(!game.is_won());

        game.ping(c("C3")).await.unwrap();
        assert!(game.is_won());
    }

    #[tokio::test]
    async fn test_repeat_ping_rejected() {
        let mut game = session(&["B2"]);
        game.ping(c("B2")).await.unwrap();
        let err = game.ping(c("B2")).await.unwrap_err();
        assert!(matches!(err, GameError::AlreadyPinged(coord) if coord == c("B2")));
        assert!(err.is_user_error());
        assert_eq!(game.ships_found(), 1);
    }

    #[tokio::test]
    async fn test_scan_counts_line() {
        let mut game = session(&["B1", "B3", "D3"]);
        assert_eq!(game.scan(ScanLine::Row(1)).await.unwrap(), 2);
        assert_eq!(game.scan(ScanLine::Column(2)).await.unwrap(), 2);
        assert_eq!(game.scan(ScanLine::Row(0)).await.unwrap(), 0);
        assert_eq!(game.scan_result(ScanLine::Row(1)), Some(2));

        let err = game.scan(ScanLine::Row(1)).await.unwrap_err();
        assert!(matches!(err, GameError::AlreadyScanned(ScanLine::Row(1))));
    }

    #[tokio::test]
    async fn test_render() {
        let mut game = session(&["A1"]);
        game.ping(c("A1")).await.unwrap();
        game.ping(c("A2")).await.unwrap();
        game.scan(ScanLine::Row(3)).await.unwrap();
        game.scan(ScanLine::Column(1)).await.unwrap();

        let view = game.render();
        let lines: Vec<_> = view.lines().collect();
        assert_eq!(lines[0], "    1 2 3 4");
        assert_eq!(lines[1], " A  S . ? ?");
        assert_eq!(lines[4], " D  ? ? ? ?  [0]");
        assert_eq!(lines[5], "      0");
    }

    #[test]
    fn test_empty_board_is_trivially_won() {
        let game = session(&[]);
        assert!(game.is_won());
        assert_eq!(game.ships_total(), 0);
    }
}
