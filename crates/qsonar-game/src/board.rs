//! The 4×4 board and its coordinates.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Serialize, Serializer};

use crate::error::{GameError, GameResult};

/// Number of rows and of columns.
pub const SIZE: u8 = 4;

/// Ships placed by default.
pub const DEFAULT_SHIPS: usize = 4;

/// Row labels, top to bottom.
pub const ROWS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Column labels, left to right.
pub const COLS: [char; 4] = ['1', '2', '3', '4'];

const CELLS: usize = (SIZE as usize) * (SIZE as usize);

/// A cell on the board, written `A1` through `D4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate from zero-based row and column indices.
    pub fn new(row: u8, col: u8) -> GameResult<Self> {
        if row < SIZE && col < SIZE {
            Ok(Self { row, col })
        } else {
            Err(GameError::InvalidCoordinate(format!("({row}, {col})")))
        }
    }

    pub(crate) fn at(row: u8, col: u8) -> Self {
        assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) is off the board");
        Self { row, col }
    }

    /// Zero-based row index.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Zero-based column index.
    pub fn col(self) -> u8 {
        self.col
    }

    /// All sixteen cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coord { row, col }))
    }

    fn index(self) -> usize {
        usize::from(self.row) * usize::from(SIZE) + usize::from(self.col)
    }
}

/// Zero-based row index of a row label, case-insensitive.
pub(crate) fn row_index(label: char) -> Option<u8> {
    let upper = label.to_ascii_uppercase();
    ROWS.iter().position(|&r| r == upper).map(|i| i as u8)
}

/// Zero-based column index of a column label.
pub(crate) fn col_index(label: char) -> Option<u8> {
    COLS.iter().position(|&c| c == label).map(|i| i as u8)
}

impl FromStr for Coord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCoordinate(s.to_string());
        let mut chars = s.trim().chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let row = row_index(r).ok_or_else(invalid)?;
        let col = col_index(c).ok_or_else(invalid)?;
        Ok(Self { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            ROWS[usize::from(self.row)],
            COLS[usize::from(self.col)]
        )
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ship placement on the 4×4 grid.
///
/// The board is plain data owned by whoever runs the game; the engines only
/// ever see the four booleans of one cell or one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [bool; CELLS],
}

impl Board {
    /// A board with no ships.
    pub fn empty() -> Self {
        Self {
            cells: [false; CELLS],
        }
    }

    /// Place `ship_count` ships on distinct cells chosen uniformly at random.
    pub fn random<R: Rng + ?Sized>(ship_count: usize, rng: &mut R) -> GameResult<Self> {
        if ship_count > CELLS {
            return Err(GameError::TooManyShips {
                requested: ship_count,
                cells: CELLS,
            });
        }
        let mut board = Self::empty();
        for index in rand::seq::index::sample(rng, CELLS, ship_count) {
            board.cells[index] = true;
        }
        Ok(board)
    }

    /// A board with ships exactly at `ships`.
    pub fn from_ships(ships: impl IntoIterator<Item = Coord>) -> Self {
        let mut board = Self::empty();
        for coord in ships {
            board.cells[coord.index()] = true;
        }
        board
    }

    /// Whether a ship occupies `coord`.
    pub fn is_ship(&self, coord: Coord) -> bool {
        self.cells[coord.index()]
    }

    /// Occupancy of row `row`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 4`.
    pub fn row(&self, row: u8) -> [bool; 4] {
        assert!(row < SIZE, "row {row} out of range");
        let start = usize::from(row) * usize::from(SIZE);
        [0, 1, 2, 3].map(|c| self.cells[start + c])
    }

    /// Occupancy of column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col >= 4`.
    pub fn column(&self, col: u8) -> [bool; 4] {
        let col = usize::from(col);
        assert!(col < usize::from(SIZE), "column {col} out of range");
        [0, 1, 2, 3].map(|r| self.cells[r * usize::from(SIZE) + col])
    }

    /// Number of ships on the board.
    pub fn ship_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s).count()
    }

    /// Ship positions in row-major order.
    pub fn ships(&self) -> Vec<Coord> {
        Coord::all().filter(|&c| self.is_ship(c)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c(s: &str) -> Coord {
        s.parse().unwrap()
    }

    #[test]
    fn test_coord_parse_and_display() {
        assert_eq!(c("A1"), Coord::new(0, 0).unwrap());
        assert_eq!(c("d4"), Coord::new(3, 3).unwrap());
        assert_eq!(c(" b3 ").to_string(), "B3");
        for bad in ["", "A", "A0", "E1", "A5", "A12", "1A"] {
            assert!(
                matches!(bad.parse::<Coord>(), Err(GameError::InvalidCoordinate(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(Coord::new(4, 0).is_err());
    }

    #[test]
    fn test_all_coords() {
        let all: Vec<_> = Coord::all().map(|c| c.to_string()).collect();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], "A1");
        assert_eq!(all[5], "B2");
        assert_eq!(all[15], "D4");
    }

    #[test]
    fn test_rows_and_columns() {
        let board = Board::from_ships([c("A2"), c("A4"), c("C2")]);
        assert_eq!(board.row(0), [false, true, false, true]);
        assert_eq!(board.row(1), [false; 4]);
        assert_eq!(board.column(1), [true, false, true, false]);
        assert!(board.is_ship(c("C2")));
        assert!(!board.is_ship(c("C3")));
        assert_eq!(board.ship_count(), 3);
        assert_eq!(board.ships(), vec![c("A2"), c("A4"), c("C2")]);
    }

    #[test]
    fn test_random_board_places_distinct_ships() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in [0, 1, DEFAULT_SHIPS, 16] {
            let board = Board::random(n, &mut rng).unwrap();
            assert_eq!(board.ship_count(), n);
        }
    }

    #[test]
    fn test_random_board_is_reproducible() {
        let a = Board::random(4, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = Board::random(4, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_too_many_ships() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Board::random(17, &mut rng),
            Err(GameError::TooManyShips {
                requested: 17,
                cells: 16
            })
        ));
    }
}
