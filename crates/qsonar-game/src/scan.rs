//! Row and column scan identifiers.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, COLS, ROWS, col_index, row_index};
use crate::error::GameError;

/// One row or one column of the board, the unit a counting scan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScanLine {
    /// Zero-based row index.
    Row(u8),
    /// Zero-based column index.
    Column(u8),
}

impl ScanLine {
    /// Identifier used on the wire, e.g. `scan-row-A` or `scan-col-3`.
    pub fn id(self) -> String {
        match self {
            ScanLine::Row(r) => format!("scan-row-{}", ROWS[usize::from(r)]),
            ScanLine::Column(c) => format!("scan-col-{}", COLS[usize::from(c)]),
        }
    }

    /// Occupancy of the line on `board`, in scan order.
    ///
    /// # Panics
    ///
    /// Panics if the line index is 4 or more.
    pub fn targets(self, board: &Board) -> [bool; 4] {
        match self {
            ScanLine::Row(r) => board.row(r),
            ScanLine::Column(c) => board.column(c),
        }
    }
}

impl FromStr for ScanLine {
    type Err = GameError;

    /// Accepts `scan-row-A`, `scan-col-3`, `row A`, `col 3`, and the bare
    /// labels `A` (a row) and `3` (a column). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidScan(s.to_string());
        let lower = s.trim().to_ascii_lowercase();

        let (kind, label) = if let Some(rest) = lower.strip_prefix("scan-row-") {
            (Some(true), rest)
        } else if let Some(rest) = lower.strip_prefix("scan-col-") {
            (Some(false), rest)
        } else if let Some(rest) = lower.strip_prefix("row") {
            (Some(true), rest.trim_start())
        } else if let Some(rest) = lower.strip_prefix("col") {
            (Some(false), rest.trim_start())
        } else {
            (None, lower.as_str())
        };

        let mut chars = label.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };

        match (kind, row_index(ch), col_index(ch)) {
            (Some(true) | None, Some(r), _) => Ok(ScanLine::Row(r)),
            (Some(false) | None, _, Some(c)) => Ok(ScanLine::Column(c)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ScanLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanLine::Row(r) => write!(f, "Row {}", ROWS[usize::from(*r)]),
            ScanLine::Column(c) => write!(f, "Col {}", COLS[usize::from(*c)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_ids() {
        assert_eq!("scan-row-A".parse::<ScanLine>().unwrap(), ScanLine::Row(0));
        assert_eq!("scan-row-d".parse::<ScanLine>().unwrap(), ScanLine::Row(3));
        assert_eq!("scan-col-3".parse::<ScanLine>().unwrap(), ScanLine::Column(2));
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!("row B".parse::<ScanLine>().unwrap(), ScanLine::Row(1));
        assert_eq!("ROW c".parse::<ScanLine>().unwrap(), ScanLine::Row(2));
        assert_eq!("col 4".parse::<ScanLine>().unwrap(), ScanLine::Column(3));
        assert_eq!("A".parse::<ScanLine>().unwrap(), ScanLine::Row(0));
        assert_eq!("1".parse::<ScanLine>().unwrap(), ScanLine::Column(0));
    }

    #[test]
    fn test_parse_rejects() {
        for bad in [
            "", "scan-row-E", "scan-col-5", "scan-row-1", "col A", "row", "scan-diag-A", "AB",
        ] {
            assert!(
                matches!(bad.parse::<ScanLine>(), Err(GameError::InvalidScan(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_id_and_display_round_trip() {
        let lines = (0..4).map(ScanLine::Row).chain((0..4).map(ScanLine::Column));
        for line in lines {
            assert_eq!(line.id().parse::<ScanLine>().unwrap(), line);
        }
        assert_eq!(ScanLine::Row(0).to_string(), "Row A");
        assert_eq!(ScanLine::Column(2).to_string(), "Col 3");
    }

    #[test]
    fn test_targets() {
        let board = Board::from_ships(["B1".parse().unwrap(), "B3".parse().unwrap()]);
        assert_eq!(ScanLine::Row(1).targets(&board), [true, false, true, false]);
        assert_eq!(ScanLine::Column(0).targets(&board), [false, true, false, false]);
        assert_eq!(ScanLine::Column(3).targets(&board), [false; 4]);
    }
}
