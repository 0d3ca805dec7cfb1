//! Authoritative board snapshots.

use super::{BOARD_SIZE, ChessParseError, PieceCode, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SIZE: usize = BOARD_SIZE as usize;

/// A full 8×8 board as reported by the service.
///
/// Snapshots are immutable once decoded; a newer fetch replaces the whole
/// value. On the wire a snapshot is an array of eight rows, each an array
/// of eight piece symbols, row 0 first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<PieceCode>>", into = "Vec<Vec<PieceCode>>")]
pub struct BoardSnapshot {
    cells: [[PieceCode; SIZE]; SIZE],
}

impl BoardSnapshot {
    /// A board with no pieces, shown until the first fetch completes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot from rows, checking the 8×8 shape.
    pub fn from_rows(rows: Vec<Vec<PieceCode>>) -> Result<Self, ChessParseError> {
        if rows.len() != SIZE {
            return Err(ChessParseError::BadShape(format!("{} rows", rows.len())));
        }
        let mut cells = [[PieceCode::Empty; SIZE]; SIZE];
        for (index, (target, row)) in cells.iter_mut().zip(rows).enumerate() {
            *target = row.try_into().map_err(|row: Vec<PieceCode>| {
                ChessParseError::BadShape(format!("row {} has {} cells", index, row.len()))
            })?;
        }
        Ok(Self { cells })
    }

    /// The piece on a square.
    pub fn get(&self, square: Square) -> PieceCode {
        self.cells[usize::from(square.row())][usize::from(square.col())]
    }

    /// Number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|code| !code.is_empty()).count()
    }
}

impl TryFrom<Vec<Vec<PieceCode>>> for BoardSnapshot {
    type Error = ChessParseError;

    fn try_from(rows: Vec<Vec<PieceCode>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<BoardSnapshot> for Vec<Vec<PieceCode>> {
    fn from(snapshot: BoardSnapshot) -> Self {
        snapshot.cells.iter().map(|row| row.to_vec()).collect()
    }
}

/// Eight lines of symbols, row 0 first.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for code in row {
                write!(f, "{}", code.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) form: eight lines of eight symbols.
impl FromStr for BoardSnapshot {
    type Err = ChessParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(PieceCode::from_symbol).collect())
            .collect::<Result<Vec<Vec<_>>, _>>()?;
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Role, Side};

    const OPENING: &str = "rtbqkbtr\n\
                           pppppppp\n\
                           ........\n\
                           ........\n\
                           ........\n\
                           ........\n\
                           PPPPPPPP\n\
                           RTBQKBTR";

    #[test]
    fn test_parse_text_board() {
        let board: BoardSnapshot = OPENING.parse().unwrap();
        assert_eq!(board.piece_count(), 32);
        let e2 = Square::new(6, 4).unwrap();
        assert_eq!(board.get(e2), PieceCode::piece(Side::White, Role::Pawn));
        assert_eq!(board.to_string(), OPENING.replace(' ', ""));
    }

    #[test]
    fn test_decode_service_json() {
        let mut rows = vec![vec!["."; 8]; 8];
        rows[0][4] = "k";
        rows[7][4] = "K";
        let json = serde_json::to_string(&rows).unwrap();
        let board: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(board.piece_count(), 2);
        assert_eq!(
            board.get(Square::new(0, 4).unwrap()),
            PieceCode::piece(Side::Black, Role::King)
        );
    }

    #[test]
    fn test_wrong_shape_rejected() {
        let short = vec![vec!["."; 8]; 7];
        let json = serde_json::to_string(&short).unwrap();
        assert!(serde_json::from_str::<BoardSnapshot>(&json).is_err());

        let mut ragged = vec![vec!["."; 8]; 8];
        ragged[3].push(".");
        let json = serde_json::to_string(&ragged).unwrap();
        assert!(serde_json::from_str::<BoardSnapshot>(&json).is_err());
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let mut rows = vec![vec!["."; 8]; 8];
        rows[2][2] = "z";
        let json = serde_json::to_string(&rows).unwrap();
        assert!(serde_json::from_str::<BoardSnapshot>(&json).is_err());
    }
}
