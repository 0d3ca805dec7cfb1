//! Piece symbols used by the game service.

use super::ChessParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which army a piece belongs to.
///
/// The local player moves the white (uppercase) pieces from the bottom of
/// the board; the automated opponent owns the black (lowercase) pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Side {
    /// Uppercase symbols, the local player.
    White,
    /// Lowercase symbols, the automated opponent.
    Black,
}

/// The six piece roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Role {
    /// `P`
    Pawn,
    /// `R`
    Rook,
    /// `T` (the service's knight letter) or `N`
    Knight,
    /// `B`
    Bishop,
    /// `Q`
    Queen,
    /// `K`
    King,
}

impl Role {
    fn letter(self) -> char {
        match self {
            Role::Pawn => 'P',
            Role::Rook => 'R',
            Role::Knight => 'T',
            Role::Bishop => 'B',
            Role::Queen => 'Q',
            Role::King => 'K',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'P' => Some(Role::Pawn),
            'R' => Some(Role::Rook),
            'T' | 'N' => Some(Role::Knight),
            'B' => Some(Role::Bishop),
            'Q' => Some(Role::Queen),
            'K' => Some(Role::King),
            _ => None,
        }
    }
}

/// Content of one board cell: one of twelve piece identities, or empty.
///
/// Serialized as the service's single-character symbol, with `.` for empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PieceCode {
    /// No piece.
    #[default]
    Empty,
    /// A piece of the given side and role.
    Piece {
        /// Owning side.
        side: Side,
        /// Piece role.
        role: Role,
    },
}

impl PieceCode {
    /// Symbol for an empty cell.
    pub const EMPTY_SYMBOL: char = '.';

    /// Creates a piece code.
    pub fn piece(side: Side, role: Role) -> Self {
        PieceCode::Piece { side, role }
    }

    /// Decodes a service symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, ChessParseError> {
        if symbol == Self::EMPTY_SYMBOL {
            return Ok(PieceCode::Empty);
        }
        let side = if symbol.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Role::from_letter(symbol.to_ascii_uppercase())
            .map(|role| PieceCode::Piece { side, role })
            .ok_or_else(|| ChessParseError::UnknownSymbol(symbol.to_string()))
    }

    /// The service symbol for this code.
    pub fn symbol(self) -> char {
        match self {
            PieceCode::Empty => Self::EMPTY_SYMBOL,
            PieceCode::Piece { side: Side::White, role } => role.letter(),
            PieceCode::Piece { side: Side::Black, role } => role.letter().to_ascii_lowercase(),
        }
    }

    /// Whether the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, PieceCode::Empty)
    }

    /// The owning side, if a piece is present.
    pub fn side(self) -> Option<Side> {
        match self {
            PieceCode::Empty => None,
            PieceCode::Piece { side, .. } => Some(side),
        }
    }
}

impl FromStr for PieceCode {
    type Err = ChessParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            // Some service builds send "" for an empty cell.
            (None, _) => Ok(PieceCode::Empty),
            (Some(symbol), None) => Self::from_symbol(symbol),
            _ => Err(ChessParseError::UnknownSymbol(s.to_string())),
        }
    }
}

impl TryFrom<String> for PieceCode {
    type Error = ChessParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PieceCode> for String {
    fn from(code: PieceCode) -> Self {
        code.symbol().to_string()
    }
}
