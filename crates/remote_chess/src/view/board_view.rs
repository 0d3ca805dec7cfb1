//! Rendered board state.

use super::BoardGeometry;
use crate::chess::{BoardSnapshot, Move, PieceCode, Role, Side, Square};
use tracing::{debug, instrument};

/// Light or dark cell background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// `(row + col)` even.
    Light,
    /// `(row + col)` odd.
    Dark,
}

/// One addressable cell of the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Board position.
    pub square: Square,
    /// Piece currently drawn there.
    pub piece: PieceCode,
    /// Background shade.
    pub shade: Shade,
}

/// Glyph drawn for a piece: outline for white, filled for black. Empty
/// cells draw nothing.
pub fn glyph(piece: PieceCode) -> Option<&'static str> {
    let PieceCode::Piece { side, role } = piece else {
        return None;
    };
    Some(match (side, role) {
        (Side::White, Role::Pawn) => "♙",
        (Side::White, Role::Rook) => "♖",
        (Side::White, Role::Knight) => "♘",
        (Side::White, Role::Bishop) => "♗",
        (Side::White, Role::Queen) => "♕",
        (Side::White, Role::King) => "♔",
        (Side::Black, Role::Pawn) => "♟",
        (Side::Black, Role::Rook) => "♜",
        (Side::Black, Role::Knight) => "♞",
        (Side::Black, Role::Bishop) => "♝",
        (Side::Black, Role::Queen) => "♛",
        (Side::Black, Role::King) => "♚",
    })
}

/// The 64 cells currently on screen.
///
/// Holds its own copy of the board: a full snapshot replaces every cell,
/// while a visual move shifts one piece ahead of the next snapshot.
#[derive(Debug, Clone)]
pub struct BoardView {
    cells: [PieceCode; 64],
    interactive: bool,
    geometry: BoardGeometry,
}

impl BoardView {
    /// Creates an empty, interactive view.
    pub fn new() -> Self {
        Self {
            cells: [PieceCode::Empty; 64],
            interactive: true,
            geometry: BoardGeometry::default(),
        }
    }

    /// Redraws every cell from a snapshot.
    #[instrument(skip_all)]
    pub fn render(&mut self, snapshot: &BoardSnapshot) {
        for square in Square::all() {
            self.cells[square.index()] = snapshot.get(square);
        }
        debug!(pieces = snapshot.piece_count(), "Board rendered");
    }

    /// Moves the drawn piece from `mv.from` to `mv.to`, overwriting the destination.
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn apply_visual_move(&mut self, mv: Move) {
        let piece = std::mem::take(&mut self.cells[mv.from.index()]);
        self.cells[mv.to.index()] = piece;
        debug!(piece = %piece.symbol(), "Visual move applied");
    }

    /// Piece drawn on a square.
    pub fn piece_at(&self, square: Square) -> PieceCode {
        self.cells[square.index()]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Square::all().map(|square| Cell {
            square,
            piece: self.cells[square.index()],
            shade: if square.is_light() {
                Shade::Light
            } else {
                Shade::Dark
            },
        })
    }

    /// Stops cells from originating selections. Idempotent.
    pub fn disable_interaction(&mut self) {
        if self.interactive {
            debug!("Board interaction disabled");
        }
        self.interactive = false;
    }

    /// Lets cells originate selections again.
    pub fn enable_interaction(&mut self) {
        self.interactive = true;
    }

    /// Whether clicks are reported.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Current screen placement.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Updates screen placement after a layout pass.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = geometry;
    }

    /// The square clicked at a terminal position, while interaction is enabled.
    pub fn square_at(&self, x: u16, y: u16) -> Option<Square> {
        if !self.interactive {
            return None;
        }
        self.geometry.square_at(x, y)
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn square(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn opening() -> BoardSnapshot {
        "rtbqkbtr\npppppppp\n........\n........\n........\n........\nPPPPPPPP\nRTBQKBTR"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_render_copies_snapshot() {
        let mut view = BoardView::new();
        view.render(&opening());
        assert_eq!(
            view.piece_at(square(7, 4)),
            PieceCode::piece(Side::White, Role::King)
        );
        assert_eq!(view.cells().filter(|c| !c.piece.is_empty()).count(), 32);
    }

    #[test]
    fn test_visual_move_overwrites_destination() {
        let mut view = BoardView::new();
        view.render(&opening());
        view.apply_visual_move(Move::new(square(6, 4), square(1, 4)));
        assert!(view.piece_at(square(6, 4)).is_empty());
        assert_eq!(
            view.piece_at(square(1, 4)),
            PieceCode::piece(Side::White, Role::Pawn)
        );
        assert_eq!(view.cells().filter(|c| !c.piece.is_empty()).count(), 31);
    }

    #[test]
    fn test_cells_alternate_shade() {
        let view = BoardView::new();
        let cells: Vec<_> = view.cells().collect();
        assert_eq!(cells[0].shade, Shade::Light);
        assert_eq!(cells[1].shade, Shade::Dark);
        assert_eq!(cells[8].shade, Shade::Dark);
        assert_eq!(cells[9].shade, Shade::Light);
    }

    #[test]
    fn test_disabled_view_reports_no_clicks() {
        let mut view = BoardView::new();
        let rect = view.geometry().cell_rect(square(3, 3));
        assert_eq!(view.square_at(rect.x, rect.y), Some(square(3, 3)));
        view.disable_interaction();
        view.disable_interaction();
        assert_eq!(view.square_at(rect.x, rect.y), None);
        view.enable_interaction();
        assert!(view.is_interactive());
    }

    #[test]
    fn test_empty_has_no_glyph() {
        assert_eq!(glyph(PieceCode::Empty), None);
        assert_eq!(glyph(PieceCode::piece(Side::Black, Role::Knight)), Some("♞"));
        assert_eq!(glyph(PieceCode::piece(Side::White, Role::Knight)), Some("♘"));
    }

    #[test]
    fn test_every_piece_has_its_own_glyph() {
        let glyphs: HashSet<_> = Side::iter()
            .flat_map(|side| Role::iter().map(move |role| PieceCode::piece(side, role)))
            .map(|piece| glyph(piece).unwrap())
            .collect();
        assert_eq!(glyphs.len(), 12);
    }
}
