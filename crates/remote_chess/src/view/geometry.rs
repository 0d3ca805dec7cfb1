//! Mapping between board squares and terminal cells.

use crate::chess::{BOARD_SIZE, Square};
use ratatui::layout::Rect;

/// Placement of the 8×8 grid on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    origin_x: u16,
    origin_y: u16,
    cell_width: u16,
    cell_height: u16,
}

impl BoardGeometry {
    /// Default cell width in terminal columns.
    pub const CELL_WIDTH: u16 = 5;
    /// Default cell height in terminal rows.
    pub const CELL_HEIGHT: u16 = 2;

    /// Places the grid with its top-left corner at `(origin_x, origin_y)`.
    pub fn new(origin_x: u16, origin_y: u16, cell_width: u16, cell_height: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Centers a default-sized grid inside `area`.
    pub fn centered_in(area: Rect) -> Self {
        let width = Self::CELL_WIDTH * u16::from(BOARD_SIZE);
        let height = Self::CELL_HEIGHT * u16::from(BOARD_SIZE);
        Self::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            Self::CELL_WIDTH,
            Self::CELL_HEIGHT,
        )
    }

    /// Screen rectangle covered by the whole grid.
    pub fn area(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.cell_width * u16::from(BOARD_SIZE),
            self.cell_height * u16::from(BOARD_SIZE),
        )
    }

    /// Screen rectangle of one square.
    pub fn cell_rect(&self, square: Square) -> Rect {
        Rect::new(
            self.origin_x + u16::from(square.col()) * self.cell_width,
            self.origin_y + u16::from(square.row()) * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// The square under a terminal position, if any.
    pub fn square_at(&self, x: u16, y: u16) -> Option<Square> {
        let col = x.checked_sub(self.origin_x)? / self.cell_width;
        let row = y.checked_sub(self.origin_y)? / self.cell_height;
        Square::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(0, 0, Self::CELL_WIDTH, Self::CELL_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rect_and_hit_test_agree() {
        let geometry = BoardGeometry::new(10, 3, 5, 2);
        for square in Square::all() {
            let rect = geometry.cell_rect(square);
            assert_eq!(geometry.square_at(rect.x, rect.y), Some(square));
            assert_eq!(
                geometry.square_at(rect.x + rect.width - 1, rect.y + rect.height - 1),
                Some(square)
            );
        }
    }

    #[test]
    fn test_outside_grid_is_none() {
        let geometry = BoardGeometry::new(10, 3, 5, 2);
        assert_eq!(geometry.square_at(9, 3), None);
        assert_eq!(geometry.square_at(10, 2), None);
        assert_eq!(geometry.square_at(50, 3), None);
        assert_eq!(geometry.square_at(10, 19), None);
    }

    #[test]
    fn test_centered_in_area() {
        let geometry = BoardGeometry::centered_in(Rect::new(0, 0, 60, 20));
        assert_eq!(geometry.area(), Rect::new(10, 2, 40, 16));
    }
}
