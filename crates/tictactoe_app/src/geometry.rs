//! Mapping between canvas pixels and board cells.

use eframe::egui::{Pos2, Rect, pos2, vec2};
use tictactoe_core::{BOARD_SIZE, Position};
use tracing::instrument;

/// Square canvas split into a 3x3 grid of equal cells.
///
/// All lengths are logical pixels. Cell-relative sizes use integer
/// division so the drawing lands on whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct BoardGeometry {
    canvas: u32,
}

impl BoardGeometry {
    /// Width and height of the canvas.
    pub fn canvas(&self) -> u32 {
        self.canvas
    }

    /// Side length of one cell.
    pub fn cell_size(&self) -> u32 {
        self.canvas / BOARD_SIZE as u32
    }

    /// Outer radius of an O mark.
    pub fn circle_radius(&self) -> u32 {
        self.cell_size() / 3
    }

    /// Distance between a cell edge and the ends of an X stroke.
    pub fn cross_inset(&self) -> u32 {
        self.cell_size() / 4
    }

    /// Maps a canvas-relative pointer position to the cell under it.
    ///
    /// Anything left of, above, right of or below the canvas is `None`,
    /// as is every point on a canvas too small to hold a cell.
    #[instrument]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Position> {
        let extent = self.canvas as f32;
        if !(0.0..extent).contains(&x) || !(0.0..extent).contains(&y) {
            return None;
        }
        let cell = self.cell_size();
        if cell == 0 {
            return None;
        }
        let row = (y as u32 / cell) as usize;
        let col = (x as u32 / cell) as usize;
        Position::from_row_col(row, col)
    }

    /// Canvas-relative rectangle covered by `position`.
    pub fn cell_rect(&self, position: Position) -> Rect {
        let cell = self.cell_size() as f32;
        let min = pos2(position.col() as f32 * cell, position.row() as f32 * cell);
        Rect::from_min_size(min, vec2(cell, cell))
    }

    /// Canvas-relative centre of `position`.
    pub fn cell_center(&self, position: Position) -> Pos2 {
        let cell = self.cell_size();
        pos2(
            (position.col() as u32 * cell + cell / 2) as f32,
            (position.row() as u32 * cell + cell / 2) as f32,
        )
    }

    /// The whole canvas as a rectangle anchored at the origin.
    pub fn canvas_rect(&self) -> Rect {
        let extent = self.canvas as f32;
        Rect::from_min_size(Pos2::ZERO, vec2(extent, extent))
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_size(), 100);
        assert_eq!(geometry.circle_radius(), 33);
        assert_eq!(geometry.cross_inset(), 25);
    }

    #[test]
    fn test_click_near_origin_is_top_left() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_at(5.0, 5.0), Some(Position::TopLeft));
    }

    #[test]
    fn test_cell_boundaries() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_at(99.9, 0.0), Some(Position::TopLeft));
        assert_eq!(geometry.cell_at(100.0, 0.0), Some(Position::TopCenter));
        assert_eq!(geometry.cell_at(250.0, 150.0), Some(Position::MiddleRight));
        assert_eq!(geometry.cell_at(299.5, 299.5), Some(Position::BottomRight));
    }

    #[test]
    fn test_click_outside_canvas() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_at(300.0, 10.0), None);
        assert_eq!(geometry.cell_at(10.0, 300.0), None);
        assert_eq!(geometry.cell_at(-1.0, 10.0), None);
        assert_eq!(geometry.cell_at(10.0, -0.5), None);
    }

    #[test]
    fn test_canvas_smaller_than_grid_has_no_cells() {
        for canvas in [0, 1, 2] {
            let geometry = BoardGeometry::new(canvas);
            assert_eq!(geometry.cell_size(), 0);
            assert_eq!(geometry.cell_at(0.5, 0.5), None);
        }
        assert_eq!(BoardGeometry::new(3).cell_at(2.5, 0.5), Some(Position::TopRight));
    }

    #[test]
    fn test_cell_center_and_rect() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_center(Position::Center), pos2(150.0, 150.0));
        let rect = geometry.cell_rect(Position::BottomLeft);
        assert_eq!(rect.min, pos2(0.0, 200.0));
        assert_eq!(rect.max, pos2(100.0, 300.0));
    }
}
