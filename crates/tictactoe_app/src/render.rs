//! Tic-tac-toe board rendering.
//!
//! Drawing is split in two steps. [`board_shapes`] turns a board into a
//! list of canvas-relative [`Shape`]s and needs nothing but the board and
//! the settings. [`paint`] pushes those shapes onto an egui painter.

use super::settings::Settings;
use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, pos2};
use tictactoe_core::{BOARD_SIZE, Board, Player, Position, Square};
use tracing::instrument;

/// One primitive draw call, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Solid rectangle.
    Fill {
        /// Area to cover.
        rect: Rect,
        /// Fill colour.
        color: Color32,
    },
    /// Straight stroke between two points.
    Line {
        /// Start point.
        from: Pos2,
        /// End point.
        to: Pos2,
        /// Stroke width.
        width: f32,
        /// Stroke colour.
        color: Color32,
    },
    /// Ring whose outer edge sits at `radius`, `width` thick toward the centre.
    Ring {
        /// Ring centre.
        center: Pos2,
        /// Outer radius.
        radius: f32,
        /// Ring thickness.
        width: f32,
        /// Ring colour.
        color: Color32,
    },
}

/// Builds the full frame for `board`: background, grid, then marks.
#[instrument(skip_all)]
pub fn board_shapes(board: &Board, settings: &Settings) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(1 + 2 * (BOARD_SIZE - 1) + 2 * board.squares().len());
    shapes.push(Shape::Fill {
        rect: settings.geometry().canvas_rect(),
        color: *settings.theme().background(),
    });
    shapes.extend(grid_lines(settings));
    for (position, square) in board.iter() {
        if let Square::Occupied(player) = square {
            shapes.extend(mark_shapes(player, position, settings));
        }
    }
    shapes
}

/// Two horizontal and two vertical lines splitting the canvas into cells.
fn grid_lines(settings: &Settings) -> Vec<Shape> {
    let geometry = settings.geometry();
    let theme = settings.theme();
    let extent = geometry.canvas() as f32;
    let cell = geometry.cell_size() as f32;

    (1..BOARD_SIZE)
        .flat_map(|i| {
            let offset = i as f32 * cell;
            [
                (pos2(0.0, offset), pos2(extent, offset)),
                (pos2(offset, 0.0), pos2(offset, extent)),
            ]
        })
        .map(|(from, to)| Shape::Line {
            from,
            to,
            width: *theme.grid_line_width(),
            color: *theme.grid_line(),
        })
        .collect()
}

/// Shapes for a single mark: a ring for O, two diagonal strokes for X.
fn mark_shapes(player: Player, position: Position, settings: &Settings) -> Vec<Shape> {
    let geometry = settings.geometry();
    let theme = settings.theme();

    match player {
        Player::O => vec![Shape::Ring {
            center: geometry.cell_center(position),
            radius: geometry.circle_radius() as f32,
            width: *theme.circle_width(),
            color: *theme.circle(),
        }],
        Player::X => {
            let inset = geometry.cross_inset() as f32;
            let cell = geometry.cell_rect(position).shrink(inset);
            let stroke = |from, to| Shape::Line {
                from,
                to,
                width: *theme.cross_width(),
                color: *theme.cross(),
            };
            vec![
                stroke(cell.left_top(), cell.right_bottom()),
                stroke(cell.right_top(), cell.left_bottom()),
            ]
        }
    }
}

/// Paints `shapes` with the canvas origin moved to `offset`.
pub fn paint(painter: &Painter, offset: Vec2, shapes: &[Shape]) {
    for shape in shapes {
        match *shape {
            Shape::Fill { rect, color } => {
                painter.rect_filled(rect.translate(offset), 0.0, color);
            }
            Shape::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment([from + offset, to + offset], Stroke::new(width, color));
            }
            Shape::Ring {
                center,
                radius,
                width,
                color,
            } => {
                // egui centres strokes on the path
                painter.circle_stroke(
                    center + offset,
                    radius - width / 2.0,
                    Stroke::new(width, color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(shapes: &[Shape]) -> (usize, usize, usize) {
        shapes.iter().fold((0, 0, 0), |(f, l, r), shape| match shape {
            Shape::Fill { .. } => (f + 1, l, r),
            Shape::Line { .. } => (f, l + 1, r),
            Shape::Ring { .. } => (f, l, r + 1),
        })
    }

    #[test]
    fn test_empty_board_is_background_and_grid() {
        let shapes = board_shapes(&Board::new(), &Settings::default());
        assert_eq!(count(&shapes), (1, 4, 0));
        assert!(matches!(shapes[0], Shape::Fill { .. }));
    }

    #[test]
    fn test_grid_lines_split_canvas_in_thirds() {
        let shapes = grid_lines(&Settings::default());
        let endpoints: Vec<(Pos2, Pos2)> = shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(
            endpoints,
            vec![
                (pos2(0.0, 100.0), pos2(300.0, 100.0)),
                (pos2(100.0, 0.0), pos2(100.0, 300.0)),
                (pos2(0.0, 200.0), pos2(300.0, 200.0)),
                (pos2(200.0, 0.0), pos2(200.0, 300.0)),
            ]
        );
    }

    #[test]
    fn test_cross_is_inset_from_cell_edges() {
        let shapes = mark_shapes(Player::X, Position::Center, &Settings::default());
        assert_eq!(shapes.len(), 2);
        match shapes[0] {
            Shape::Line { from, to, width, .. } => {
                assert_eq!(from, pos2(125.0, 125.0));
                assert_eq!(to, pos2(175.0, 175.0));
                assert_eq!(width, 20.0);
            }
            other => panic!("expected a line, got {other:?}"),
        }
        match shapes[1] {
            Shape::Line { from, to, .. } => {
                assert_eq!(from, pos2(175.0, 125.0));
                assert_eq!(to, pos2(125.0, 175.0));
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn test_circle_is_centred_ring() {
        let shapes = mark_shapes(Player::O, Position::TopRight, &Settings::default());
        assert_eq!(
            shapes,
            vec![Shape::Ring {
                center: pos2(250.0, 50.0),
                radius: 33.0,
                width: 15.0,
                color: Color32::from_rgb(239, 231, 200),
            }]
        );
    }

    #[test]
    fn test_marks_follow_board() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::Center, Player::O).unwrap();
        board.place(Position::BottomRight, Player::X).unwrap();

        let shapes = board_shapes(&board, &Settings::default());
        assert_eq!(count(&shapes), (1, 4 + 2 * 2, 1));
    }
}
