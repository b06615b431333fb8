//! Window, colour and key settings.

use super::geometry::BoardGeometry;
use derive_getters::Getters;
use eframe::egui::{Color32, Key};

/// Colours and stroke widths used to draw the board.
#[derive(Debug, Clone, Copy, PartialEq, Getters, derive_new::new)]
pub struct Theme {
    /// Canvas fill.
    background: Color32,
    /// Grid line colour.
    grid_line: Color32,
    /// Grid line width.
    grid_line_width: f32,
    /// O ring colour.
    circle: Color32,
    /// O ring thickness.
    circle_width: f32,
    /// X stroke colour.
    cross: Color32,
    /// X stroke thickness.
    cross_width: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(
            Color32::from_rgb(28, 170, 156),
            Color32::from_rgb(23, 145, 135),
            5.0,
            Color32::from_rgb(239, 231, 200),
            15.0,
            Color32::from_rgb(66, 66, 66),
            20.0,
        )
    }
}

/// Everything the window needs besides the game itself.
#[derive(Debug, Clone, PartialEq, Getters, derive_new::new)]
pub struct Settings {
    /// Window title.
    title: String,
    /// Canvas and cell geometry.
    geometry: BoardGeometry,
    /// Colours and stroke widths.
    theme: Theme,
    /// Key that starts a new round.
    restart_key: Key,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(
            "Tic Tac Toe".to_string(),
            BoardGeometry::default(),
            Theme::default(),
            Key::R,
        )
    }
}
