//! Translation of raw window input into game input.

use eframe::egui::{Event, Key, Pos2};

/// Input the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button went down at canvas-relative `(x, y)`.
    PointerPressed {
        /// Horizontal offset from the canvas' left edge.
        x: f32,
        /// Vertical offset from the canvas' top edge.
        y: f32,
    },
    /// A key went down (auto-repeat excluded).
    KeyPressed(Key),
    /// The window was asked to close.
    CloseRequested,
}

/// Picks the events the game cares about out of one frame of egui input.
///
/// Pointer positions are made relative to `origin`, the canvas' top-left
/// corner in screen coordinates. A close request is appended last so that
/// input from the same frame is still handled.
pub fn translate(events: &[Event], origin: Pos2, close_requested: bool) -> Vec<InputEvent> {
    let mut translated: Vec<InputEvent> = events
        .iter()
        .filter_map(|event| match event {
            Event::PointerButton {
                pos, pressed: true, ..
            } => Some(InputEvent::PointerPressed {
                x: pos.x - origin.x,
                y: pos.y - origin.y,
            }),
            Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => Some(InputEvent::KeyPressed(*key)),
            _ => None,
        })
        .collect();

    if close_requested {
        translated.push(InputEvent::CloseRequested);
    }
    translated
}
