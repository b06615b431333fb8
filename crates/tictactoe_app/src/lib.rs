//! Two-player tic-tac-toe in a native window.
//!
//! # Architecture
//!
//! - **Settings**: canvas geometry, colours and the restart key
//! - **Input**: egui events translated into [`InputEvent`]s
//! - **Session**: the event loop state machine that owns the [`Game`]
//! - **Render**: board to draw primitives, primitives to an egui painter
//! - **App**: the eframe shell that wires the pieces together each frame
//!
//! Everything except [`TicTacToeApp`] and [`run`] works without a display,
//! so the whole click → move → evaluate → draw cycle can be driven from tests
//! through [`Session::run`] and [`render::board_shapes`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod error;
mod geometry;
mod input;
pub mod render;
mod session;
mod settings;

pub use app::{TicTacToeApp, run};
pub use error::AppError;
pub use geometry::BoardGeometry;
pub use input::{InputEvent, translate};
pub use session::{Control, Exit, Session};
pub use settings::{Settings, Theme};

pub use tictactoe_core::{Game, GameStatus, Player, Position};
