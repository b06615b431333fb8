//! eframe shell around a [`Session`].

use super::error::AppError;
use super::input::translate;
use super::render::{board_shapes, paint};
use super::session::{Control, Session};
use super::settings::Settings;
use eframe::egui;
use tracing::{info, instrument};

/// The windowed game.
///
/// Every frame drains that frame's input into the session, then draws the
/// board from scratch.
pub struct TicTacToeApp {
    session: Session,
}

impl TicTacToeApp {
    /// Creates the app with a fresh game.
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(settings),
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let origin = response.rect.min;

                let events = ui.input(|i| {
                    translate(&i.events, origin, i.viewport().close_requested())
                });
                for event in events {
                    if let Control::Exit(exit) = self.session.handle(event) {
                        info!(?exit, "Leaving event loop");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        break;
                    }
                }

                let shapes = board_shapes(self.session.game().board(), self.session.settings());
                paint(&painter, origin.to_vec2(), &shapes);
            });
    }
}

/// Opens the game window and blocks until it is closed.
#[instrument(skip(settings))]
pub fn run(settings: Settings) -> Result<(), AppError> {
    let extent = settings.geometry().canvas() as f32;
    let title = settings.title().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([extent, extent])
            .with_resizable(false),
        ..Default::default()
    };

    info!(%title, extent, "Opening window");
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(settings)))),
    )?;
    info!("Window closed");
    Ok(())
}
