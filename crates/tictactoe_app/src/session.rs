//! Event loop state machine.
//!
//! A [`Session`] owns the [`Game`] and is the only thing that mutates it.
//! Each [`InputEvent`] is handled synchronously and answered with a
//! [`Control`] telling the caller whether to keep going.

use super::input::InputEvent;
use super::settings::Settings;
use std::io::{self, Stdout, Write};
use tictactoe_core::{Game, GameStatus, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// Why the event loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The window was closed.
    CloseRequested,
    /// A headless run ran out of events.
    InputExhausted,
}

/// What the caller should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep polling for input.
    Continue,
    /// Stop the loop.
    Exit(Exit),
}

/// Game plus the settings needed to interpret input for it.
///
/// Round results are written as one line each to `W`, stdout unless
/// built with [`Session::with_output`].
#[derive(Debug)]
pub struct Session<W = Stdout> {
    game: Game,
    settings: Settings,
    output: W,
}

impl Session {
    /// Creates a session with a fresh game, announcing results on stdout.
    pub fn new(settings: Settings) -> Self {
        Self::with_output(settings, io::stdout())
    }
}

impl<W: Write> Session<W> {
    /// Creates a session with a fresh game, announcing results to `output`.
    #[instrument(skip_all)]
    pub fn with_output(settings: Settings, output: W) -> Self {
        Self {
            game: Game::new(),
            settings,
            output,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the sink round results are written to.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Handles one input event.
    #[instrument(skip(self), fields(status = ?self.game.status()))]
    pub fn handle(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::PointerPressed { x, y } => {
                self.click(x, y);
                Control::Continue
            }
            InputEvent::KeyPressed(key) if key == *self.settings.restart_key() => {
                self.game.restart();
                Control::Continue
            }
            InputEvent::KeyPressed(key) => {
                debug!(?key, "Key ignored");
                Control::Continue
            }
            InputEvent::CloseRequested => {
                info!("Close requested");
                Control::Exit(Exit::CloseRequested)
            }
        }
    }

    /// Feeds `events` through [`Session::handle`] until one asks to exit.
    #[instrument(skip_all)]
    pub fn run<I>(&mut self, events: I) -> Exit
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if let Control::Exit(exit) = self.handle(event) {
                return exit;
            }
        }
        Exit::InputExhausted
    }

    fn click(&mut self, x: f32, y: f32) {
        let Some(position) = self.settings.geometry().cell_at(x, y) else {
            debug!(x, y, "Click outside the board");
            return;
        };
        self.play(position);
    }

    fn play(&mut self, position: Position) {
        match self.game.play(position) {
            Ok(GameStatus::InProgress) => {}
            Ok(status) => {
                if let Some(outcome) = status.outcome() {
                    self.announce(outcome);
                }
            }
            Err(error) => debug!(%position, %error, "Move ignored"),
        }
    }

    /// Writes the end-of-round line.
    fn announce(&mut self, outcome: Outcome) {
        if let Err(error) = writeln!(self.output, "{}", outcome) {
            warn!(%outcome, %error, "Failed to announce result");
        }
    }
}
