//! One game at the terminal.

use std::io::Write;

use log::info;
use reversi_core::{Game, Outcome, Player};

use crate::error::ConsoleError;
use crate::render::Renderer;
use crate::spinner::Spinner;

/// Drives a [`Game`] between the seated players and narrates it.
///
/// `seats[color]` indexes into `players`, so a single player (two people
/// at one keyboard) can hold both colours.
pub struct Session<W: Write> {
    players: Vec<Box<dyn Player>>,
    seats: [usize; 2],
    hints: [bool; 2],
    spinner: bool,
    renderer: Renderer<W>,
}

impl<W: Write> Session<W> {
    pub fn new(black: Box<dyn Player>, white: Box<dyn Player>, renderer: Renderer<W>) -> Self {
        Self {
            players: vec![black, white],
            seats: [0, 1],
            hints: [false; 2],
            spinner: false,
            renderer,
        }
    }

    /// The same player moves for both colours.
    pub fn shared(player: Box<dyn Player>, renderer: Renderer<W>) -> Self {
        Self {
            players: vec![player],
            seats: [0, 0],
            hints: [false; 2],
            spinner: false,
            renderer,
        }
    }

    /// Mark legal moves on the board when Black (`black`) or White
    /// (`white`) is to move.
    pub fn with_hints(mut self, black: bool, white: bool) -> Self {
        self.hints = [black, white];
        self
    }

    /// Show a spinner while search-based players think.
    pub fn with_spinner(mut self, on: bool) -> Self {
        self.spinner = on;
        self
    }

    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }

    pub fn run(&mut self) -> Result<Option<Outcome>, ConsoleError> {
        self.run_from(Game::new())
    }

    /// Play `game` to the end. Returns `None` if a player gave up.
    pub fn run_from(&mut self, mut game: Game) -> Result<Option<Outcome>, ConsoleError> {
        for player in &mut self.players {
            player.new_game();
        }
        self.renderer.line("\nGame started!")?;

        while let Some(color) = game.to_move() {
            let hints = self.hints[color.idx()].then_some(color);
            self.renderer.board(game.board(), hints)?;

            let player = &mut self.players[self.seats[color.idx()]];
            self.renderer.turn(color, player.name())?;
            self.renderer.flush()?;

            let spinner = (self.spinner && player.is_search_based())
                .then(|| Spinner::start("AI thinking"));
            let choice = player.get_move(game.board(), color);
            if let Some(spinner) = spinner {
                spinner.stop();
            }

            let Some(mv) = choice else {
                info!("{} ({color}) left the game", player.name());
                self.renderer.line(&format!("{} left the game.", player.name()))?;
                return Ok(None);
            };
            let flipped = game.play(mv).map_err(|source| ConsoleError::IllegalMove {
                player: player.name().to_string(),
                source,
            })?;
            self.renderer.played(color, mv, flipped)?;
            if game.to_move() == Some(color) {
                self.renderer.skipped(color.other())?;
            }
        }

        self.renderer.board(game.board(), None)?;
        let outcome = game.outcome();
        if let Some(outcome) = outcome {
            self.renderer.outcome(outcome)?;
        }
        self.renderer.flush()?;
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
