//! Start-up prompts: game mode, AI depth and AI profile.

use std::io::{BufRead, Write};

use negamax_engine::Profile;

use crate::error::ConsoleError;

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 5;

/// Who sits where. Black moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Random,
    Ai,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsAi,
    RandomVsHuman,
    RandomVsAi,
    AiVsAi,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::HumanVsHuman,
        GameMode::HumanVsAi,
        GameMode::RandomVsHuman,
        GameMode::RandomVsAi,
        GameMode::AiVsAi,
    ];

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
            GameMode::RandomVsHuman => "Random vs Human",
            GameMode::RandomVsAi => "Random vs AI",
            GameMode::AiVsAi => "AI vs AI",
        }
    }

    /// `[black, white]`
    pub fn seats(self) -> [Seat; 2] {
        match self {
            GameMode::HumanVsHuman => [Seat::Human, Seat::Human],
            GameMode::HumanVsAi => [Seat::Human, Seat::Ai],
            GameMode::RandomVsHuman => [Seat::Random, Seat::Human],
            GameMode::RandomVsAi => [Seat::Random, Seat::Ai],
            GameMode::AiVsAi => [Seat::Ai, Seat::Ai],
        }
    }

    pub fn ai_count(self) -> usize {
        self.seats().iter().filter(|s| **s == Seat::Ai).count()
    }
}

/// Prompts on `output` and reads answers from `input`. Out-of-range or
/// unparsable answers are reported and asked again.
pub struct Menu<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn ask_number(&mut self, prompt: &str, min: u8, max: u8) -> Result<u8, ConsoleError> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<u8>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                Ok(_) => writeln!(self.output, "Please enter a value between {min} and {max}")?,
                Err(_) => writeln!(self.output, "Please enter a number")?,
            }
        }
    }

    pub fn game_mode(&mut self) -> Result<GameMode, ConsoleError> {
        writeln!(self.output, "\nSelect mode:")?;
        for (i, mode) in GameMode::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, mode.label())?;
        }
        let n = self.ask_number("\nEnter choice (1-5): ", 1, GameMode::ALL.len() as u8)?;
        Ok(GameMode::ALL[usize::from(n - 1)])
    }

    pub fn depth(&mut self, ai: usize) -> Result<u8, ConsoleError> {
        self.ask_number(
            &format!("Select AI {ai} depth ({MIN_DEPTH} easy - {MAX_DEPTH} hard): "),
            MIN_DEPTH,
            MAX_DEPTH,
        )
    }

    pub fn profile(&mut self, ai: usize) -> Result<Profile, ConsoleError> {
        writeln!(self.output, "\nAI {ai} profile:")?;
        for (i, p) in Profile::ALL.iter().enumerate() {
            writeln!(self.output, "  {} - {} ({})", i + 1, p.name(), p.description())?;
        }
        let n = self.ask_number("Profile number: ", 1, Profile::ALL.len() as u8)?;
        Ok(Profile::ALL[usize::from(n - 1)])
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod menu_tests;
