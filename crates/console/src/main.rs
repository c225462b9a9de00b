//! Play Reversi in the terminal.

use std::io::{self, StdinLock, Stdout};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use negamax_engine::{EvaluationWeights, Profile, SearchConfig, SearchPlayer, Searcher};
use random_engine::RandomPlayer;
use reversi_console::menu::{MAX_DEPTH, MIN_DEPTH};
use reversi_console::{GameMode, InteractivePlayer, Menu, Renderer, Seat, Session};
use reversi_core::Player;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reversi in the terminal")]
struct Cli {
    /// 1 Human vs Human, 2 Human vs AI, 3 Random vs Human, 4 Random vs AI, 5 AI vs AI
    #[arg(long, short = 'm')]
    mode: Option<u8>,

    /// Search depth for every AI (1-5)
    #[arg(long, short = 'd')]
    depth: Option<u8>,

    /// Weight profile for every AI
    #[arg(long, short = 'p')]
    profile: Option<Profile>,

    /// Custom weights file (TOML); overrides --profile
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Log search decisions
    #[arg(long)]
    debug: bool,
}

/// How an AI seat evaluates positions.
enum Brain {
    Preset(Profile),
    Custom(EvaluationWeights),
}

fn ai_player(depth: u8, brain: &Brain) -> Box<dyn Player> {
    match brain {
        Brain::Preset(profile) => Box::new(SearchPlayer::new(depth, *profile)),
        Brain::Custom(weights) => Box::new(SearchPlayer::with_searcher(
            depth,
            Searcher::new(*weights, SearchConfig::default()),
            format!("AI depth {depth} (custom)"),
        )),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Some(depth) = cli.depth {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            bail!("depth must be between {MIN_DEPTH} and {MAX_DEPTH}");
        }
    }
    let custom = cli
        .weights
        .as_ref()
        .map(|path| {
            EvaluationWeights::load(path).with_context(|| format!("loading {}", path.display()))
        })
        .transpose()?;

    let mut input: StdinLock<'static> = io::stdin().lock();
    let mut output: Stdout = io::stdout();
    let mut menu = Menu::new(&mut input, &mut output);

    let mode = match cli.mode {
        Some(n) => GameMode::from_number(n).context("mode must be between 1 and 5")?,
        None => menu.game_mode()?,
    };

    let seats = mode.seats();
    let mut ai_seats: Vec<Option<(u8, Brain)>> = Vec::with_capacity(2);
    let mut ai_number = 0;
    for seat in seats {
        if seat != Seat::Ai {
            ai_seats.push(None);
            continue;
        }
        ai_number += 1;
        let depth = match cli.depth {
            Some(depth) => depth,
            None => menu.depth(ai_number)?,
        };
        let brain = match (&custom, cli.profile) {
            (Some(weights), _) => Brain::Custom(*weights),
            (None, Some(profile)) => Brain::Preset(profile),
            (None, None) => Brain::Preset(menu.profile(ai_number)?),
        };
        ai_seats.push(Some((depth, brain)));
    }
    drop(menu);

    let renderer = Renderer::new(io::stdout());
    let hints = seats.map(|s| s == Seat::Human);
    let mut human = Some(InteractivePlayer::new(input, io::stdout()));

    let mut session = if seats == [Seat::Human, Seat::Human] {
        let Some(human) = human.take() else {
            bail!("no terminal input available");
        };
        Session::shared(Box::new(human), renderer)
    } else {
        let mut players: Vec<Box<dyn Player>> = Vec::with_capacity(2);
        for (seat, ai) in seats.into_iter().zip(&ai_seats) {
            let player: Box<dyn Player> = match (seat, ai) {
                (Seat::Ai, Some((depth, brain))) => ai_player(*depth, brain),
                (Seat::Random, _) => Box::new(RandomPlayer::new()),
                (Seat::Human, _) => match human.take() {
                    Some(human) => Box::new(human),
                    None => bail!("only one seat can read the terminal"),
                },
                (Seat::Ai, None) => bail!("AI seat was not configured"),
            };
            players.push(player);
        }
        let Ok([black, white]) = <[Box<dyn Player>; 2]>::try_from(players) else {
            bail!("expected two players");
        };
        Session::new(black, white, renderer)
    };
    session = session.with_hints(hints[0], hints[1]).with_spinner(true);

    println!("\n{}", mode.label());
    if session.run()?.is_none() {
        println!("Game abandoned.");
    }
    Ok(())
}
