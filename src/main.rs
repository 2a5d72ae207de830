//! memory-match: play the matching game against the computer in a terminal.
//!
//! ## Usage
//!
//! - `memory-match play` - Play interactively (type a position, `q` quits)
//! - `memory-match simulate --games 100` - Random picker vs. the computer
//! - `memory-match replay game.bin` - Verify a saved game record

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use memory_match::{
    BoardSnapshot, CardStatus, GameBuilder, GameConfig, GameOutcome, GameRecord, GameRng, GameSession,
    MatchGame, Player, PlayerConfig, PlayerId, Position, PresentationAdapter, TimingConfig,
};

/// Memory-matching card game against a computer opponent
#[derive(Parser)]
#[command(name = "memory-match")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Seed for the deal and the computer's picks
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "Player")]
        human_name: String,
        #[arg(long, default_value = "Computer")]
        computer_name: String,
        /// Let the computer open the game
        #[arg(long)]
        computer_first: bool,
        /// Wait out the reveal and resolve pauses
        #[arg(long)]
        animate: bool,
        /// Write the finished game record to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Pit a random picker against the computer
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: u64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Replay a saved game record and check it is reproducible
    Replay { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Play {
            seed,
            human_name,
            computer_name,
            computer_first,
            animate,
            save,
        }) => {
            let mut players = vec![PlayerConfig::human(human_name), PlayerConfig::computer(computer_name)];
            if computer_first {
                players.reverse();
            }
            let mut config = GameConfig::default().with_players(players);
            config.seed = seed;
            if !animate {
                config = config.with_timing(TimingConfig::instant());
            }
            play(config, save)
        }
        Some(Commands::Simulate { games, seed }) => simulate(games, seed),
        Some(Commands::Replay { path }) => replay(&path),
        None => play(GameConfig::default().with_timing(TimingConfig::instant()), None),
    }
}

/// Draws the table as a 13-column grid on stdout.
#[derive(Default)]
struct TerminalAdapter;

impl PresentationAdapter for TerminalAdapter {
    fn render(&mut self, board: &BoardSnapshot, players: &[Player], current_player: &str) {
        println!();
        for (position, status, card) in board.iter() {
            let cell = match (status, card) {
                (CardStatus::Matched, _) => "--".to_string(),
                (_, Some(card)) => card.token(),
                (_, None) => format!("{:02}", position.0),
            };
            print!("{cell:>11}");
            if position.index() % 13 == 12 {
                println!();
            }
        }
        println!();
        let scores: Vec<String> = players.iter().map(|p| format!("{}: {}", p.name, p.score)).collect();
        println!("{}", scores.join("   "));
        println!("{current_player} to play.");
    }

    fn announce_game_over(&mut self, winner: Option<&str>) {
        match winner {
            Some(name) => println!("Game over! {name} wins."),
            None => println!("Game over! It's a tie."),
        }
    }
}

fn play(config: GameConfig, save: Option<PathBuf>) -> anyhow::Result<()> {
    let mut session = GameSession::new(config, TerminalAdapter);
    session.start_session()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while session.game().is_some_and(|g| !g.is_over()) {
        if let Some(step) = session.pending_step() {
            std::thread::sleep(step.delay);
            session.advance()?;
            continue;
        }

        print!("card> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }
        match input.parse::<u16>() {
            Ok(index) => {
                session.on_card_activated(Position::new(index))?;
            }
            Err(_) => println!("Enter a card position or `q`."),
        }
    }

    if let (Some(path), Some(game)) = (save, session.game()) {
        let bytes = game.record().to_bytes()?;
        std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        println!("Saved game record to {}", path.display());
    }
    session.end_session();
    Ok(())
}

fn simulate(games: u64, seed: u64) -> anyhow::Result<()> {
    let mut wins = [0u64; 2];
    let mut ties = 0u64;
    let mut computer_pairs = 0u64;

    for i in 0..games {
        let game_seed = seed.wrapping_add(i);
        let config = GameConfig::default()
            .with_seed(game_seed)
            .with_timing(TimingConfig::instant());
        let mut game = GameBuilder::new(config).build()?;
        let mut picker = GameRng::new(game_seed).for_context("stand-in");

        play_out(&mut game, &mut picker)?;

        match game.outcome() {
            Some(GameOutcome::Winner(id)) => wins[id.index()] += 1,
            Some(GameOutcome::Tie) | None => ties += 1,
        }
        computer_pairs += u64::from(game.player(PlayerId::new(1)).score);
    }

    println!("games: {games}");
    println!("random picker wins: {}", wins[0]);
    println!("computer wins: {}", wins[1]);
    println!("ties: {ties}");
    if games > 0 {
        println!("computer pairs per game: {:.2}", computer_pairs as f64 / games as f64);
    }
    Ok(())
}

/// Finish a game with the human seat flipping random face-down cards.
fn play_out(game: &mut MatchGame, picker: &mut GameRng) -> anyhow::Result<()> {
    while !game.is_over() {
        if game.pending_step().is_some() {
            game.advance()?;
            continue;
        }
        let hidden = game.board().hidden_positions();
        let pair = picker.sample(&hidden, 2);
        for position in pair {
            game.activate_card(position)?;
        }
    }
    Ok(())
}

fn replay(path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let record = GameRecord::from_bytes(&bytes)?;
    let game = MatchGame::replay(&record)?;

    println!("seed: {}", record.seed);
    println!("moves: {}", record.moves.len());
    for (_, player) in game.players().iter() {
        println!("{}: {} pairs", player.name, player.score);
    }
    match game.winner_name() {
        Some(name) => println!("winner: {name}"),
        None if game.is_over() => println!("tie"),
        None => println!("unfinished"),
    }
    Ok(())
}
