use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use seabattle::{init_logging, Difficulty, Game, Perspective, Side, BOARD_SIZE, SYMBOL_BLANK};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DifficultyArg {
    Normal,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the automated opponent.
    Play {
        #[arg(long, value_enum, default_value_t = DifficultyArg::Normal)]
        difficulty: DifficultyArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run batch self-play games (random player vs the heuristic) and report stats.
    Sim {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, value_enum, default_value_t = DifficultyArg::Normal)]
        difficulty: DifficultyArg,
        #[arg(long, help = "Fix RNG seed for reproducible runs")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { difficulty, seed } => play(difficulty.into(), seed),
        Commands::Sim {
            games,
            difficulty,
            seed,
        } => sim(games, difficulty.into(), seed),
    }
}

fn print_boards(game: &Game) {
    let own = game.view(Side::Human, Perspective::Owner);
    let target = game.view(Side::Automated, Perspective::Opponent);
    println!(
        "{:10}PLAYER SHIPS {}{:26}TARGET SHIPS {}",
        "",
        own.lives(),
        "",
        target.lives()
    );
    let ruler: String = (0..BOARD_SIZE).map(|c| format!("|{}|", c)).collect();
    println!("{:3}{}{:10}{}", "", ruler, "", ruler);
    for row in 0..BOARD_SIZE {
        let mut line = format!("|{}| ", row);
        for &symbol in own.row(row) {
            line.push(symbol);
            line.push_str("  ");
        }
        line.push_str(&format!("{:6}|{}| ", "", row));
        for &symbol in target.row(row) {
            line.push(symbol);
            line.push_str("  ");
        }
        println!("{}", line);
    }
}

/// Prompt until the caller enters a two-digit row/col pair or quits.
fn read_coordinate() -> anyhow::Result<Option<(usize, usize)>> {
    loop {
        print!("Enter row, col (like 12, 65, etc.) or q - to exit game: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();
        if input.starts_with('q') {
            return Ok(None);
        }
        if input.len() == 2 && input.chars().all(|c| c.is_ascii_digit()) {
            let mut digits = input.chars();
            let row = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as usize;
            let col = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as usize;
            return Ok(Some((row, col)));
        }
        println!("Wrong input - {}!", input);
    }
}

fn play(difficulty: Difficulty, seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(s) = seed {
        info!("using fixed seed {} (game will be reproducible)", s);
    }
    let mut rng = make_rng(seed);
    let mut game = Game::new(difficulty, &mut rng)?;

    println!("Welcome to Sea Battle! Difficulty: {:?}", difficulty);
    print_boards(&game);

    loop {
        let (row, col) = match read_coordinate()? {
            Some(coord) => coord,
            None => break,
        };
        match game.human_strike(row, col) {
            Ok(_) => {}
            Err(e) => {
                println!("Wrong cell selected! {}. Try again.", e);
                continue;
            }
        }
        if game.check_win(Side::Automated) {
            print_boards(&game);
            println!("Human win!!!");
            return Ok(());
        }

        println!("AI...");
        thread::sleep(Duration::from_secs(1));
        if let Some(((r, c), outcome)) = game.automated_turn(&mut rng) {
            info!("opponent fired at ({}, {}): {:?}", r, c, outcome);
        }
        print_boards(&game);
        if game.check_win(Side::Human) {
            println!("AI win!!!");
            return Ok(());
        }
    }
    Ok(())
}

/// Pick a random untargeted cell on the opponent view: blanks are the only
/// cells a strike can still land on.
fn random_open_cell<R: Rng>(game: &Game, rng: &mut R) -> Option<(usize, usize)> {
    let view = game.view(Side::Automated, Perspective::Opponent);
    let open: Vec<(usize, usize)> = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .filter(|&(r, c)| view.symbol(r, c) == SYMBOL_BLANK)
        .collect();
    if open.is_empty() {
        None
    } else {
        Some(open[rng.random_range(0..open.len())])
    }
}

fn sim(games: usize, difficulty: Difficulty, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut human_wins = 0usize;
    let mut ai_wins = 0usize;
    let mut total_steps = [0usize; 2];

    for n in 0..games {
        let mut game = Game::new(difficulty, &mut rng)?;
        let mut steps = [0usize; 2];
        let winner = loop {
            let (row, col) = random_open_cell(&game, &mut rng)
                .ok_or_else(|| anyhow::anyhow!("no cells left to target"))?;
            steps[0] += 1;
            game.human_strike(row, col)
                .map_err(|e| anyhow::anyhow!(e))?;
            if game.check_win(Side::Automated) {
                break Side::Human;
            }
            steps[1] += 1;
            game.automated_turn(&mut rng);
            if game.check_win(Side::Human) {
                break Side::Automated;
            }
        };
        match winner {
            Side::Human => human_wins += 1,
            Side::Automated => ai_wins += 1,
        }
        total_steps[0] += steps[0];
        total_steps[1] += steps[1];
        info!("game {}: {:?} won in {:?} steps", n + 1, winner, steps);
    }

    println!(
        "{} games at {:?}: random player {} wins, AI {} wins",
        games, difficulty, human_wins, ai_wins
    );
    println!(
        "average steps per game: random player {:.1}, AI {:.1}",
        total_steps[0] as f64 / games as f64,
        total_steps[1] as f64 / games as f64
    );
    Ok(())
}
