#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, ui, ExternalTargeting, FleetPlacer, GameConfig, Match, RandomTargeting, Seat,
    Side, StdConsole, DEFAULT_AI_DELAY_MS, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::{thread, time::Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE as u8, value_parser = board_size())]
        size: u8,
        #[arg(
            long,
            default_value_t = DEFAULT_AI_DELAY_MS,
            help = "Pause before the computer fires"
        )]
        delay_ms: u64,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE as u8, value_parser = board_size())]
        size: u8,
    },
}

#[cfg(feature = "std")]
fn board_size() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(DEFAULT_BOARD_SIZE as i64..=MAX_BOARD_SIZE as i64)
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local {
            seed,
            size,
            delay_ms,
        } => {
            let mut rng = seeded_rng(seed);
            let placer = FleetPlacer::from_config(&GameConfig::with_size(size as usize))?;
            let user_board = placer.place_until_success(&mut rng);
            let mut computer_board = placer.place_until_success(&mut rng);
            computer_board.set_hidden(true);

            let mut game = Match::new(
                Seat::new(user_board, ExternalTargeting::new(StdConsole::stdio())),
                Seat::new(computer_board, RandomTargeting::new()),
            );
            let names = |side: Side| -> &'static str {
                match side {
                    Side::First => "User",
                    Side::Second => "Computer",
                }
            };

            ui::print_greeting();
            while let Some(side) = game.current() {
                ui::print_player_view(game.board(Side::First), game.board(Side::Second));
                println!("{}", "-".repeat(27));
                println!("{} to move!", names(side));
                if side == Side::Second {
                    thread::sleep(Duration::from_millis(delay_ms));
                }
                match game.step(&mut rng) {
                    Ok(report) => println!("{}", ui::describe_turn(&report, names)),
                    Err(e) => {
                        eprintln!("Game ended: {}", e);
                        return Ok(());
                    }
                }
            }
            ui::print_player_view(game.board(Side::First), game.board(Side::Second));
            println!("{}", "-".repeat(27));
            if let Some(winner) = game.winner() {
                println!("{} won!", names(winner));
            }
        }
        Commands::Auto { seed, size } => {
            let mut rng = seeded_rng(seed);
            let placer = FleetPlacer::from_config(&GameConfig::with_size(size as usize))?;
            let first = placer.place_until_success(&mut rng);
            let second = placer.place_until_success(&mut rng);

            let mut game = Match::new(
                Seat::new(first, RandomTargeting::new()),
                Seat::new(second, RandomTargeting::new()),
            );
            let winner = game.run(&mut rng)?;
            println!("First board:\n{}", ui::render_board(game.board(Side::First)));
            println!("Second board:\n{}", ui::render_board(game.board(Side::Second)));
            println!(
                "{:?} won after {} shots ({} by first, {} by second)",
                winner,
                game.turn(),
                game.shots(Side::First),
                game.shots(Side::Second)
            );
        }
    }
    Ok(())
}
