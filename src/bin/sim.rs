#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{FleetPlacer, Match, RandomTargeting, Seat, Side, DEFAULT_BOARD_SIZE};
#[cfg(feature = "std")]
use serde::Serialize;

#[cfg(feature = "std")]
#[derive(Serialize)]
struct SideSummary {
    shots: usize,
    ships_lost: usize,
}

#[cfg(feature = "std")]
#[derive(Serialize)]
struct Summary {
    winner: Side,
    turns: usize,
    first: SideSummary,
    second: SideSummary,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    seabattle::init_logging_with(log::LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let placer = FleetPlacer::new(DEFAULT_BOARD_SIZE)?;
    let b1 = placer.place_until_success(&mut rng1);
    let b2 = placer.place_until_success(&mut rng2);

    let mut game = Match::new(
        Seat::new(b1, RandomTargeting::new()),
        Seat::new(b2, RandomTargeting::new()),
    );
    let winner = game.run(&mut rng1)?;

    let side = |side: Side| SideSummary {
        shots: game.shots(side),
        ships_lost: game.board(side).sunk_count(),
    };
    let summary = Summary {
        winner,
        turns: game.turn(),
        first: side(Side::First),
        second: side(Side::Second),
    };

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
