use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    Board, BoardError, FleetPlacer, GameConfig, PlacementFailure, FLEET, MAX_PLACEMENT_ATTEMPTS,
};

/// No two cells of different ships may touch, diagonals included.
fn assert_no_adjacent_ships(board: &Board) {
    let ships = board.ships();
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            for ca in a.cells() {
                for cb in b.cells() {
                    let apart = (ca.row - cb.row).abs().max((ca.col - cb.col).abs());
                    assert!(apart > 1, "{:?} touches {:?}", a, b);
                }
            }
        }
    }
}

#[test]
fn test_standard_fleet_places_on_default_board() {
    let placer = FleetPlacer::new(6).unwrap();
    let mut successes = 0;
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Ok(board) = placer.place(&mut rng) {
            successes += 1;
            assert_eq!(board.fleet_size(), FLEET.len());
            assert_no_adjacent_ships(&board);
            for ship in board.ships() {
                assert!(ship.cells().all(|c| !board.is_out_of_bounds(c)));
            }
        }
    }
    // a single call succeeds roughly three times in five
    assert!(successes >= 20, "only {} of 50 placements succeeded", successes);
}

#[test]
fn test_restarted_placements_never_touch() {
    let placer = FleetPlacer::new(6).unwrap();
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = placer.place_until_success(&mut rng);
        assert_eq!(board.fleet_size(), FLEET.len());
        assert_no_adjacent_ships(&board);
    }
}

#[test]
fn test_anchors_include_the_line_past_the_edge() {
    // On a 1x1 board only the anchor (0, 0) fits. Drawing rows and columns
    // from 0..=1 lands there one time in four.
    let placer = FleetPlacer::new(1)
        .unwrap()
        .with_fleet(&[1])
        .unwrap()
        .with_max_attempts(1);
    let successes = (0..400)
        .filter(|&seed| placer.place(&mut SmallRng::seed_from_u64(seed)).is_ok())
        .count();
    assert!(
        (50..=150).contains(&successes),
        "{} of 400 single attempts succeeded",
        successes
    );
}

#[test]
fn test_placed_board_is_ready_for_play() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = FleetPlacer::new(6).unwrap().place_until_success(&mut rng);
    assert_eq!(board.busy_count(), 0);
    assert_eq!(board.sunk_count(), 0);
    let lengths: Vec<_> = board.ships().iter().map(|s| s.len()).collect();
    assert_eq!(lengths, FLEET.to_vec());
}

#[test]
fn test_same_seed_same_fleet() {
    let placer = FleetPlacer::new(6).unwrap();
    let a = placer.place_until_success(&mut SmallRng::seed_from_u64(99));
    let b = placer.place_until_success(&mut SmallRng::seed_from_u64(99));
    assert_eq!(a.ships(), b.ships());
}

#[test]
fn test_budget_exhaustion_reports_failure() {
    // seven ships can never fit in fewer than seven attempts
    let placer = FleetPlacer::new(6).unwrap().with_max_attempts(6);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        placer.place(&mut rng).unwrap_err(),
        PlacementFailure { attempts: 6 }
    );
}

#[test]
fn test_impossible_fleet_fails() {
    let placer = FleetPlacer::new(3)
        .unwrap()
        .with_fleet(&[3, 3])
        .unwrap()
        .with_max_attempts(200);
    let mut rng = SmallRng::seed_from_u64(5);
    assert!(placer.place(&mut rng).is_err());
}

#[test]
fn test_custom_fleet_and_config() {
    let config = GameConfig {
        size: 8,
        fleet: vec![4, 3],
        max_attempts: MAX_PLACEMENT_ATTEMPTS,
    };
    assert_eq!(config.fleet_size(), 2);
    let placer = FleetPlacer::from_config(&config).unwrap();
    assert_eq!(placer.size(), 8);
    assert_eq!(placer.fleet(), &[4, 3]);
    let board = placer.place_until_success(&mut SmallRng::seed_from_u64(3));
    assert_eq!(board.size(), 8);
    assert_eq!(board.fleet_size(), 2);
    assert_no_adjacent_ships(&board);
}

#[test]
fn test_invalid_size_is_rejected() {
    assert!(FleetPlacer::new(0).is_err());
    assert!(FleetPlacer::new(12).is_err());
    assert_eq!(GameConfig::default().size, 6);
}

#[test]
fn test_unusable_fleets_are_rejected() {
    let placer = FleetPlacer::new(6).unwrap();
    assert_eq!(placer.clone().with_fleet(&[]).unwrap_err(), BoardError::EmptyFleet);
    assert_eq!(
        placer.clone().with_fleet(&[2, 0]).unwrap_err(),
        BoardError::ShipLength { length: 0, size: 6 }
    );
    assert_eq!(
        placer.with_fleet(&[7]).unwrap_err(),
        BoardError::ShipLength { length: 7, size: 6 }
    );

    let config = GameConfig {
        fleet: vec![3, 0, 1],
        ..GameConfig::default()
    };
    assert_eq!(
        FleetPlacer::from_config(&config).unwrap_err(),
        BoardError::ShipLength { length: 0, size: 6 }
    );
    let config = GameConfig {
        fleet: Vec::new(),
        ..GameConfig::default()
    };
    assert_eq!(FleetPlacer::from_config(&config).unwrap_err(), BoardError::EmptyFleet);
}

