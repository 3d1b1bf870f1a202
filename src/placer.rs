//! Random fleet placement with a bounded attempt budget.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coordinate, PlacementFailure};
use crate::config::GameConfig;
use crate::ship::{Orientation, Ship};

/// Places a fleet on a fresh board by sampling random positions.
///
/// Anchors are drawn from `[0, size]` on both axes, one past the last valid
/// index. Anchors on that extra line always fail the bounds check and simply
/// use up an attempt.
#[derive(Debug, Clone)]
pub struct FleetPlacer {
    blank: Board,
    fleet: Vec<usize>,
    max_attempts: usize,
}

impl FleetPlacer {
    /// Standard fleet and attempt budget on a `size×size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::from_config(&GameConfig::with_size(size))
    }

    /// Fails when the configured size cannot hold a board or the fleet is
    /// unusable on it.
    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        let blank = Board::new(config.size)?;
        check_fleet(&config.fleet, config.size)?;
        Ok(Self {
            blank,
            fleet: config.fleet.clone(),
            max_attempts: config.max_attempts,
        })
    }

    /// Replace the ship lengths to place. They are placed in the given order.
    pub fn with_fleet(mut self, fleet: &[usize]) -> Result<Self, BoardError> {
        check_fleet(fleet, self.size())?;
        self.fleet = fleet.to_vec();
        Ok(self)
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn size(&self) -> usize {
        self.blank.size()
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Place the whole fleet on a new board.
    ///
    /// Each failed placement consumes one attempt from a budget shared by all
    /// ships; once it is spent the board is abandoned with
    /// [`PlacementFailure`]. A successful board has had [`Board::begin`]
    /// called and is ready for play.
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, PlacementFailure> {
        let mut board = self.blank.clone();
        let bound = board.size() as i32;
        let mut attempts = 0;
        for &length in &self.fleet {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    debug!(
                        "gave up placing the fleet after {} attempts",
                        self.max_attempts
                    );
                    return Err(PlacementFailure {
                        attempts: self.max_attempts,
                    });
                }
                let anchor =
                    Coordinate::new(rng.random_range(0..=bound), rng.random_range(0..=bound));
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if board.place_ship(Ship::new(anchor, length, orientation)).is_ok() {
                    break;
                }
            }
        }
        debug!("fleet placed after {} attempts", attempts);
        board.begin();
        Ok(board)
    }

    /// Keep starting over with a new board until [`place`](Self::place) succeeds.
    ///
    /// Never returns if the fleet cannot fit the board at all.
    pub fn place_until_success<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let mut restarts = 0usize;
        loop {
            match self.place(rng) {
                Ok(board) => {
                    if restarts > 0 {
                        debug!("fleet placed after {} restarts", restarts);
                    }
                    return board;
                }
                Err(_) => restarts += 1,
            }
        }
    }
}

/// A fleet must have ships, each at least one cell long and no longer than the board.
fn check_fleet(fleet: &[usize], size: usize) -> Result<(), BoardError> {
    if fleet.is_empty() {
        return Err(BoardError::EmptyFleet);
    }
    match fleet.iter().find(|&&length| length == 0 || length > size) {
        Some(&length) => Err(BoardError::ShipLength { length, size }),
        None => Ok(()),
    }
}
