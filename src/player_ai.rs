use log::trace;
use rand::{rngs::SmallRng, Rng};

use crate::{board::Board, common::Coordinate, player::Targeting};

/// Computer shooter that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are rejected by the board and
/// the match simply asks again.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTargeting;

impl RandomTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl Targeting for RandomTargeting {
    fn choose(&mut self, rng: &mut SmallRng, target: &Board) -> anyhow::Result<Coordinate> {
        let size = target.size() as i32;
        let coord = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        trace!("computer aims at {}", coord);
        Ok(coord)
    }
}
