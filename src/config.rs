use alloc::vec::Vec;

pub const DEFAULT_BOARD_SIZE: usize = 6;
/// Largest side whose busy set still fits the `u128` bitboard.
pub const MAX_BOARD_SIZE: usize = 11;
/// Ship lengths each side places, longest first.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Placement attempts shared by the whole fleet before giving up on a board.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
/// Pause before the computer fires, in milliseconds.
pub const DEFAULT_AI_DELAY_MS: u64 = 3000;

/// Parameters of a game: board size, fleet and placement budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub max_attempts: usize,
}

impl GameConfig {
    /// Standard fleet on a board of the given size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Number of ships each side places.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}
