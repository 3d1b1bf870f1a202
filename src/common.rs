//! Common types for the sea battle: coordinates, shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Position of a cell on a board, zero-based.
///
/// Components are signed because neighbours of edge cells and randomly sampled
/// anchors may fall outside the grid; [`Board::is_out_of_bounds`] decides
/// whether a coordinate is usable.
///
/// [`Board::is_out_of_bounds`]: crate::Board::is_out_of_bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// The 3×3 block centred on this coordinate, the coordinate itself included.
    pub fn surroundings(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    /// Formats the coordinate one-based, the way players type it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that still floats.
    Hit,
    /// Shot hit the last intact cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether a ship was struck. The shooter moves again when this is true.
    pub fn was_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Reasons a ship cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// A ship cell falls outside the board.
    #[error("ship cell {0} is outside the board")]
    OutOfBounds(Coordinate),
    /// A ship cell touches an occupied cell or its buffer.
    #[error("ship cell {0} overlaps an occupied area")]
    Overlap(Coordinate),
}

/// Reasons a shot is rejected. The shooter is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShotError {
    #[error("your shot at {0} is off the board")]
    OutOfBounds(Coordinate),
    #[error("the cell {0} has already been shot")]
    AlreadyShot(Coordinate),
}

impl ShotError {
    /// Coordinate that was rejected.
    pub fn coord(&self) -> Coordinate {
        match *self {
            ShotError::OutOfBounds(c) | ShotError::AlreadyShot(c) => c,
        }
    }
}

/// Errors returned when building a board or the fleet placed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size).
    #[error("bitboard error: {0}")]
    BitBoard(#[from] BitBoardError),
    /// A board needs at least one row.
    #[error("board size must be positive")]
    EmptyBoard,
    /// A fleet needs at least one ship, or no board could ever be defeated.
    #[error("fleet has no ships")]
    EmptyFleet,
    /// Ship lengths must lie in `1..=size`.
    #[error("ship length {length} does not fit a {size}x{size} board")]
    ShipLength { length: usize, size: usize },
}

/// Fleet placement ran out of attempts. Restart with a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("could not place the fleet within {attempts} attempts")]
pub struct PlacementFailure {
    pub attempts: usize,
}
