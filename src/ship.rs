//! Straight-line ships and their hit tracking.

use core::fmt;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells extend along the row, column increasing.
    Horizontal,
    /// Cells extend down the column, row increasing.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship anchored at a coordinate, counting its remaining health.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    anchor: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Build a ship of `length` cells starting at `anchor`. Panics if `length` is 0.
    pub fn new(anchor: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0, "ship length must be positive");
        Ship {
            anchor,
            length,
            orientation,
            health: length,
        }
    }

    /// Cells covered by the ship, starting at the anchor.
    ///
    /// Lengths beyond `i32::MAX` are clamped; such a ship runs off any board.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let anchor = self.anchor;
        let length = i32::try_from(self.length).unwrap_or(i32::MAX);
        (0..length).map(move |i| anchor.offset(dr * i, dc * i))
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record a hit. The caller has checked that the shot lands on this ship.
    pub fn apply_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Cells not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ anchor: ({}, {}), length: {}, orientation: {:?}, health: {} }}",
            self.anchor.row, self.anchor.col, self.length, self.orientation, self.health,
        )
    }
}
