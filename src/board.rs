//! Board state: ship placement with an exclusion buffer, and shot resolution.

use alloc::{vec, vec::Vec};
use core::fmt;

use log::{debug, info, trace};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coordinate, PlacementError, ShotError, ShotOutcome};
use crate::ship::Ship;

type BB = BitBoard<u128>;

/// What a cell of the board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Intact ship segment.
    Ship,
    /// Ship segment that has been shot.
    Hit,
    /// Shot that landed in open water.
    Miss,
    /// Cell next to a ship where no other ship may lie.
    Buffer,
}

/// One side's board: its ships, every busy coordinate, and what each cell shows.
///
/// A coordinate is busy when it can no longer be chosen: during placement that
/// means ship cells and their buffer, during play it means cells already shot
/// and the buffer around sunk ships.
#[derive(Clone)]
pub struct Board {
    size: usize,
    hidden: bool,
    sunk: usize,
    ships: Vec<Ship>,
    busy: BB,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size×size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }
        let busy = BB::try_new(size)?;
        Ok(Board {
            size,
            hidden: false,
            sunk: 0,
            ships: Vec::new(),
            busy,
            cells: vec![Cell::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the fleet is concealed when the board is displayed.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships placed on the board.
    pub fn fleet_size(&self) -> usize {
        self.ships.len()
    }

    /// Returns `true` once every placed ship is sunk.
    pub fn is_defeated(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// Returns `true` when `coord` lies outside `[0, size)` on either axis.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.index(coord).is_none()
    }

    /// Whether `coord` can no longer be targeted or built on.
    pub fn is_busy(&self, coord: Coordinate) -> bool {
        self.index(coord)
            .map_or(false, |(r, c)| self.busy.get(r, c).unwrap_or(false))
    }

    pub fn busy_count(&self) -> usize {
        self.busy.count_ones()
    }

    /// Busy coordinates in row-major order.
    pub fn busy_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.busy
            .iter_set_bits()
            .map(|(r, c)| Coordinate::new(r as i32, c as i32))
    }

    /// Marker shown for `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|(r, c)| self.cells[r * self.size + c])
    }

    /// Place `ship` and fence it with a buffer so no other ship can touch it.
    ///
    /// Fails without modifying the board if any ship cell is off the board or
    /// already busy.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if ship.len() > self.size {
            let past_edge = ship.cells().nth(self.size).unwrap_or(ship.anchor());
            return Err(PlacementError::OutOfBounds(past_edge));
        }
        for coord in ship.cells() {
            if self.is_out_of_bounds(coord) {
                return Err(PlacementError::OutOfBounds(coord));
            }
            if self.is_busy(coord) {
                return Err(PlacementError::Overlap(coord));
            }
        }
        for coord in ship.cells() {
            self.occupy(coord, Cell::Ship);
        }
        self.ships.push(ship);
        self.outline(&ship);
        trace!("placed {:?}, {} cells busy", ship, self.busy_count());
        Ok(())
    }

    /// Finish the placement phase: forget placement buffers so only shots count.
    ///
    /// Buffer markers are cleared along with the busy set, so the owner's view
    /// shows ships on open water and a hidden board gives nothing away around
    /// its ships.
    pub fn begin(&mut self) {
        self.busy.clear_all();
        for cell in self.cells.iter_mut() {
            if *cell == Cell::Buffer {
                *cell = Cell::Empty;
            }
        }
        debug!("board ready with {} ships", self.ships.len());
    }

    /// Fire at `coord`, reporting whether a ship was missed, hit or sunk.
    pub fn receive_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let (r, c) = self.index(coord).ok_or(ShotError::OutOfBounds(coord))?;
        if self.busy.get(r, c).unwrap_or(false) {
            return Err(ShotError::AlreadyShot(coord));
        }

        let Some(idx) = self.ships.iter().position(|ship| ship.is_hit_by(coord)) else {
            self.occupy(coord, Cell::Miss);
            return Ok(ShotOutcome::Miss);
        };

        self.occupy(coord, Cell::Hit);
        let ship = &mut self.ships[idx];
        ship.apply_hit();
        if !ship.is_sunk() {
            return Ok(ShotOutcome::Hit);
        }

        let ship = *ship;
        self.sunk += 1;
        self.outline(&ship);
        info!(
            "ship of length {} at {} sunk ({}/{})",
            ship.len(),
            ship.anchor(),
            self.sunk,
            self.ships.len()
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Mark every free in-bounds neighbour of the ship's cells as buffer.
    fn outline(&mut self, ship: &Ship) {
        for coord in ship.cells() {
            for near in coord.surroundings() {
                if !self.is_out_of_bounds(near) && !self.is_busy(near) {
                    self.occupy(near, Cell::Buffer);
                }
            }
        }
    }

    /// Set `coord` busy and show `cell` there. `coord` must be on the board.
    fn occupy(&mut self, coord: Coordinate, cell: Cell) {
        if let Some((r, c)) = self.index(coord) {
            let _ = self.busy.set(r, c);
            self.cells[r * self.size + c] = cell;
        }
    }

    fn index(&self, coord: Coordinate) -> Option<(usize, usize)> {
        let n = self.size as i32;
        if (0..n).contains(&coord.row) && (0..n).contains(&coord.col) {
            Some((coord.row as usize, coord.col as usize))
        } else {
            None
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  hidden: {},\n  sunk: {},\n  ships: {:?},\n  busy: {:?}\n}}",
            self.size, self.hidden, self.sunk, self.ships, self.busy
        )
    }
}
