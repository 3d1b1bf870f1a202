//! Turn sequencing for a two-sided match.

use alloc::boxed::Box;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coordinate, ShotOutcome},
    player::Targeting,
};

/// One of the two sides of a match. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting for the given side to fire.
    AwaitingMove(Side),
    /// The given side sank the whole opposing fleet.
    Finished(Side),
}

/// Errors returned by [`Match::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("the match is already over, {0:?} won")]
    AlreadyFinished(Side),
}

/// A side's own board together with whoever fires on its behalf.
pub struct Seat {
    board: Board,
    targeting: Box<dyn Targeting>,
}

impl Seat {
    pub fn new(board: Board, targeting: impl Targeting + 'static) -> Self {
        Self {
            board,
            targeting: Box::new(targeting),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// What happened during one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub coord: Coordinate,
    pub outcome: ShotOutcome,
    /// Coordinates the opponent board refused before this one.
    pub rejected: usize,
}

/// Two seats taking turns until one fleet is gone.
pub struct Match {
    seats: [Seat; 2],
    state: MatchState,
    turn: usize,
    shots: [usize; 2],
}

impl Match {
    /// Start a match; `first` fires first.
    pub fn new(first: Seat, second: Seat) -> Self {
        Self {
            seats: [first, second],
            state: MatchState::AwaitingMove(Side::First),
            turn: 0,
            shots: [0; 2],
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Side expected to fire next, or `None` once the match is over.
    pub fn current(&self) -> Option<Side> {
        match self.state {
            MatchState::AwaitingMove(side) => Some(side),
            MatchState::Finished(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished(side) => Some(side),
            MatchState::AwaitingMove(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Number of accepted shots so far, both sides included.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Accepted shots fired by `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.seats[side.index()].board
    }

    /// Ask the current side for coordinates until the opponent board accepts
    /// one, then advance the turn.
    ///
    /// A hit or a sinking keeps the turn with the shooter; a miss passes it on.
    /// Rejected coordinates are reported back to the shooter and do not count
    /// as a turn.
    pub fn step(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        let shooter = match self.state {
            MatchState::Finished(winner) => {
                return Err(MatchError::AlreadyFinished(winner).into());
            }
            MatchState::AwaitingMove(side) => side,
        };
        let (attacker, defender) = self.seats_mut(shooter);

        let mut rejected = 0;
        let (coord, outcome) = loop {
            let coord = attacker.targeting.choose(rng, &defender.board)?;
            match defender.board.receive_shot(coord) {
                Ok(outcome) => break (coord, outcome),
                Err(err) => {
                    debug!("{:?} shot at {:?} rejected: {}", shooter, coord, err);
                    rejected += 1;
                    attacker.targeting.rejected(coord, &err);
                }
            }
        };
        attacker.targeting.resolved(coord, outcome);

        let attacker_defeated = attacker.board.is_defeated();
        let defender_defeated = defender.board.is_defeated();
        self.turn += 1;
        self.shots[shooter.index()] += 1;
        self.state = if defender_defeated {
            MatchState::Finished(shooter)
        } else if attacker_defeated {
            MatchState::Finished(shooter.opponent())
        } else if outcome.was_hit() {
            MatchState::AwaitingMove(shooter)
        } else {
            MatchState::AwaitingMove(shooter.opponent())
        };
        debug!(
            "turn {}: {:?} fired at {:?} -> {:?}, now {:?}",
            self.turn, shooter, coord, outcome, self.state
        );
        if let MatchState::Finished(winner) = self.state {
            info!("{:?} wins after {} shots", winner, self.turn);
        }

        Ok(TurnReport {
            shooter,
            coord,
            outcome,
            rejected,
        })
    }

    /// Step until the match is over and return the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.step(rng)?;
        }
    }

    /// Mutable access to the shooter's seat and the seat being fired on.
    fn seats_mut(&mut self, shooter: Side) -> (&mut Seat, &mut Seat) {
        let [first, second] = &mut self.seats;
        match shooter {
            Side::First => (first, second),
            Side::Second => (second, first),
        }
    }
}
