use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coordinate, ShotError, ShotOutcome},
};

/// Interface implemented by the two kinds of shooter.
///
/// A Targeting is responsible for:
/// - Choosing the next coordinate to fire at
/// - Reacting to shots the opponent board rejected
/// - Handling feedback from accepted shots
pub trait Targeting {
    /// Choose the next coordinate to fire at on the opponent's board.
    ///
    /// Errors end the match; they are reserved for input that can no longer be
    /// read, not for bad coordinates.
    fn choose(&mut self, rng: &mut SmallRng, target: &Board) -> anyhow::Result<Coordinate>;

    /// The opponent board refused the last coordinate. Another one will be asked for.
    fn rejected(&mut self, _coord: Coordinate, _err: &ShotError) {}

    /// Inform the shooter of the result of its last shot.
    fn resolved(&mut self, _coord: Coordinate, _outcome: ShotOutcome) {}
}
