use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    parse_move, Board, Coordinate, ExternalTargeting, InputError, Match, MatchState, Orientation,
    RandomTargeting, Seat, Ship, ShotOutcome, Side, StdConsole, Targeting,
};

/// Writer whose contents stay readable after it has been moved into a match.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn target_board() -> Board {
    let mut board = Board::new(6).unwrap();
    board
        .place_ship(Ship::new(Coordinate::new(0, 0), 1, Orientation::Vertical))
        .unwrap();
    board.begin();
    board
}

#[test]
fn test_parse_move() {
    assert_eq!(parse_move("1 1"), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_move("  3\t6 \n"), Ok(Coordinate::new(2, 5)));
    assert_eq!(parse_move("0 0"), Ok(Coordinate::new(-1, -1)));
    assert_eq!(parse_move("1"), Err(InputError::WrongTokenCount(1)));
    assert_eq!(parse_move("1 2 3"), Err(InputError::WrongTokenCount(3)));
    assert_eq!(parse_move(""), Err(InputError::WrongTokenCount(0)));
    assert_eq!(parse_move("a 2"), Err(InputError::NotANumber("a".into())));
    assert_eq!(parse_move("-1 2"), Err(InputError::NotANumber("-1".into())));
    assert_eq!(parse_move("2 +3"), Err(InputError::NotANumber("+3".into())));
}

#[test]
fn test_external_targeting_retries_bad_lines() {
    let input = Cursor::new("hello\n1 2 3\nx 1\n4 5\n");
    let mut human = ExternalTargeting::new(StdConsole::new(input, Vec::new()));
    let mut rng = SmallRng::seed_from_u64(0);

    let coord = human.choose(&mut rng, &target_board()).unwrap();
    assert_eq!(coord, Coordinate::new(3, 4));

    let output = String::from_utf8(human.console().output().clone()).unwrap();
    assert_eq!(output.matches("Your move:").count(), 4);
    assert_eq!(output.matches("Enter two coordinates!").count(), 2);
    assert!(output.contains("Enter numbers!"));
}

#[test]
fn test_closed_input_ends_choice() {
    let mut human = ExternalTargeting::new(StdConsole::new(Cursor::new("oops\n"), Vec::new()));
    let mut rng = SmallRng::seed_from_u64(0);
    let err = human.choose(&mut rng, &target_board()).unwrap_err();
    assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::Closed));
}

#[test]
fn test_human_in_match_sees_rejections() {
    let out = SharedBuf::default();
    let input = Cursor::new("7 7\n2 2\n1 1\n");
    let human = ExternalTargeting::new(StdConsole::new(input, out.clone()));
    let mut game = Match::new(
        Seat::new(target_board(), human),
        Seat::new(target_board(), RandomTargeting::new()),
    );
    let mut rng = SmallRng::seed_from_u64(0);

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.coord, Coordinate::new(1, 1));
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(report.rejected, 1);
    assert!(out.text().contains("off the board"));
    assert_eq!(game.state(), MatchState::AwaitingMove(Side::Second));
}

#[test]
fn test_human_sinks_last_ship_and_wins() {
    let human = ExternalTargeting::new(StdConsole::new(Cursor::new("1 1\n"), Vec::new()));
    let mut game = Match::new(
        Seat::new(target_board(), human),
        Seat::new(target_board(), RandomTargeting::new()),
    );
    let mut rng = SmallRng::seed_from_u64(0);
    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Sunk);
    assert_eq!(game.winner(), Some(Side::First));
}
