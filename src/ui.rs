#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{Board, Cell},
    common::{Coordinate, ShotOutcome},
    game::{Side, TurnReport},
};

/// Character drawn for a cell. Hidden boards show intact ships as water.
fn marker(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Ship if hidden => ' ',
        Cell::Ship => '■',
        Cell::Hit => 'X',
        Cell::Miss => 'T',
        Cell::Buffer => '.',
    }
}

/// Render a board as a numbered grid, one-based like player input.
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let mut out = String::from("  ");
    for c in 1..=n {
        let _ = write!(out, "| {:<2}", c);
    }
    out.push('|');
    for r in 0..n {
        let _ = write!(out, "\n{:<2}", r + 1);
        for c in 0..n {
            let cell = board
                .cell(Coordinate::new(r as i32, c as i32))
                .unwrap_or(Cell::Empty);
            let _ = write!(out, "| {} ", marker(cell, board.is_hidden()));
        }
        out.push('|');
    }
    out
}

/// Display your board (top) and the opponent board (bottom).
pub fn print_player_view(own: &Board, opponent: &Board) {
    println!("{}", "-".repeat(27));
    println!("Your board:");
    println!("{}", render_board(own));
    println!("{}", "-".repeat(27));
    println!("Computer's board:");
    println!("{}", render_board(opponent));
}

pub fn print_greeting() {
    println!("{}", "_".repeat(27));
    println!("        Welcome to");
    println!("        Sea Battle");
    println!("{}", "_".repeat(27));
    println!(" input format: x y");
    println!(" x - row number");
    println!(" y - column number");
}

/// One-line description of an accepted shot.
pub fn describe_turn(report: &TurnReport, names: impl Fn(Side) -> &'static str) -> String {
    let result = match report.outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Ship hit! Shoot again.",
        ShotOutcome::Sunk => "Ship destroyed! Shoot again.",
    };
    format!("{} fires at {}: {}", names(report.shooter), report.coord, result)
}
