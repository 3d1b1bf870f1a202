#![cfg(feature = "std")]

//! Human shooter fed by a line-oriented console.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::{String, ToString};
use std::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coordinate, ShotError},
    player::Targeting,
};

/// Line-based input and output used by the human side.
pub trait Console {
    /// Show `prompt` and read one line. Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Show a message to the player.
    fn notice(&mut self, message: &str);
}

/// [`Console`] over any reader and writer, stdin/stdout by default.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far, for writers that keep it.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn notice(&mut self, message: &str) {
        let _ = writeln!(self.output, " {} ", message);
    }
}

/// Problems with a typed move. The player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Enter two coordinates!")]
    WrongTokenCount(usize),
    #[error("Enter numbers! Got {0:?}")]
    NotANumber(String),
    #[error("input closed before a move was entered")]
    Closed,
}

/// Parse a move typed as `row col`, both one-based, into a zero-based coordinate.
///
/// Only checks the format: `0 0` parses to `(-1, -1)` and is left for the
/// board to reject as out of bounds.
pub fn parse_move(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// Human shooter: reads each move from a [`Console`].
pub struct ExternalTargeting<C> {
    console: C,
}

impl<C: Console> ExternalTargeting<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }
}

impl<C: Console> Targeting for ExternalTargeting<C> {
    fn choose(&mut self, _rng: &mut SmallRng, _target: &Board) -> anyhow::Result<Coordinate> {
        loop {
            let Some(line) = self.console.read_line("Your move:")? else {
                return Err(InputError::Closed.into());
            };
            match parse_move(&line) {
                Ok(coord) => return Ok(coord),
                Err(err) => self.console.notice(&err.to_string()),
            }
        }
    }

    fn rejected(&mut self, _coord: Coordinate, err: &ShotError) {
        self.console.notice(&err.to_string());
    }
}
