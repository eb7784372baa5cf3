//! Numbered, line-based selection for streams without raw keyboard control.

use crate::render;
use crate::selector::{SelectError, Selector};
use crate::window::DisplayModel;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;
use tracing::debug;

/// Outcome of parsing one line of input against `count` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Default,
    Choice(usize),
    OutOfRange,
    Invalid,
}

fn parse_reply(line: &str, count: usize) -> Reply {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Reply::Default;
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n >= 1 && (n as u64) <= count as u64 => Reply::Choice(n as usize - 1),
        Ok(_) => Reply::OutOfRange,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Reply::OutOfRange
        }
        Err(_) => Reply::Invalid,
    }
}

/// Print the listing once, then prompt until a valid choice arrives.
/// A blank line or end of input picks the sentinel.
pub fn run<R: BufRead, W: Write>(
    header: &str,
    model: &DisplayModel,
    input: &mut R,
    output: &mut W,
) -> io::Result<usize> {
    let count = model.len();
    let default = model.none_index();

    writeln!(output, "{}", render::render_numbered(header, model))?;

    let mut line = String::new();
    loop {
        write!(output, "Select [1-{}] (default: {}): ", count, default + 1)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Selection input closed, using default");
            return Ok(default);
        }

        match parse_reply(&line, count) {
            Reply::Default => return Ok(default),
            Reply::Choice(index) => return Ok(index),
            Reply::OutOfRange => writeln!(output, "Please enter a number between 1 and {}", count)?,
            Reply::Invalid => writeln!(output, "Please enter a valid number")?,
        }
    }
}

/// Numbered selector reading stdin and printing on stderr. Always available.
#[derive(Debug, Default)]
pub struct NumberedSelector;

impl Selector for NumberedSelector {
    fn select(&mut self, header: &str, model: &DisplayModel) -> Result<usize, SelectError> {
        let mut input = io::stdin().lock();
        let mut output = io::stderr().lock();
        Ok(run(header, model, &mut input, &mut output)?)
    }
}
