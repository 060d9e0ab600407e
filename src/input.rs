//! Reads the textual grid description:
//!
//! ```text
//! <length> <width>
//! <width costs>      (repeated <length> times)
//! <start row> <start col> <finish row> <finish col>
//! ```
use crate::error::{Endpoint, Error, Result};
use crate::grid_graph::{GridBuilder, GridGraph};
use std::io::BufRead;

/// Parses a complete description and builds the graph, stopping at the first invalid value.
pub fn read_grid<R: BufRead>(input: R) -> Result<GridGraph> {
    let mut lines = input.lines();
    let mut next_line = |what: &'static str| -> Result<String> {
        lines.next().transpose()?.ok_or(Error::MissingLine(what))
    };

    let dimensions = next_line("dimensions")?;
    let [length, width] = fixed_tokens::<2>(&dimensions, "dimensions")?;
    let (length, width) = (number(length)?, number(width)?);
    let mut builder = GridBuilder::new(length, width)?;
    let length = length as usize;
    for row in 0..length {
        let line = next_line("grid row")?;
        let values = line
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| {
                token.parse::<i64>().map_err(|_| Error::CellNotANumber {
                    row,
                    col,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<i64>>>()?;
        builder.push_row(&values)?;
    }

    // The start is checked in full before the finish tokens are looked at.
    let endpoints = next_line("endpoints")?;
    let [start_row, start_col, finish_row, finish_col] =
        fixed_tokens::<4>(&endpoints, "endpoints")?;
    let start = (number(start_row)?, number(start_col)?);
    builder.endpoint(Endpoint::Start, start)?;
    let finish = (number(finish_row)?, number(finish_col)?);
    builder.build(start, finish)
}

/// Splits `line` into exactly `N` whitespace-separated tokens.
fn fixed_tokens<'a, const N: usize>(line: &'a str, what: &'static str) -> Result<[&'a str; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let found = tokens.len();
    tokens.try_into().map_err(|_| Error::TokenCount {
        line: what,
        expected: N,
        found,
    })
}

fn number(token: &str) -> Result<i64> {
    token.parse().map_err(|_| Error::NotANumber(token.to_owned()))
}
