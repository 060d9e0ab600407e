//! Error types for cost grid construction and input parsing.

use std::fmt;

use thiserror::Error;

/// Which end of the requested path a coordinate refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Finish,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Finish => f.write_str("finish"),
        }
    }
}

/// Validation and I/O failures. Every variant is fatal to the run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the {0} line")]
    MissingLine(&'static str),

    #[error("expected {expected} numbers on the {line} line, found {found}")]
    TokenCount {
        line: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("value [{0}] must be a number")]
    NotANumber(String),

    #[error("grid {name} [{value}] must be greater than 0")]
    InvalidDimension { name: &'static str, value: i64 },

    #[error("expected {expected} grid rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("value of cell {{{row};{col}}} is not a number [{token}]")]
    CellNotANumber {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("value [{value}] of cell {{{row};{col}}} must lie in 0..9 inclusive")]
    CostOutOfRange { row: usize, col: usize, value: i64 },

    #[error(
        "{endpoint} point {{{row};{col}}} must have coordinates {{0..{max_row};0..{max_col}}} inclusive"
    )]
    EndpointOutOfBounds {
        endpoint: Endpoint,
        row: i64,
        col: i64,
        max_row: usize,
        max_col: usize,
    },

    #[error("{endpoint} point {{{row};{col}}} cannot be a wall")]
    EndpointIsWall {
        endpoint: Endpoint,
        row: usize,
        col: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
