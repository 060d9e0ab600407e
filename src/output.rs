use crate::solver::SearchOutcome;
use std::io::{self, Write};

/// Printed instead of a path when no route exists.
pub const UNREACHABLE_MESSAGE: &str =
    "The finish is separated from the start by impassable walls, no path exists";

/// Writes one `row col` line per path cell, start first, followed by a line holding a single
/// period. An unreachable outcome writes [UNREACHABLE_MESSAGE] and nothing else.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    match outcome {
        SearchOutcome::Found(path) => {
            for cell in &path.cells {
                writeln!(out, "{}", cell)?;
            }
            writeln!(out, ".")?;
        }
        SearchOutcome::Unreachable => writeln!(out, "{}", UNREACHABLE_MESSAGE)?,
    }
    out.flush()
}
