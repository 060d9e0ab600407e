//! # cost_grid_pathfinding
//!
//! Shortest weighted paths on a rectangular grid where every cell carries a traversal cost
//! (`0` is an impassable wall, `1..=9` is the cost of entering the cell) and movement is
//! restricted to the four orthogonal neighbours.
//!
//! A [GridGraph](grid_graph::GridGraph) is built once from validated input. It stores its
//! cells in a flat arena indexed by `row * width + col` and pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) to avoid
//! flood-filling behaviour if no path exists. Solvers implementing
//! [GridSolver](solver::GridSolver) keep all per-run state (open, closed and came-from) to
//! themselves, so one graph can serve any number of searches.
pub mod astar;
pub mod error;
pub mod grid_graph;
pub mod input;
pub mod output;
pub mod solver;

use core::fmt;
use std::io::{BufRead, Write};

pub use error::{Endpoint, Error, Result};
pub use grid_graph::{GridBuilder, GridGraph};
pub use solver::{GridSolver, Path, SearchOutcome};

/// Cost value marking an impassable cell.
pub const WALL: u8 = 0;
/// Largest cost a passable cell may carry.
pub const MAX_COST: u8 = 9;
/// Inline capacity for successor lists; a cell has at most four orthogonal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;

/// A grid coordinate. Rows grow downwards, columns grow to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Reads a grid description from `input`, solves it with `solver` and writes the path (or the
/// unreachability message) to `output`.
///
/// Nothing is written if the input fails validation.
pub fn run<R, W>(input: R, output: &mut W, solver: &dyn GridSolver) -> Result<SearchOutcome>
where
    R: BufRead,
    W: Write,
{
    let grid = input::read_grid(input)?;
    log::debug!("Read {}x{} grid\n{}", grid.length(), grid.width(), grid);
    let outcome = solver.get_path(&grid);
    output::write_outcome(output, &outcome)?;
    Ok(outcome)
}
