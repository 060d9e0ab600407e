use crate::astar::{astar_with_stats, SearchStats};
use crate::{grid_graph::GridGraph, Cell};
use log::{debug, info, warn};

pub mod astar;
pub mod dijkstra;
pub mod rescan;

/// A path from start to finish, both inclusive, and the summed cost of every cell entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub cells: Vec<Cell>,
    pub cost: u32,
}

impl Path {
    fn from_indices(grid: &GridGraph, indices: &[usize]) -> Path {
        let cells: Vec<Cell> = indices.iter().map(|&ix| grid.cell(ix)).collect();
        let cost = grid.path_cost(&cells);
        Path { cells, cost }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Terminal result of a search. Unreachability is an ordinary outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    Unreachable,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Unreachable => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// A search strategy over a [GridGraph]. Implementors only keep configuration; everything a
/// run mutates is created inside [search](Self::search).
pub trait GridSolver {
    /// Estimated remaining cost from the cell at `ix` to the finish.
    fn heuristic(&self, grid: &GridGraph, ix: usize) -> u32;

    /// Runs the frontier algorithm from start to finish and returns the cell indices of the
    /// path, start first. Defaults to the heap-based [astar](crate::astar::astar).
    fn search(&self, grid: &GridGraph) -> Option<Vec<usize>> {
        let finish = grid.finish();
        let (result, stats) = astar_with_stats(
            &grid.start(),
            |&ix| grid.neighbours_and_cost(ix),
            |&ix| self.heuristic(grid, ix),
            |&ix| ix == finish,
        );
        log_stats(&stats, result.as_ref().map(|(_, c)| *c));
        result.map(|(path, _)| path)
    }

    /// Computes the path from the grid's start to its finish. Equal endpoints are answered
    /// without searching, as are endpoints on different connected components.
    fn get_path(&self, grid: &GridGraph) -> SearchOutcome {
        let (start, finish) = (grid.start(), grid.finish());
        if start == finish {
            info!("Start {} is the finish, skipping search", grid.cell(start));
            return SearchOutcome::Found(Path::from_indices(grid, &[start]));
        }
        // Check if start and finish are on the same connected component.
        if grid.unreachable() {
            return SearchOutcome::Unreachable;
        }
        // The finish is reachable from the start, compute a path
        match self.search(grid) {
            Some(indices) => {
                let path = Path::from_indices(grid, &indices);
                debug!("Found path of {} cells with cost {}", path.len(), path.cost);
                SearchOutcome::Found(path)
            }
            None => {
                warn!("Reachable finish could not be pathed to, is the component map correct?");
                SearchOutcome::Unreachable
            }
        }
    }
}

fn log_stats(stats: &SearchStats, cost: Option<u32>) {
    debug!(
        "Expanded {} of {} discovered cells, finish cost {:?}",
        stats.expanded, stats.discovered, cost
    );
}
