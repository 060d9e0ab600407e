//! Step-wise best-first search that rescans the whole open collection for the next cell.
//!
//! Unlike the heap engine, the finish is accepted as soon as it is adjacent to the current
//! cell, without comparing alternate routes into it. The returned path therefore always
//! exists when one does, but its cost can exceed the optimum when several frontier cells
//! border the finish.
use crate::astar::FxIndexMap;
use crate::{grid_graph::GridGraph, solver::GridSolver};
use fxhash::{FxHashMap, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Succeeded,
    Unreachable,
}

/// A cell together with its g-score and its estimate `g + h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Candidate {
    ix: usize,
    cost: u32,
    estimate: u32,
}

/// Per-run search state over a borrowed, unchanging [GridGraph].
#[derive(Clone, Debug)]
pub struct RescanSearch<'g> {
    grid: &'g GridGraph,
    open: FxIndexMap<usize, u32>,
    closed: FxHashSet<usize>,
    came_from: FxHashMap<usize, usize>,
    current: Candidate,
    state: SearchState,
    steps: usize,
}

impl<'g> RescanSearch<'g> {
    /// Seeds the open collection with the start at its own traversal cost. A start that is
    /// also the finish is solved on the spot and never steps.
    pub fn new(grid: &'g GridGraph) -> RescanSearch<'g> {
        let start = grid.start();
        let cost = grid.cost(start) as u32;
        let mut open = FxIndexMap::default();
        open.insert(start, cost);
        RescanSearch {
            grid,
            open,
            closed: FxHashSet::default(),
            came_from: FxHashMap::default(),
            current: Candidate {
                ix: start,
                cost,
                estimate: cost + grid.distance_to_finish(start),
            },
            state: if start == grid.finish() {
                SearchState::Succeeded
            } else {
                SearchState::Running
            },
            steps: 0,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }
    /// Number of completed steps.
    pub fn steps(&self) -> usize {
        self.steps
    }
    pub fn current(&self) -> usize {
        self.current.ix
    }
    pub fn open_cost(&self, ix: usize) -> Option<u32> {
        self.open.get(&ix).copied()
    }
    pub fn is_closed(&self, ix: usize) -> bool {
        self.closed.contains(&ix)
    }
    pub fn parent(&self, ix: usize) -> Option<usize> {
        self.came_from.get(&ix).copied()
    }

    fn candidate(&self, ix: usize, cost: u32) -> Candidate {
        Candidate {
            ix,
            cost,
            estimate: cost + self.grid.distance_to_finish(ix),
        }
    }

    /// Performs one expansion of the current cell and selects the next one.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }
        let grid = self.grid;
        let current = self.current;
        let finish = grid.finish();
        let mut best: Option<Candidate> = None;

        for &next in grid.neighbours(current.ix) {
            if self.closed.contains(&next) || grid.is_wall(next) {
                continue;
            }
            if next == finish {
                self.came_from.insert(finish, current.ix);
                self.steps += 1;
                self.state = SearchState::Succeeded;
                return self.state;
            }
            let tentative = current.cost + grid.cost(next) as u32;
            let cost = match self.open.entry(next) {
                Vacant(e) => {
                    e.insert(tentative);
                    self.came_from.insert(next, current.ix);
                    tentative
                }
                Occupied(mut e) => {
                    if tentative < *e.get() {
                        e.insert(tentative);
                        self.came_from.insert(next, current.ix);
                        tentative
                    } else {
                        *e.get()
                    }
                }
            };
            let candidate = self.candidate(next, cost);
            if best.map_or(true, |b| candidate.estimate < b.estimate) {
                best = Some(candidate);
            }
        }

        self.closed.insert(current.ix);
        self.steps += 1;

        let next = match (best, self.min_open()) {
            (Some(b), Some(g)) if g.estimate < b.estimate => Some(g),
            (Some(b), _) => Some(b),
            (None, g) => g,
        };
        match next {
            Some(next) => {
                trace!(
                    "Step {}: closed {}, next {} (g {}, f {})",
                    self.steps,
                    grid.cell(current.ix),
                    grid.cell(next.ix),
                    next.cost,
                    next.estimate
                );
                self.current = next;
            }
            None => self.state = SearchState::Unreachable,
        }
        self.state
    }

    /// The open, unclosed cell with the smallest estimate; the earliest inserted wins ties.
    fn min_open(&self) -> Option<Candidate> {
        self.open
            .iter()
            .filter(|(ix, _)| !self.closed.contains(*ix))
            .map(|(&ix, &cost)| self.candidate(ix, cost))
            .reduce(|a, b| if b.estimate < a.estimate { b } else { a })
    }

    /// Steps until the search terminates.
    pub fn run(&mut self) -> SearchState {
        while self.step() == SearchState::Running {}
        debug!(
            "Rescan search finished as {:?} after {} steps, {} cells closed",
            self.state,
            self.steps,
            self.closed.len()
        );
        self.state
    }

    /// Walks the came-from links back from the finish. Only defined once the search succeeded.
    pub fn path(&self) -> Option<Vec<usize>> {
        if self.state != SearchState::Succeeded {
            return None;
        }
        let start = self.grid.start();
        let mut path = vec![self.grid.finish()];
        let mut ix = self.grid.finish();
        while ix != start {
            ix = self.parent(ix)?;
            path.push(ix);
        }
        path.reverse();
        Some(path)
    }
}

/// [GridSolver] driving a [RescanSearch] to completion.
#[derive(Clone, Debug, Default)]
pub struct RescanSolver;

impl GridSolver for RescanSolver {
    fn heuristic(&self, grid: &GridGraph, ix: usize) -> u32 {
        grid.distance_to_finish(ix)
    }

    fn search(&self, grid: &GridGraph) -> Option<Vec<usize>> {
        let mut search = RescanSearch::new(grid);
        search.run();
        search.path()
    }
}
