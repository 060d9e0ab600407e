use crate::{grid_graph::GridGraph, solver::GridSolver};

/// The heap engine with a zero heuristic. Serves as the reference optimum.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &GridGraph, _: usize) -> u32 {
        0
    }
}
