use crate::{grid_graph::GridGraph, solver::GridSolver};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    pub fn with_heuristic_factor(heuristic_factor: f32) -> AstarSolver {
        AstarSolver { heuristic_factor }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    /// Manhattan distance to the finish times the heuristic factor. Every move costs at least
    /// one, so a factor of at most 1.0 keeps the heuristic admissible.
    fn heuristic(&self, grid: &GridGraph, ix: usize) -> u32 {
        (grid.distance_to_finish(ix) as f32 * self.heuristic_factor) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solver::SearchOutcome, Cell};

    fn solve(rows: &[&[i64]], start: (i64, i64), finish: (i64, i64)) -> SearchOutcome {
        let grid = GridGraph::from_rows(rows, start, finish).unwrap();
        AstarSolver::new().get_path(&grid)
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let outcome = solve(&[&[5]], (0, 0), (0, 0));
        let path = outcome.path().unwrap();
        assert_eq!(path.cells, vec![Cell::new(0, 0)]);
        assert_eq!(path.cost, 0);
    }

    /// Asserts that the optimal 4 step solution is found around a central wall.
    #[test]
    fn solve_simple_problem() {
        // |S  |
        // | # |
        // |  G|
        let outcome = solve(&[&[1, 1, 1], &[1, 0, 1], &[1, 1, 1]], (0, 0), (2, 2));
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.cost, 4);
        assert!(!path.cells.contains(&Cell::new(1, 1)));
    }

    /// The only route runs through the expensive middle cell.
    #[test]
    fn passes_expensive_cell_when_forced() {
        let outcome = solve(&[&[1, 9, 1]], (0, 0), (0, 2));
        let path = outcome.path().unwrap();
        assert_eq!(
            path.cells,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
        assert_eq!(path.cost, 10);
    }

    /// A longer detour over cheap cells beats the short route over an expensive one.
    #[test]
    fn prefers_cheap_detour() {
        // |S9G|
        // |111|
        let outcome = solve(&[&[1, 9, 1], &[1, 1, 1]], (0, 0), (0, 2));
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.cost, 4);
    }

    /// Finish next to an expensive cell: the adjacent-first route must lose to the cheaper one.
    #[test]
    fn finish_cost_is_optimal() {
        // |S 1 1|
        // |9 9 1|
        // |1 G 1|
        let outcome = solve(&[&[1, 1, 1], &[9, 9, 1], &[1, 1, 1]], (0, 0), (2, 1));
        let path = outcome.path().unwrap();
        assert_eq!(path.cost, 5);
    }

    #[test]
    fn test_diagonal_is_not_a_path() {
        //  ___
        // |S#|
        // |#G|
        //  __
        let outcome = solve(&[&[1, 0], &[0, 1]], (0, 0), (1, 1));
        assert_eq!(outcome, SearchOutcome::Unreachable);
    }

    #[test]
    fn test_complex() {
        let rows: Vec<Vec<i64>> = (0..10)
            .map(|r| {
                (0..10)
                    .map(|c| match (r, c) {
                        (1, 1) | (5, 0) | (0, 5) | (8, 8) => 0,
                        _ => 1,
                    })
                    .collect()
            })
            .collect();
        let grid = GridGraph::from_rows(&rows, (0, 0), (7, 7)).unwrap();
        let path = AstarSolver::new().get_path(&grid);
        let path = path.path().unwrap();
        assert_eq!(path.len(), 15);
        assert_eq!(path.cost, 14);
    }

    #[test]
    fn heuristic_scales_with_factor() {
        let grid = GridGraph::from_rows(&[[1, 1, 1, 1, 1]], (0, 0), (0, 4)).unwrap();
        assert_eq!(AstarSolver::new().heuristic(&grid, 0), 4);
        assert_eq!(AstarSolver::with_heuristic_factor(1.5).heuristic(&grid, 0), 6);
        assert_eq!(AstarSolver::with_heuristic_factor(0.0).heuristic(&grid, 0), 0);
    }
}
