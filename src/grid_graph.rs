use crate::error::{Endpoint, Error, Result};
use crate::{Cell, MAX_COST, N_SMALLVEC_SIZE, WALL};
use core::fmt;
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Accumulates validated cost rows and resolves the endpoints into a [GridGraph].
#[derive(Clone, Debug)]
pub struct GridBuilder {
    length: usize,
    width: usize,
    costs: Vec<u8>,
}

impl GridBuilder {
    /// Starts a grid of `length` rows and `width` columns. Both must be positive.
    pub fn new(length: i64, width: i64) -> Result<GridBuilder> {
        let length = positive_dimension("length", length)?;
        let width = positive_dimension("width", width)?;
        Ok(GridBuilder {
            length,
            width,
            costs: Vec::new(),
        })
    }

    /// Number of rows pushed so far.
    pub fn rows(&self) -> usize {
        self.costs.len() / self.width
    }

    /// Appends the next row of costs.
    pub fn push_row(&mut self, values: &[i64]) -> Result<()> {
        let row = self.rows();
        if row == self.length {
            return Err(Error::RowCount {
                expected: self.length,
                found: row + 1,
            });
        }
        if values.len() != self.width {
            return Err(Error::RowLength {
                row,
                expected: self.width,
                found: values.len(),
            });
        }
        for (col, &value) in values.iter().enumerate() {
            let cost = u8::try_from(value)
                .ok()
                .filter(|c| *c <= MAX_COST)
                .ok_or(Error::CostOutOfRange { row, col, value })?;
            self.costs.push(cost);
        }
        Ok(())
    }

    /// Resolves start and finish, links up the adjacency and generates the components.
    pub fn build(self, start: (i64, i64), finish: (i64, i64)) -> Result<GridGraph> {
        if self.rows() != self.length {
            return Err(Error::RowCount {
                expected: self.length,
                found: self.rows(),
            });
        }
        let start = self.endpoint(Endpoint::Start, start)?;
        let finish = self.endpoint(Endpoint::Finish, finish)?;
        let mut grid = GridGraph {
            length: self.length,
            width: self.width,
            costs: self.costs,
            adjacency: Vec::new(),
            components: UnionFind::new(0),
            start,
            finish,
        };
        grid.generate_adjacency();
        grid.generate_components();
        Ok(grid)
    }

    /// Resolves an endpoint to its cell index. Every row must have been pushed.
    pub(crate) fn endpoint(&self, endpoint: Endpoint, (row, col): (i64, i64)) -> Result<usize> {
        let in_bounds = |v: i64, limit: usize| v >= 0 && (v as u64) < limit as u64;
        if !in_bounds(row, self.length) || !in_bounds(col, self.width) {
            return Err(Error::EndpointOutOfBounds {
                endpoint,
                row,
                col,
                max_row: self.length - 1,
                max_col: self.width - 1,
            });
        }
        let (row, col) = (row as usize, col as usize);
        let ix = row * self.width + col;
        if self.costs[ix] == WALL {
            return Err(Error::EndpointIsWall { endpoint, row, col });
        }
        Ok(ix)
    }
}

fn positive_dimension(name: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(Error::InvalidDimension { name, value });
    }
    usize::try_from(value).map_err(|_| Error::InvalidDimension { name, value })
}

/// [GridGraph] owns the cost of every cell in a flat arena indexed by `row * width + col`, the
/// orthogonal adjacency between those indices, and the connected components of the passable
/// cells in a [UnionFind] structure. It is immutable once built and holds no search state.
#[derive(Clone, Debug)]
pub struct GridGraph {
    length: usize,
    width: usize,
    costs: Vec<u8>,
    adjacency: Vec<SmallVec<[usize; N_SMALLVEC_SIZE]>>,
    components: UnionFind<usize>,
    start: usize,
    finish: usize,
}

impl GridGraph {
    /// Builds a graph from complete rows. Mostly useful for tests and benchmarks; the
    /// dimensions are taken from the rows themselves.
    pub fn from_rows<R: AsRef<[i64]>>(
        rows: &[R],
        start: (i64, i64),
        finish: (i64, i64),
    ) -> Result<GridGraph> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut builder = GridBuilder::new(rows.len() as i64, width as i64)?;
        for row in rows {
            builder.push_row(row.as_ref())?;
        }
        builder.build(start, finish)
    }

    pub fn length(&self) -> usize {
        self.length
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn len(&self) -> usize {
        self.costs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
    pub fn start(&self) -> usize {
        self.start
    }
    pub fn finish(&self) -> usize {
        self.finish
    }

    pub fn get_ix(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }
    pub fn cell(&self, ix: usize) -> Cell {
        Cell::new(ix / self.width, ix % self.width)
    }
    pub fn cost(&self, ix: usize) -> u8 {
        self.costs[ix]
    }
    pub fn is_wall(&self, ix: usize) -> bool {
        self.costs[ix] == WALL
    }

    /// Orthogonal neighbours of `ix` in up, left, right, down order. Walls are included; no
    /// entry for a direction means the grid ends there.
    pub fn neighbours(&self, ix: usize) -> &[usize] {
        &self.adjacency[ix]
    }

    /// Passable neighbours of `ix` paired with the cost of entering them.
    pub fn neighbours_and_cost(&self, ix: usize) -> SmallVec<[(usize, u32); N_SMALLVEC_SIZE]> {
        self.neighbours(ix)
            .iter()
            .filter(|&&n| !self.is_wall(n))
            .map(|&n| (n, self.costs[n] as u32))
            .collect()
    }

    /// Manhattan distance from `ix` to the finish.
    pub fn distance_to_finish(&self, ix: usize) -> u32 {
        self.cell(ix).manhattan_distance(&self.cell(self.finish)) as u32
    }

    /// Sum of the costs of every cell entered along `path`. The first cell is where the path
    /// starts and costs nothing.
    pub fn path_cost(&self, path: &[Cell]) -> u32 {
        path.iter()
            .skip(1)
            .map(|&c| self.costs[self.get_ix(c)] as u32)
            .sum()
    }

    /// Retrieves the component id a given cell index belongs to.
    pub fn get_component(&self, ix: usize) -> usize {
        self.components.find(ix)
    }

    /// Checks if two cell indices are on the same connected component.
    pub fn reachable(&self, a: usize, b: usize) -> bool {
        a < self.len() && b < self.len() && self.components.equiv(a, b)
    }

    /// Checks if start and finish are on different connected components.
    pub fn unreachable(&self) -> bool {
        if self.reachable(self.start, self.finish) {
            false
        } else {
            info!(
                "{} and {} are not on the same component",
                self.cell(self.start),
                self.cell(self.finish)
            );
            true
        }
    }

    fn generate_adjacency(&mut self) {
        let (l, w) = (self.length, self.width);
        self.adjacency = (0..l * w)
            .map(|ix| {
                let (row, col) = (ix / w, ix % w);
                let mut n = SmallVec::new();
                if row > 0 {
                    n.push(ix - w);
                }
                if col > 0 {
                    n.push(ix - 1);
                }
                if col + 1 < w {
                    n.push(ix + 1);
                }
                if row + 1 < l {
                    n.push(ix + w);
                }
                n
            })
            .collect();
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components. Only the right and lower neighbours need visiting.
    fn generate_components(&mut self) {
        let w = self.width;
        self.components = UnionFind::new(self.len());
        for ix in 0..self.len() {
            if self.is_wall(ix) {
                continue;
            }
            let right = (ix % w + 1 < w).then_some(ix + 1);
            let down = (ix + w < self.len()).then_some(ix + w);
            for n in right.into_iter().chain(down) {
                if !self.is_wall(n) {
                    self.components.union(ix, n);
                }
            }
        }
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} {}", self.length, self.width)?;
        for row in self.costs.chunks(self.width) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        write!(f, "{} {}", self.cell(self.start), self.cell(self.finish))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(length: usize, width: usize) -> Vec<Vec<i64>> {
        vec![vec![1; width]; length]
    }

    #[test]
    fn builds_one_cell_per_coordinate() {
        let grid = GridGraph::from_rows(&open_grid(3, 4), (0, 0), (2, 3)).unwrap();
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.length(), 3);
        assert_eq!(grid.width(), 4);
        for ix in 0..grid.len() {
            assert_eq!(grid.get_ix(grid.cell(ix)), ix);
        }
        assert_eq!(grid.cell(grid.finish()), Cell::new(2, 3));
    }

    /// Corners have two neighbours, edges three, the interior four, in up, left, right, down
    /// order.
    #[test]
    fn adjacency_is_orthogonal_without_wraparound() {
        let grid = GridGraph::from_rows(&open_grid(3, 3), (0, 0), (2, 2)).unwrap();
        assert_eq!(grid.neighbours(0), &[1, 3]);
        assert_eq!(grid.neighbours(1), &[0, 2, 4]);
        assert_eq!(grid.neighbours(4), &[1, 3, 5, 7]);
        assert_eq!(grid.neighbours(8), &[5, 7]);
        assert_eq!(grid.neighbours(2), &[1, 5]);
    }

    #[test]
    fn neighbours_and_cost_skip_walls() {
        let grid = GridGraph::from_rows(&[[1, 0, 1], [7, 1, 1]], (0, 0), (1, 2)).unwrap();
        let succ = grid.neighbours_and_cost(0);
        assert_eq!(succ.as_slice(), &[(3, 7)]);
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |S# |
        // | # |
        // | #G|
        let rows = [[1, 0, 1], [1, 0, 1], [1, 0, 1]];
        let grid = GridGraph::from_rows(&rows, (0, 0), (2, 2)).unwrap();
        assert!(grid.reachable(0, 6));
        assert!(grid.reachable(2, 8));
        assert!(!grid.reachable(0, 2));
        assert!(grid.unreachable());
        assert_eq!(grid.get_component(3), grid.get_component(6));
    }

    /// Diagonal contact does not connect cells on a 4-grid.
    #[test]
    fn diagonal_cells_are_not_connected() {
        let grid = GridGraph::from_rows(&[[1, 0], [0, 1]], (0, 0), (1, 1)).unwrap();
        assert!(grid.unreachable());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(
            GridBuilder::new(0, 3),
            Err(Error::InvalidDimension { name: "length", .. })
        ));
        assert!(matches!(
            GridBuilder::new(2, -1),
            Err(Error::InvalidDimension { name: "width", .. })
        ));
    }

    #[test]
    fn rejects_bad_rows() {
        let mut builder = GridBuilder::new(2, 2).unwrap();
        assert!(matches!(
            builder.push_row(&[1, 2, 3]),
            Err(Error::RowLength { row: 0, expected: 2, found: 3 })
        ));
        assert!(matches!(
            builder.push_row(&[1, 10]),
            Err(Error::CostOutOfRange { row: 0, col: 1, value: 10 })
        ));
        assert!(matches!(
            builder.push_row(&[-1, 1]),
            Err(Error::CostOutOfRange { col: 0, value: -1, .. })
        ));
        builder.push_row(&[1, 1]).unwrap();
        assert!(matches!(
            builder.clone().build((0, 0), (0, 1)),
            Err(Error::RowCount { expected: 2, found: 1 })
        ));
        builder.push_row(&[1, 1]).unwrap();
        assert!(matches!(
            builder.push_row(&[1, 1]),
            Err(Error::RowCount { expected: 2, found: 3 })
        ));
    }

    #[test]
    fn rejects_bad_endpoints() {
        let rows = [[1, 0], [1, 1]];
        assert!(matches!(
            GridGraph::from_rows(&rows, (2, 0), (1, 1)),
            Err(Error::EndpointOutOfBounds { endpoint: Endpoint::Start, row: 2, .. })
        ));
        assert!(matches!(
            GridGraph::from_rows(&rows, (0, 0), (1, -1)),
            Err(Error::EndpointOutOfBounds { endpoint: Endpoint::Finish, col: -1, .. })
        ));
        assert!(matches!(
            GridGraph::from_rows(&rows, (0, 1), (1, 1)),
            Err(Error::EndpointIsWall { endpoint: Endpoint::Start, row: 0, col: 1 })
        ));
        assert!(matches!(
            GridGraph::from_rows(&rows, (0, 0), (0, 1)),
            Err(Error::EndpointIsWall { endpoint: Endpoint::Finish, row: 0, col: 1 })
        ));
    }

    #[test]
    fn path_cost_excludes_first_cell() {
        let grid = GridGraph::from_rows(&[[5, 9, 1]], (0, 0), (0, 2)).unwrap();
        let path = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
        assert_eq!(grid.path_cost(&path), 10);
        assert_eq!(grid.path_cost(&path[..1]), 0);
    }

    #[test]
    fn display_matches_input_format() {
        let grid = GridGraph::from_rows(&[[1, 0, 3], [4, 5, 6]], (0, 0), (1, 2)).unwrap();
        assert_eq!(grid.to_string(), "2 3\n1 0 3\n4 5 6\n0 0 1 2");
    }
}
