//! Maze generation

use std::collections::HashSet;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{Cell, CellState, Grid, GridError};

/// Connected-maze generator with an optional reproducibility seed.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a grid by randomized depth-first exploration from `(0, 0)`.
    ///
    /// The walk keeps a stack of discovered cells and a visited set, so each
    /// cell is scheduled at most once and the whole pass is O(rows * cols).
    /// A popped cell is always marked passable; a newly discovered neighbor
    /// stays blocked at discovery time with probability `wall_probability`.
    /// Every cell marked passable connects back to the origin through cells
    /// opened during the same walk. The per-cell direction shuffle varies
    /// which branches form first, so different seeds give different layouts.
    pub fn generate(
        &mut self,
        rows: usize,
        cols: usize,
        wall_probability: f64,
    ) -> Result<Grid, GridError> {
        if !(0.0..=1.0).contains(&wall_probability) {
            return Err(GridError::InvalidWallProbability(wall_probability));
        }
        let mut grid = Grid::filled(rows, cols, CellState::Blocked)?;

        let origin = Cell::new(0, 0);
        let mut stack = vec![origin];
        let mut visited = HashSet::from([origin]);

        while let Some(cell) = stack.pop() {
            grid.force_passable(cell)?;

            let mut directions = Self::DIRECTIONS.to_vec();
            directions.shuffle(&mut self.random);

            for delta in directions {
                let Some(neighbor) = grid.neighbor(cell, delta) else {
                    continue;
                };
                if visited.contains(&neighbor) {
                    continue;
                }
                if self.random.gen_bool(1.0 - wall_probability) {
                    grid.force_passable(neighbor)?;
                }
                visited.insert(neighbor);
                stack.push(neighbor);
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{maze_generator::MazeGenerator, Cell, Grid, GridError};

    /// Passable cells reachable from the origin, walking 4-neighbors only.
    fn reachable_from_origin(grid: &Grid) -> HashSet<Cell> {
        let origin = Cell::new(0, 0);
        let mut seen = HashSet::new();
        let mut frontier = vec![origin];
        if grid.is_passable(origin) {
            seen.insert(origin);
        }
        while let Some(cell) = frontier.pop() {
            for delta in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                if let Some(next) = grid.neighbor(cell, delta) {
                    if grid.is_passable(next) && seen.insert(next) {
                        frontier.push(next);
                    }
                }
            }
        }
        seen
    }

    #[test]
    fn origin_is_passable() {
        let mut generator = MazeGenerator::new(Some(0));
        let grid = generator.generate(5, 5, 0.5).unwrap();

        assert!(grid.is_passable(Cell::new(0, 0)));
    }

    #[test]
    fn passable_cells_connect_to_origin() {
        let mut generator = MazeGenerator::new(Some(7));
        let grid = generator.generate(9, 7, 0.3).unwrap();

        let reachable = reachable_from_origin(&grid);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let cell = Cell::new(row, col);
                if grid.is_passable(cell) {
                    assert!(
                        reachable.contains(&cell),
                        "passable cell {cell:?} is cut off from the origin"
                    );
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_layout() {
        let grid_a = MazeGenerator::new(Some(42)).generate(8, 8, 0.3).unwrap();
        let grid_b = MazeGenerator::new(Some(42)).generate(8, 8, 0.3).unwrap();

        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn single_cell_grid_is_just_the_origin() {
        let mut generator = MazeGenerator::new(Some(3));
        let grid = generator.generate(1, 1, 1.0).unwrap();

        assert!(grid.is_passable(Cell::new(0, 0)));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let mut generator = MazeGenerator::new(Some(0));

        assert_eq!(
            generator.generate(0, 5, 0.3),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn rejects_wall_probability_outside_unit_interval() {
        let mut generator = MazeGenerator::new(Some(0));

        assert_eq!(
            generator.generate(3, 3, 1.5),
            Err(GridError::InvalidWallProbability(1.5))
        );
        assert_eq!(
            generator.generate(3, 3, -0.1),
            Err(GridError::InvalidWallProbability(-0.1))
        );
    }
}
