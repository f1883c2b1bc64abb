use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::grid::{Grid, Position};

/// A food item on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: Position,
    pub bonus: bool,
}

impl Food {
    pub fn regular(cell: Position) -> Self {
        Self { cell, bonus: false }
    }

    pub fn bonus(cell: Position) -> Self {
        Self { cell, bonus: true }
    }
}

/// Raised when rejection sampling fails to find a free cell within the
/// retry cap. Unreachable in practice below full grid occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no free cell found after {attempts} spawn attempts")]
pub struct SpawnExhausted {
    pub attempts: usize,
}

/// Places food on random free cells via rejection sampling
#[derive(Debug)]
pub struct FoodSpawner {
    rng: StdRng,
    max_attempts: usize,
}

impl FoodSpawner {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_attempts,
        }
    }

    /// Deterministic spawner for tests
    pub fn seeded(seed: u64, max_attempts: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_attempts,
        }
    }

    /// Draw a uniformly random cell that is not in `occupied`.
    ///
    /// Resamples up to the retry cap rather than looping forever on a
    /// (near-)full grid.
    pub fn spawn(&mut self, grid: Grid, occupied: &[Position]) -> Result<Position, SpawnExhausted> {
        for _ in 0..self.max_attempts {
            let x = self.rng.gen_range(0..grid.size()) as i32;
            let y = self.rng.gen_range(0..grid.size()) as i32;
            let pos = Position::new(x, y);

            if !occupied.contains(&pos) {
                return Ok(pos);
            }
        }

        Err(SpawnExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_avoids_occupied() {
        let grid = Grid::new(3);
        let mut spawner = FoodSpawner::seeded(7, 1000);

        // Leave exactly one free cell
        let mut occupied = Vec::new();
        for x in 0..3 {
            for y in 0..3 {
                if (x, y) != (1, 1) {
                    occupied.push(Position::new(x, y));
                }
            }
        }

        for _ in 0..20 {
            let pos = spawner.spawn(grid, &occupied).unwrap();
            assert_eq!(pos, Position::new(1, 1));
        }
    }

    #[test]
    fn test_spawn_in_bounds() {
        let grid = Grid::new(5);
        let mut spawner = FoodSpawner::seeded(42, 100);

        for _ in 0..50 {
            let pos = spawner.spawn(grid, &[]).unwrap();
            assert!(grid.in_bounds(pos));
        }
    }

    #[test]
    fn test_spawn_exhausted_on_full_grid() {
        let grid = Grid::new(2);
        let mut spawner = FoodSpawner::seeded(0, 64);

        let occupied: Vec<Position> = (0..2)
            .flat_map(|x| (0..2).map(move |y| Position::new(x, y)))
            .collect();

        let err = spawner.spawn(grid, &occupied).unwrap_err();
        assert_eq!(err.attempts, 64);
    }

    #[test]
    fn test_seeded_spawner_is_deterministic() {
        let grid = Grid::new(10);
        let mut a = FoodSpawner::seeded(99, 100);
        let mut b = FoodSpawner::seeded(99, 100);

        for _ in 0..10 {
            assert_eq!(a.spawn(grid, &[]).unwrap(), b.spawn(grid, &[]).unwrap());
        }
    }
}
