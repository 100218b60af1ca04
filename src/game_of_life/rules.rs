//! Conway's B3/S23 transition rule

use super::Grid;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Age of a cell in the next generation: one more while alive, reset on death
    pub fn next_age(age: u32, alive_next: bool) -> u32 {
        if alive_next {
            age.saturating_add(1)
        } else {
            0
        }
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid.advance();
        }
        grid
    }
}
