use log::debug;

use crate::engine;
use crate::grid::{Grid, GridError};
use crate::randomizer::seeded_rng;

/// Sequences seeding commands and generation steps over one grid.
///
/// Toggling and painting stay available after `begin`, so cells can still be
/// seeded into a running simulation.
pub struct Simulation {
    grid: Grid,
    started: bool,
    generation: u64,
}

impl Simulation {
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(rows, columns)?,
            started: false,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Generations completed since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flips one cell and reports the state it ended up in.
    pub fn toggle(&mut self, row: usize, column: usize) -> Result<bool, GridError> {
        self.grid.toggle(row, column)
    }

    /// Writes one cell outright, for drag painting.
    pub fn paint(&mut self, row: usize, column: usize, alive: bool) -> Result<(), GridError> {
        self.grid.set(row, column, alive)
    }

    /// Starts stepping on subsequent ticks. Idempotent.
    pub fn begin(&mut self) {
        self.started = true;
    }

    /// Advances one generation once the simulation has begun; a no-op before.
    pub fn tick(&mut self) {
        if !self.started {
            return;
        }
        engine::step(&mut self.grid);
        self.generation += 1;
        debug!("advanced to generation {}", self.generation);
    }

    /// Kills every cell and returns to the seeding state.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.started = false;
        self.generation = 0;
    }

    /// Reseeds the whole grid at random.
    pub fn randomize(&mut self) {
        let mut rng = seeded_rng();
        self.grid.randomize(&mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker_sim() -> Simulation {
        let mut sim = Simulation::new(5, 5).unwrap();
        for (row, column) in [(1, 2), (2, 2), (3, 2)] {
            sim.paint(row, column, true).unwrap();
        }
        sim
    }

    fn live_cells(sim: &Simulation) -> Vec<(usize, usize)> {
        let grid = sim.grid();
        let mut live = Vec::new();
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                if grid.get(row, column).unwrap().is_alive() {
                    live.push((row, column));
                }
            }
        }
        live
    }

    #[test]
    fn test_tick_before_begin_is_a_noop() {
        let mut sim = blinker_sim();
        let seeded = live_cells(&sim);
        sim.tick();
        sim.tick();
        assert_eq!(live_cells(&sim), seeded);
        assert_eq!(sim.generation(), 0);
        assert!(!sim.started());
    }

    #[test]
    fn test_tick_steps_once_begun() {
        let mut sim = blinker_sim();
        sim.begin();
        sim.tick();
        assert_eq!(live_cells(&sim), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_begin_is_idempotent() {
        let mut sim = blinker_sim();
        sim.begin();
        sim.begin();
        assert!(sim.started());
        sim.tick();
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_toggle_stays_available_while_running() {
        let mut sim = blinker_sim();
        sim.begin();
        sim.tick();
        assert!(sim.toggle(0, 0).unwrap());
        assert!(!sim.toggle(0, 0).unwrap());
    }

    #[test]
    fn test_paint_is_idempotent() {
        let mut sim = Simulation::new(3, 3).unwrap();
        sim.paint(1, 1, true).unwrap();
        sim.paint(1, 1, true).unwrap();
        assert_eq!(live_cells(&sim), vec![(1, 1)]);
    }

    #[test]
    fn test_out_of_bounds_commands_are_surfaced() {
        let mut sim = Simulation::new(3, 3).unwrap();
        assert!(sim.toggle(3, 0).is_err());
        assert!(sim.paint(0, 3, true).is_err());
        assert!(live_cells(&sim).is_empty());
    }

    #[test]
    fn test_reset_returns_to_the_seeding_state() {
        let mut sim = blinker_sim();
        sim.begin();
        sim.tick();
        sim.reset();
        assert!(live_cells(&sim).is_empty());
        assert!(!sim.started());
        assert_eq!(sim.generation(), 0);
        // Back in seeding mode: ticks do nothing until begun again.
        sim.paint(0, 0, true).unwrap();
        sim.tick();
        assert_eq!(live_cells(&sim), vec![(0, 0)]);
    }

    #[test]
    fn test_randomize_leaves_controller_state_alone() {
        let mut sim = Simulation::new(20, 20).unwrap();
        sim.randomize();
        assert!(!sim.started());
        assert_eq!(sim.generation(), 0);
    }
}
