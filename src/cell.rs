#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub fn new(alive: bool) -> Self {
        Self { alive }
    }

    pub fn is_alive(self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive
    }

    /// Conway transition: birth on exactly three live neighbors, survival on
    /// two or three, death otherwise. Total over every neighbor count.
    #[must_use]
    pub fn next_state(self, live_neighbors: u8) -> Self {
        let alive = match (self.alive, live_neighbors) {
            (true, 2) | (true, 3) => true,
            (false, 3) => true,
            _ => false,
        };
        Self::new(alive)
    }
}
