/// A single position of the world.
///
/// The next state is buffered so that a whole generation can be computed
/// before any cell changes.
#[derive(Clone, Copy, Default, Debug)]
pub struct Cell {
    alive: bool,
    next_alive: bool,
}

impl Cell {
    pub fn toggle_life(&mut self) {
        self.alive = !self.alive;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Decides the next state from the number of alive neighbours (B3/S23).
    /// Nothing becomes visible until `commit`.
    pub fn compute_next(&mut self, neighbours: u8) {
        self.next_alive = matches!((self.alive, neighbours), (true, 2 | 3) | (false, 3));
    }

    pub fn commit(&mut self) {
        self.alive = self.next_alive;
    }
}

impl Cell {
    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }
}

// Only the visible state matters; `next_alive` is scratch space.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.alive == other.alive
    }
}

impl Eq for Cell {}
