use super::Grid;
use crate::{SeedRegion, Seeding};
use rand::Rng;

/// Two equally sized grids with swappable roles.
///
/// The front grid holds the current generation and is what gets drawn;
/// the back grid is scratch space the next generation is written into.
pub struct GridBuffer {
    grids: [Grid; 2],
    front: usize,
}

impl GridBuffer {
    /// # Panics
    ///
    /// If `side < 3`.
    pub fn blank(side: usize) -> Self {
        Self {
            grids: [Grid::blank(side), Grid::blank(side)],
            front: 0,
        }
    }

    /// Buffer whose front grid is seeded according to `seeding`, with `rng`
    /// as the source of coordinates.
    pub fn random(side: usize, seeding: &Seeding, rng: &mut impl Rng) -> Self {
        let mut buffer = Self::blank(side);
        buffer.seed(seeding, rng);
        buffer
    }

    /// Wraps an existing grid as the front. The back gets the same border
    /// and a dead interior.
    pub fn from_grid(front: Grid) -> Self {
        let back = Grid::blank(front.side());
        let mut buffer = Self {
            grids: [front, back],
            front: 0,
        };
        buffer.copy_border_to_back();
        buffer
    }

    pub fn side(&self) -> usize {
        self.grids[0].side()
    }

    pub fn front(&self) -> &Grid {
        &self.grids[self.front]
    }

    pub fn back(&self) -> &Grid {
        &self.grids[1 - self.front]
    }

    pub fn back_mut(&mut self) -> &mut Grid {
        &mut self.grids[1 - self.front]
    }

    /// Disjoint borrows of both roles: read the front while writing the back.
    pub fn front_and_back_mut(&mut self) -> (&Grid, &mut Grid) {
        let [first, second] = &mut self.grids;
        if self.front == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    /// Exchanges the roles of the two grids without copying cells.
    pub fn swap(&mut self) {
        self.front = 1 - self.front;
    }

    /// Kills every cell in both grids, then marks `seeding.target_count`
    /// uniformly drawn coordinates of the front grid alive. The same
    /// coordinate may be drawn more than once. Border cells hit by the draw
    /// are set in both grids, so they stay alive across swaps.
    pub fn seed(&mut self, seeding: &Seeding, rng: &mut impl Rng) {
        let n = self.side();
        let range = match seeding.region {
            SeedRegion::Interior => 1..n - 1,
            SeedRegion::TopLeft => 0..n - 1,
        };
        for grid in &mut self.grids {
            grid.clear();
        }
        let front = &mut self.grids[self.front];
        for _ in 0..seeding.target_count(n) {
            let x = rng.gen_range(range.clone());
            let y = rng.gen_range(range.clone());
            front.set(x, y, true);
        }
        self.copy_border_to_back();
    }

    /// `step` never writes the border, so both grids must agree on it.
    fn copy_border_to_back(&mut self) {
        let (front, back) = self.front_and_back_mut();
        for (x, y) in front.border() {
            back.set(x, y, front.get(x, y));
        }
    }
}
