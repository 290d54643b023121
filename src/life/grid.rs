use std::fmt;

/// Square field of cells stored row-major: cell `(x, y)` lives at `x + y * side`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    side: usize,
}

impl Grid {
    /// Creates a grid of dead cells.
    ///
    /// # Panics
    ///
    /// If `side < 3`: such a grid has no interior.
    pub fn blank(side: usize) -> Self {
        assert!(side >= 3, "grid side must be at least 3, got {side}");
        Self {
            cells: vec![false; side * side],
            side,
        }
    }

    /// Builds a grid from a picture, one string per row, `#` or `O` for
    /// alive cells and anything else for dead ones.
    ///
    /// # Panics
    ///
    /// If the picture is not square or is smaller than 3x3.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::blank(rows.len());
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), grid.side, "row {y} has wrong length");
            for (x, c) in row.chars().enumerate() {
                grid.set(x, y, matches!(c, '#' | 'O'));
            }
        }
        grid
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.side]
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x + y * self.side] = state;
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.side)
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of alive cells among the 8 neighbours of an interior cell.
    pub fn live_neighbours(&self, x: usize, y: usize) -> usize {
        debug_assert!(0 < x && x + 1 < self.side && 0 < y && y + 1 < self.side);
        let n = self.side;
        let (up, mid, down) = (
            &self.cells[(y - 1) * n + x - 1..(y - 1) * n + x + 2],
            &self.cells[y * n + x - 1..y * n + x + 2],
            &self.cells[(y + 1) * n + x - 1..(y + 1) * n + x + 2],
        );
        up.iter().filter(|&&c| c).count()
            + mid[0] as usize
            + mid[2] as usize
            + down.iter().filter(|&&c| c).count()
    }

    /// Iterates over the border cells' coordinates.
    pub fn border(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.side;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                (x == 0 || y == 0 || x == n - 1 || y == n - 1).then_some((x, y))
            })
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
