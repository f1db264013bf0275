use super::vector::Vector2;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Board geometry together with the grid of cells in which food may be
/// placed
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    /// Board width in pixels
    width: i32,

    /// Board height in pixels
    height: i32,

    /// Side length of one cell in pixels
    cell_size: i32,

    /// Number of cell columns, border included
    columns: i32,

    /// Number of cell rows, border included
    rows: i32,

    /// Grid coordinates of the cells eligible for food.
    ///
    /// This covers columns `1..=W/S - 3` and rows `1..=H/S - 3`, which is one
    /// cell short of the travellable interior on the right and bottom edges.
    /// Food therefore never appears in the last interior column or row even
    /// though the snake can move there.
    food_cells: Vec<Vector2>,
}

impl Board {
    pub(crate) fn new(width: i32, height: i32, cell_size: i32) -> Board {
        let columns = width.checked_div(cell_size).unwrap_or_default();
        let rows = height.checked_div(cell_size).unwrap_or_default();
        let food_cells = (1..columns - 2)
            .flat_map(|x| (1..rows - 2).map(move |y| Vector2::new(x, y)))
            .collect();
        Board {
            width,
            height,
            cell_size,
            columns,
            rows,
            food_cells,
        }
    }

    pub(crate) fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub(crate) fn columns(&self) -> i32 {
        self.columns
    }

    pub(crate) fn rows(&self) -> i32 {
        self.rows
    }

    /// Test whether the pixel position `p` lies strictly inside the border
    pub(crate) fn is_interior(&self, p: Vector2) -> bool {
        0 < p.x
            && p.x < self.width - self.cell_size
            && 0 < p.y
            && p.y < self.height - self.cell_size
    }

    /// Pick a food cell not in `occupied` uniformly at random and return its
    /// pixel position.  Returns `None` if every food cell is occupied.
    pub(crate) fn sample_free_cell<R: Rng>(
        &self,
        occupied: &HashSet<Vector2>,
        rng: &mut R,
    ) -> Option<Vector2> {
        self.food_cells
            .iter()
            .map(|cell| cell.scale(self.cell_size))
            .filter(|p| !occupied.contains(p))
            .choose(rng)
    }

    #[cfg(test)]
    pub(crate) fn food_cells(&self) -> &[Vector2] {
        &self.food_cells
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(
            consts::BOARD_WIDTH,
            consts::BOARD_HEIGHT,
            consts::CELL_SIZE,
        )
    }
}
