use std::fmt;
use std::ops::Add;

/// A point on the board, in board-pixel coordinates unless stated otherwise
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Vector2 {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Vector2 {
    pub(crate) const fn new(x: i32, y: i32) -> Vector2 {
        Vector2 { x, y }
    }

    /// Return this point moved by `offset`
    pub(crate) const fn translate(self, offset: Vector2) -> Vector2 {
        Vector2 {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }

    /// Scale both coordinates by `factor`; converts grid coordinates to pixel
    /// coordinates when `factor` is the cell size.
    pub(crate) const fn scale(self, factor: i32) -> Vector2 {
        Vector2 {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Convert pixel coordinates to the grid coordinates of the containing
    /// cell.  Returns `None` for a non-positive `cell_size`.
    pub(crate) fn to_grid(self, cell_size: i32) -> Option<Vector2> {
        Some(Vector2 {
            x: self.x.checked_div_euclid(cell_size)?,
            y: self.y.checked_div_euclid(cell_size)?,
        })
        .filter(|_| cell_size > 0)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        self.translate(rhs)
    }
}

impl From<(i32, i32)> for Vector2 {
    fn from((x, y): (i32, i32)) -> Vector2 {
        Vector2 { x, y }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
