use super::vector::Vector2;
use enum_map::{enum_map, Enum, EnumMap};

/// The direction in which the snake travels
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub(crate) fn axis(self) -> Axis {
        match self {
            Heading::Up | Heading::Down => Axis::Vertical,
            Heading::Left | Heading::Right => Axis::Horizontal,
        }
    }

    pub(crate) fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Build the table of per-heading moves for a board with the given cell
    /// size
    pub(crate) fn steps(cell_size: i32) -> EnumMap<Heading, Vector2> {
        enum_map! {
            Heading::Up => Vector2::new(0, -cell_size),
            Heading::Down => Vector2::new(0, cell_size),
            Heading::Left => Vector2::new(-cell_size, 0),
            Heading::Right => Vector2::new(cell_size, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Vertical,
    Horizontal,
}

/// Decide the heading that results from the player asking to turn towards
/// `requested` while travelling towards `current`.
///
/// Only quarter turns are honored.  Requests along the current axis
/// (continuing straight or reversing) leave `current` in place.
pub(crate) fn resolve(current: Heading, requested: Heading) -> Heading {
    if requested.axis() == current.axis() {
        current
    } else {
        requested
    }
}
