use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer cell coordinate on the world grid.
///
/// A `Location` handed out by the grid is always in range; use
/// `Grid::wrap` to normalize arbitrary coordinates first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: u16,
    pub y: u16,
}

impl Location {
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Location {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unit offsets of the eight compass headings, clockwise starting at north.
/// The y axis grows downwards, so north is `dy = -1`.
pub const DIRECTION_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// One of the eight compass headings, always in `[0, 8)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Direction(u8);

impl Direction {
    pub const COUNT: u8 = 8;
    pub const NORTH: Self = Self(0);
    pub const EAST: Self = Self(2);
    pub const SOUTH: Self = Self(4);
    pub const WEST: Self = Self(6);

    /// Builds a heading from any integer, negative values included.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value.rem_euclid(i32::from(Self::COUNT)) as u8)
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Positive steps rotate clockwise, negative steps counter-clockwise.
    #[must_use]
    pub fn rotate(self, steps: i32) -> Self {
        Self::new(i32::from(self.0) + steps)
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        self.rotate(4)
    }

    /// Number of clockwise steps needed to turn from `self` to `target`.
    #[must_use]
    pub fn steps_to(self, target: Self) -> i32 {
        (i32::from(target.0) - i32::from(self.0)).rem_euclid(i32::from(Self::COUNT))
    }

    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        DIRECTION_OFFSETS[self.0 as usize]
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self)
    }
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        Self::new(i32::from(value))
    }
}
