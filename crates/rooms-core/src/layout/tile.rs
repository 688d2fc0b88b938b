//! Grid tiles and cardinal directions

use core::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cardinal step direction. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour lookup order used everywhere in the crate
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Offset `(dx, dy)` of one step in this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A grid cell identified by integer coordinates
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent tile one step in `dir`, or `None` past the edge of the
    /// coordinate range
    pub const fn step(self, dir: Direction) -> Option<Tile> {
        let (dx, dy) = dir.delta();
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Tile::new(x, y)),
            _ => None,
        }
    }

    /// The cardinal neighbours in [`Direction::ALL`] order. Tiles on the edge
    /// of the coordinate range have fewer than four.
    pub fn neighbours(self) -> impl Iterator<Item = Tile> {
        Direction::ALL.into_iter().filter_map(move |dir| self.step(dir))
    }

    /// Whether `other` is one cardinal step away
    pub fn is_adjacent(self, other: Tile) -> bool {
        self.manhattan(other) == 1
    }

    /// Squared Euclidean distance. Orders pairs exactly like [`Tile::distance`].
    pub fn distance_squared(self, other: Tile) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }

    #[cfg(feature = "std")]
    pub fn distance(self, other: Tile) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Number of cardinal steps between the two tiles
    pub fn manhattan(self, other: Tile) -> i64 {
        (i64::from(other.x) - i64::from(self.x)).abs()
            + (i64::from(other.y) - i64::from(self.y)).abs()
    }
}

impl From<(i32, i32)> for Tile {
    fn from((x, y): (i32, i32)) -> Self {
        Tile::new(x, y)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
