//! Default generation parameters

/// Default minimum room width and height, in tiles
pub const DEFAULT_ROOM_MIN: i32 = 3;

/// Default maximum room width and height, in tiles
pub const DEFAULT_ROOM_MAX: i32 = 5;

/// Rooms placed per generation pass by default
pub const DEFAULT_ROOM_ITERATIONS: u32 = 25;

/// Default viewport edge length in pixels
pub const DEFAULT_VIEWPORT: u32 = 500;

/// Default cell size in pixels
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Cardinal neighbour count of a fully enclosed tile
pub const CARDINAL_NEIGHBOURS: usize = 4;
