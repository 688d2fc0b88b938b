//! Random room placement
//!
//! Each room is an axis-aligned rectangle anchored inside the nominal grid.
//! Rooms are not clamped: a room anchored near the edge extends past it.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::rng::IntegerSource;

use super::tile::Tile;

/// Coordinates `start..start + len`, ending at `i32::MAX` at the latest
fn span(start: i32, len: i32) -> RangeInclusive<i32> {
    if len > 0 {
        start..=start.saturating_add(len - 1)
    } else {
        1..=0
    }
}

/// A rectangle of tiles: `[x, x + width) x [y, y + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RoomRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a tile is inside this room
    pub fn contains(&self, tile: Tile) -> bool {
        span(self.x, self.width).contains(&tile.x) && span(self.y, self.height).contains(&tile.y)
    }

    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Every tile of the room, column by column. A room running past
    /// `i32::MAX` is cut at the edge of the coordinate range.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + use<> {
        let RoomRect {
            x,
            y,
            width,
            height,
        } = *self;
        span(x, width).flat_map(move |tx| span(y, height).map(move |ty| Tile::new(tx, ty)))
    }
}

/// Draw a room: anchor x, anchor y, then width, then height.
pub fn roll_room<R: IntegerSource + ?Sized>(config: &LayoutConfig, rng: &mut R) -> RoomRect {
    let x = rng.integer_in_range(0, config.grid.width.saturating_sub(1));
    let y = rng.integer_in_range(0, config.grid.height.saturating_sub(1));
    let width = rng.integer_in_range(config.room_width.min, config.room_width.max);
    let height = rng.integer_in_range(config.room_height.min, config.room_height.max);
    RoomRect::new(x, y, width, height)
}

/// Generate one room and return its tiles
pub fn generate_room<R: IntegerSource + ?Sized>(config: &LayoutConfig, rng: &mut R) -> Vec<Tile> {
    roll_room(config, rng).tiles().collect()
}

/// Generate `config.room_iterations` rooms, one tile group per room
pub fn generate_rooms<R: IntegerSource + ?Sized>(
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<Vec<Tile>> {
    let rooms: Vec<Vec<Tile>> = (0..config.room_iterations)
        .map(|_| generate_room(config, &mut *rng))
        .collect();
    log::debug!(
        "generated {} rooms ({} tiles)",
        rooms.len(),
        rooms.iter().map(Vec::len).sum::<usize>()
    );
    rooms
}
