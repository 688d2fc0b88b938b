//! Corridor carving
//!
//! Corridors are L-shaped: all vertical steps first, then all horizontal
//! steps. Neither endpoint is emitted; both already belong to a region.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use core::cmp::Ordering;

use super::tile::Tile;

/// Unit step from `at` towards `target`
fn toward(at: i32, target: i32) -> i32 {
    match target.cmp(&at) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

/// Tiles stepped through on the way from `from` to `to`
pub fn carve(from: Tile, to: Tile) -> Vec<Tile> {
    let steps = from.manhattan(to) as usize;
    let mut corridor = Vec::with_capacity(steps.saturating_sub(1));
    let mut pos = from;

    while pos.y != to.y {
        pos.y += toward(pos.y, to.y);
        if pos != to {
            corridor.push(pos);
        }
    }

    while pos.x != to.x {
        pos.x += toward(pos.x, to.x);
        if pos != to {
            corridor.push(pos);
        }
    }

    log::trace!("carved {} -> {}: {} tiles", from, to, corridor.len());
    corridor
}
