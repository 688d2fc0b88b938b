//! Region extraction (flood fill)
//!
//! Partitions a tile pool into maximal 4-connected regions. Rooms that
//! overlap or share an edge end up in the same region.

#[cfg(not(feature = "std"))]
use crate::compat::*;
#[cfg(feature = "std")]
use std::collections::VecDeque;

use super::tile::Tile;
use super::tileset::TileSet;

/// A maximal 4-connected set of tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    tiles: TileSet,
}

impl Region {
    /// Wrap a tile set. The caller is responsible for it being 4-connected.
    pub fn from_tiles(tiles: TileSet) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.contains(tile)
    }

    /// Top-left and bottom-right corners (inclusive) of the bounding box
    pub fn bounds(&self) -> Option<(Tile, Tile)> {
        let first = *self.tiles.iter().next()?;
        let (min, max) = self.tiles.iter().fold((first, first), |(lo, hi), t| {
            (
                Tile::new(lo.x.min(t.x), lo.y.min(t.y)),
                Tile::new(hi.x.max(t.x), hi.y.max(t.y)),
            )
        });
        Some((min, max))
    }

    /// Whether every tile is reachable from every other by cardinal steps inside the region
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.tiles.iter().next() else {
            return true;
        };
        let mut seen = TileSet::with_capacity(self.len());
        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(tile) = queue.pop_front() {
            for n in self.tiles.neighbours_of(tile) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len() == self.len()
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Tile;
    type IntoIter = core::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Split a deduplicated tile pool into 4-connected regions.
///
/// The working pool is a copy owned by this call. Each tile is claimed exactly
/// once, so the cost is linear in the number of tiles.
pub fn extract_regions(tiles: &TileSet) -> Vec<Region> {
    let mut pool = tiles.clone();
    let mut regions = Vec::new();
    let mut queue = VecDeque::new();

    while let Some(seed) = pool.pop() {
        let mut region = TileSet::new();
        region.insert(seed);
        queue.push_back(seed);

        while let Some(tile) = queue.pop_front() {
            for n in tile.neighbours() {
                if pool.remove(&n) {
                    region.insert(n);
                    queue.push_back(n);
                }
            }
        }

        regions.push(Region::from_tiles(region));
    }

    log::debug!(
        "extracted {} regions from {} tiles",
        regions.len(),
        tiles.len()
    );
    regions
}

/// Deduplicate the raw room tiles, then extract regions
pub fn extract_regions_from_rooms(rooms: &[Vec<Tile>]) -> Vec<Region> {
    let pool: TileSet = rooms.iter().flatten().copied().collect();
    extract_regions(&pool)
}
