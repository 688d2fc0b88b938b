//! Character preview of a layout
//!
//! One character per tile, covering the bounding box of everything added.
//! Later layers overwrite earlier ones.

use std::collections::BTreeMap;
use std::fmt;

use rooms_core::{Region, Tile};

const FLOOR: char = '.';
const BOUNDARY: char = '#';
const CORRIDOR: char = '+';
const EMPTY: char = ' ';
const REGION_LABELS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Default)]
pub struct Preview {
    cells: BTreeMap<(i32, i32), char>,
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    fn put(&mut self, tile: Tile, ch: char) {
        // Row-major key so iteration follows print order
        self.cells.insert((tile.y, tile.x), ch);
    }

    pub fn add_rooms(&mut self, rooms: &[Vec<Tile>]) {
        for tile in rooms.iter().flatten() {
            self.put(*tile, FLOOR);
        }
    }

    /// Each region drawn with its own letter
    pub fn add_regions(&mut self, regions: &[Region]) {
        for (i, region) in regions.iter().enumerate() {
            let label = REGION_LABELS[i % REGION_LABELS.len()] as char;
            for tile in region {
                self.put(*tile, label);
            }
        }
    }

    pub fn add_boundaries(&mut self, regions: &[Region], boundaries: &[Vec<Tile>]) {
        for tile in regions.iter().flat_map(|r| r.iter()) {
            self.put(*tile, FLOOR);
        }
        for tile in boundaries.iter().flatten() {
            self.put(*tile, BOUNDARY);
        }
    }

    pub fn add_corridors(&mut self, corridors: &[Tile]) {
        for tile in corridors {
            self.put(*tile, CORRIDOR);
        }
    }

    fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let (&(min_y, _), _) = self.cells.first_key_value()?;
        let (&(max_y, _), _) = self.cells.last_key_value()?;
        let min_x = self.cells.keys().map(|&(_, x)| x).min()?;
        let max_x = self.cells.keys().map(|&(_, x)| x).max()?;
        Some((min_x, min_y, max_x, max_y))
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((min_x, min_y, max_x, max_y)) = self.bounds() else {
            return Ok(());
        };
        for y in min_y..=max_y {
            let row: String = (min_x..=max_x)
                .map(|x| self.cells.get(&(y, x)).copied().unwrap_or(EMPTY))
                .collect();
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}
