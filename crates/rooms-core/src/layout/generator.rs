//! Layout generation passes
//!
//! [`LayoutGenerator`] owns the configuration, the random source and the room
//! pool. Its four operations mirror the debug triggers a host exposes:
//! generate rooms, extract regions, detect boundaries, connect regions.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::config::LayoutConfig;
use crate::rng::IntegerSource;

use super::boundary::detect_boundaries;
use super::connect::{Connection, RegionGroups, connect_with_links};
use super::region::{Region, extract_regions_from_rooms};
use super::room::generate_rooms;
use super::tile::Tile;

/// Result of a full pass
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Extracted regions
    pub regions: Vec<Region>,
    /// Corridor tiles in carve order. May overlap region tiles.
    pub corridors: Vec<Tile>,
    /// The carves that produced `corridors`
    pub connections: Vec<Connection>,
}

impl Layout {
    /// Run extraction, boundary detection and connection over a room pool
    pub fn from_rooms(rooms: &[Vec<Tile>], config: &LayoutConfig) -> Self {
        let regions = extract_regions_from_rooms(rooms);
        let boundaries = detect_boundaries(&regions);
        let connections = connect_with_links(&boundaries, config.connect_mode);
        let corridors = connections
            .iter()
            .flat_map(|link| link.corridor.iter().copied())
            .collect();
        Self {
            regions,
            corridors,
            connections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.corridors.is_empty()
    }

    /// Region tiles plus corridor tiles (corridor tiles inside regions count twice)
    pub fn tile_count(&self) -> usize {
        self.regions.iter().map(Region::len).sum::<usize>() + self.corridors.len()
    }

    /// Whether a tile is floor: part of a region or a corridor
    pub fn contains_floor(&self, tile: &Tile) -> bool {
        self.regions.iter().any(|r| r.contains(tile)) || self.corridors.contains(tile)
    }

    /// Index of the region containing `tile`
    pub fn region_of(&self, tile: &Tile) -> Option<usize> {
        self.regions.iter().position(|r| r.contains(tile))
    }

    /// Groups of regions joined by corridors
    pub fn connectivity(&self) -> RegionGroups {
        RegionGroups::from_connections(self.regions.len(), &self.connections)
    }
}

/// Stateful generator holding the room pool between passes
#[derive(Debug, Clone)]
pub struct LayoutGenerator<R: IntegerSource> {
    config: LayoutConfig,
    rng: R,
    rooms: Vec<Vec<Tile>>,
}

impl<R: IntegerSource> LayoutGenerator<R> {
    pub fn new(config: LayoutConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            rooms: Vec::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration. The room pool is kept.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Room tile groups accumulated so far
    pub fn rooms(&self) -> &[Vec<Tile>] {
        &self.rooms
    }

    pub fn clear(&mut self) {
        self.rooms.clear();
    }

    /// Place `room_iterations` rooms, after clearing the pool if `auto_clear` is set
    pub fn generate(&mut self) -> &[Vec<Tile>] {
        if self.config.auto_clear {
            self.rooms.clear();
        }
        let new_rooms = generate_rooms(&self.config, &mut self.rng);
        self.rooms.extend(new_rooms);
        &self.rooms
    }

    /// Regions of the current pool
    pub fn extract_regions(&self) -> Vec<Region> {
        extract_regions_from_rooms(&self.rooms)
    }

    /// Boundary tiles of every region of the current pool
    pub fn detect_boundaries(&self) -> Vec<Vec<Tile>> {
        detect_boundaries(&self.extract_regions())
    }

    /// Corridors joining the regions of the current pool
    pub fn connect_regions(&self) -> Vec<Connection> {
        connect_with_links(&self.detect_boundaries(), self.config.connect_mode)
    }

    /// Full pipeline over the current pool without placing new rooms
    pub fn build_layout(&self) -> Layout {
        Layout::from_rooms(&self.rooms, &self.config)
    }

    /// Generate rooms, then run the full pipeline
    pub fn run_pass(&mut self) -> Layout {
        self.generate();
        let layout = self.build_layout();
        log::debug!(
            "pass done: {} rooms, {} regions, {} corridor tiles",
            self.rooms.len(),
            layout.regions.len(),
            layout.corridors.len()
        );
        layout
    }
}
