//! rooms-core: tile layouts from randomly placed rooms
//!
//! Places random rectangular rooms on a tile grid, merges overlapping or
//! touching rooms into 4-connected regions, finds each region's boundary
//! tiles and joins disjoint regions with L-shaped corridors.
//!
//! The crate has no drawing or UI code. A host reads a [`Layout`] and maps
//! tile coordinates to whatever surface it renders on.
//!
//! Supports `no_std` environments by disabling the default `std` feature.
//! Configuration file loading is gated behind `cfg(feature = "std")`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::borrow::ToOwned;
    pub use alloc::boxed::Box;
    pub use alloc::collections::VecDeque;
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod config;
pub mod layout;

mod consts;
mod rng;

pub use config::{ConfigError, GridBounds, LayoutConfig, SizeRange};
pub use consts::*;
pub use layout::{
    Connection, ConnectMode, Direction, Layout, LayoutGenerator, Region, RegionGroups, RoomRect,
    Tile, TileSet, boundary_of, carve, connect, connect_with_links, detect_boundaries,
    extract_regions, extract_regions_from_rooms, generate_room, generate_rooms, roll_room,
};
pub use rng::{IntegerSource, LayoutRng, RandSource};
