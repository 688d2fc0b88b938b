//! Layout system
//!
//! Tiles, room generation, region extraction, boundary detection and
//! corridor connection. Data flows strictly forward:
//! rooms -> regions -> boundaries -> corridors.

mod boundary;
mod connect;
mod corridor;
mod generator;
mod region;
mod room;
mod tile;
mod tileset;

pub use boundary::{boundary_of, detect_boundaries};
pub use connect::{ConnectMode, Connection, RegionGroups, connect, connect_with_links};
pub use corridor::carve;
pub use generator::{Layout, LayoutGenerator};
pub use region::{Region, extract_regions, extract_regions_from_rooms};
pub use room::{RoomRect, generate_room, generate_rooms, roll_room};
pub use tile::{Direction, Tile};
pub use tileset::TileSet;
