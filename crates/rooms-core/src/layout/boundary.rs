//! Boundary detection
//!
//! A boundary tile has fewer than four cardinal neighbours in its own region.
//! Tiles of other regions never count as neighbours.

#[cfg(not(feature = "std"))]
use crate::compat::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::consts::CARDINAL_NEIGHBOURS;

use super::region::Region;
use super::tile::Tile;

/// Boundary tiles of one region, in the region's tile order
pub fn boundary_of(region: &Region) -> Vec<Tile> {
    region
        .iter()
        .copied()
        .filter(|&tile| region.tiles().neighbour_count(tile) < CARDINAL_NEIGHBOURS)
        .collect()
}

/// One boundary list per region, in input order
pub fn detect_boundaries(regions: &[Region]) -> Vec<Vec<Tile>> {
    #[cfg(feature = "parallel")]
    let boundaries: Vec<Vec<Tile>> = regions.par_iter().map(boundary_of).collect();
    #[cfg(not(feature = "parallel"))]
    let boundaries: Vec<Vec<Tile>> = regions.iter().map(boundary_of).collect();

    log::debug!(
        "detected {} boundary tiles across {} regions",
        boundaries.iter().map(Vec::len).sum::<usize>(),
        boundaries.len()
    );
    boundaries
}
