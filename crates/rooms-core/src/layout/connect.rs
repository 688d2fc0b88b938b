//! Region connection
//!
//! Greedy nearest-pair heuristic. Candidates are processed from the last to
//! the first; each one is joined to the closest boundary tile of any other
//! remaining candidate and then leaves the candidate list. The result is not
//! a minimum spanning tree.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::corridor::carve;
use super::tile::Tile;

/// How the candidate list shrinks after a region has been connected
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum ConnectMode {
    /// Drop the processed candidate and everything after it
    #[default]
    TruncateTail,
    /// Drop only the processed candidate
    RemoveProcessed,
}

/// One carved corridor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Index of the region being processed
    pub from_region: usize,
    /// Index of the region it was joined to
    pub to_region: usize,
    /// Boundary tile of `from_region` the corridor starts at
    pub from: Tile,
    /// Boundary tile of `to_region` the corridor ends at
    pub to: Tile,
    /// Tiles between the two endpoints
    pub corridor: Vec<Tile>,
}

impl Connection {
    /// Cardinal steps from `from` to `to`
    pub fn steps(&self) -> i64 {
        self.from.manhattan(self.to)
    }
}

/// Groups of regions joined by corridors.
///
/// Disjoint-set forest with union by rank. Rank bounds tree depth by
/// `log2(regions)`, so lookups walk to the root without compressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGroups {
    parent: Vec<usize>,
    rank: Vec<u8>,
    groups: usize,
}

impl RegionGroups {
    /// Every region in a group of its own
    pub fn new(region_count: usize) -> Self {
        Self {
            parent: (0..region_count).collect(),
            rank: vec![0; region_count],
            groups: region_count,
        }
    }

    /// Group `region_count` regions along `connections`
    pub fn from_connections(region_count: usize, connections: &[Connection]) -> Self {
        let mut groups = Self::new(region_count);
        for link in connections {
            groups.join(link.from_region, link.to_region);
        }
        groups
    }

    pub fn region_count(&self) -> usize {
        self.parent.len()
    }

    /// Representative region of the group holding `region`
    pub fn group_of(&self, region: usize) -> Option<usize> {
        let mut at = *self.parent.get(region)?;
        while self.parent[at] != at {
            at = self.parent[at];
        }
        Some(at)
    }

    /// Join the groups of `a` and `b`. Returns `false` if they were already
    /// one group or either index is out of range.
    pub fn join(&mut self, a: usize, b: usize) -> bool {
        let (Some(ra), Some(rb)) = (self.group_of(a), self.group_of(b)) else {
            return false;
        };
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.groups -= 1;
        true
    }

    pub fn same_group(&self, a: usize, b: usize) -> bool {
        matches!((self.group_of(a), self.group_of(b)), (Some(ra), Some(rb)) if ra == rb)
    }

    /// Number of groups
    pub fn count(&self) -> usize {
        self.groups
    }

    /// One group at most
    pub fn all_connected(&self) -> bool {
        self.groups <= 1
    }

    /// Region indices per group, ascending, groups ordered by their lowest region
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut slot = vec![usize::MAX; self.parent.len()];
        let mut members: Vec<Vec<usize>> = Vec::with_capacity(self.groups);
        for region in 0..self.parent.len() {
            let root = self.group_of(region).unwrap_or(region);
            if slot[root] == usize::MAX {
                slot[root] = members.len();
                members.push(Vec::new());
            }
            members[slot[root]].push(region);
        }
        members
    }
}

/// Connect regions given their boundary lists and return every carve.
///
/// Region indices in the result refer to positions in `boundaries`.
pub fn connect_with_links(boundaries: &[Vec<Tile>], mode: ConnectMode) -> Vec<Connection> {
    // (input region index, boundary tiles)
    let mut candidates: Vec<(usize, &[Tile])> = boundaries
        .iter()
        .enumerate()
        .map(|(i, b)| (i, b.as_slice()))
        .collect();
    let mut links = Vec::new();

    let mut a = candidates.len();
    while a > 0 {
        a -= 1;
        if a >= candidates.len() {
            continue;
        }

        let (_, current) = candidates[a];
        // (squared distance, candidate index, from, to)
        let mut closest: Option<(i64, usize, Tile, Tile)> = None;
        for (b, &(_, other)) in candidates.iter().enumerate() {
            if b == a {
                continue;
            }
            for &from in current {
                for &to in other {
                    let d = from.distance_squared(to);
                    if closest.is_none_or(|(best, ..)| d < best) {
                        closest = Some((d, b, from, to));
                    }
                }
            }
        }

        let Some((_, b, from, to)) = closest else {
            continue;
        };

        links.push(Connection {
            from_region: candidates[a].0,
            to_region: candidates[b].0,
            from,
            to,
            corridor: carve(from, to),
        });

        match mode {
            ConnectMode::TruncateTail => candidates.truncate(a),
            ConnectMode::RemoveProcessed => {
                candidates.remove(a);
            }
        }
    }

    log::debug!(
        "connected {} regions with {} corridors ({} mode)",
        boundaries.len(),
        links.len(),
        mode
    );
    links
}

/// Connect regions and return the corridor tiles in carve order
pub fn connect(boundaries: &[Vec<Tile>], mode: ConnectMode) -> Vec<Tile> {
    connect_with_links(boundaries, mode)
        .into_iter()
        .flat_map(|link| link.corridor)
        .collect()
}
