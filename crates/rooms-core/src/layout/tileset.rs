//! Insertion-ordered tile set with O(1) membership and removal

#[cfg(not(feature = "std"))]
use crate::compat::*;

use hashbrown::HashMap;

use super::tile::Tile;

/// A set of unique tiles.
///
/// Tiles live in a `Vec` with a coordinate index next to it. Removal swaps the
/// last tile into the freed slot, so iteration order depends only on the
/// sequence of inserts and removals, never on hashing.
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    tiles: Vec<Tile>,
    index: HashMap<Tile, usize>,
}

impl TileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add a tile. Returns false if a tile with the same coordinates is present.
    pub fn insert(&mut self, tile: Tile) -> bool {
        if self.index.contains_key(&tile) {
            return false;
        }
        self.index.insert(tile, self.tiles.len());
        self.tiles.push(tile);
        true
    }

    pub fn contains(&self, tile: &Tile) -> bool {
        self.index.contains_key(tile)
    }

    /// Remove a tile. Returns false if it was not present.
    pub fn remove(&mut self, tile: &Tile) -> bool {
        let Some(pos) = self.index.remove(tile) else {
            return false;
        };
        self.tiles.swap_remove(pos);
        if let Some(moved) = self.tiles.get(pos) {
            self.index.insert(*moved, pos);
        }
        true
    }

    /// Remove and return the most recently placed tile
    pub fn pop(&mut self) -> Option<Tile> {
        let tile = self.tiles.pop()?;
        self.index.remove(&tile);
        Some(tile)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    /// Cardinal neighbours of `tile` that are in the set, in `Direction::ALL` order
    pub fn neighbours_of(&self, tile: Tile) -> impl Iterator<Item = Tile> + '_ {
        tile.neighbours().filter(move |n| self.contains(n))
    }

    /// How many of the four cardinal neighbours of `tile` are in the set
    pub fn neighbour_count(&self, tile: Tile) -> usize {
        self.neighbours_of(tile).count()
    }
}

impl PartialEq for TileSet {
    /// Set equality, regardless of order
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for TileSet {}

impl FromIterator<Tile> for TileSet {
    /// Collects tiles, keeping the first occurrence of each coordinate
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut set = TileSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Tile> for TileSet {
    fn extend<I: IntoIterator<Item = Tile>>(&mut self, iter: I) {
        for tile in iter {
            self.insert(tile);
        }
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = core::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl IntoIterator for TileSet {
    type Item = Tile;
    type IntoIter = <Vec<Tile> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(x: i32, y: i32) -> Tile {
        Tile::new(x, y)
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut set = TileSet::new();
        assert!(set.insert(t(1, 1)));
        assert!(!set.insert(t(1, 1)));
        assert!(set.insert(t(1, 2)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_iter_keeps_first_occurrence_order() {
        let set: TileSet = [t(3, 3), t(0, 0), t(3, 3), t(1, 0), t(0, 0)]
            .into_iter()
            .collect();
        assert_eq!(set.as_slice(), &[t(3, 3), t(0, 0), t(1, 0)]);
    }

    #[test]
    fn test_remove_keeps_index_consistent() {
        let mut set: TileSet = (0..5).map(|x| t(x, 0)).collect();
        assert!(set.remove(&t(1, 0)));
        assert!(!set.remove(&t(1, 0)));
        // Last tile moved into the freed slot
        assert_eq!(set.as_slice(), &[t(0, 0), t(4, 0), t(2, 0), t(3, 0)]);

        for tile in [t(0, 0), t(4, 0), t(2, 0), t(3, 0)] {
            assert!(set.contains(&tile));
            assert!(set.remove(&tile));
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_pop() {
        let mut set: TileSet = [t(0, 0), t(5, 5)].into_iter().collect();
        assert_eq!(set.pop(), Some(t(5, 5)));
        assert!(!set.contains(&t(5, 5)));
        assert_eq!(set.pop(), Some(t(0, 0)));
        assert_eq!(set.pop(), None);
    }

    #[test]
    fn test_neighbours_of() {
        // Plus shape without the right arm
        let set: TileSet = [t(1, 1), t(1, 0), t(1, 2), t(0, 1)].into_iter().collect();
        let n: Vec<Tile> = set.neighbours_of(t(1, 1)).collect();
        assert_eq!(n, vec![t(1, 0), t(1, 2), t(0, 1)]);
        assert_eq!(set.neighbour_count(t(1, 1)), 3);
        assert_eq!(set.neighbour_count(t(1, 0)), 1);
        // Works for tiles outside the set too
        assert_eq!(set.neighbour_count(t(2, 1)), 1);
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a: TileSet = [t(0, 0), t(1, 0)].into_iter().collect();
        let b: TileSet = [t(1, 0), t(0, 0)].into_iter().collect();
        let c: TileSet = [t(1, 0)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
