use proptest::prelude::*;

use rooms_core::{
    ConnectMode, GridBounds, LayoutConfig, LayoutGenerator, LayoutRng, Region, RoomRect,
    SizeRange, Tile, TileSet, boundary_of, carve, connect, detect_boundaries, extract_regions,
    extract_regions_from_rooms,
};

fn config(iterations: u32) -> LayoutConfig {
    LayoutConfig {
        room_width: SizeRange::new(2, 6),
        room_height: SizeRange::new(2, 5),
        room_iterations: iterations,
        grid: GridBounds::new(40, 30),
        ..LayoutConfig::default()
    }
}

fn tile_strategy() -> impl Strategy<Value = Tile> {
    (-12i32..12, -12i32..12).prop_map(|(x, y)| Tile::new(x, y))
}

fn pool_strategy() -> impl Strategy<Value = Vec<Tile>> {
    prop::collection::vec(tile_strategy(), 0..150)
}

#[test]
fn test_same_seed_same_layout() {
    let mut a = LayoutGenerator::new(config(20), LayoutRng::new(2024));
    let mut b = LayoutGenerator::new(config(20), LayoutRng::new(2024));

    for _ in 0..3 {
        let la = a.run_pass();
        let lb = b.run_pass();
        assert_eq!(la.regions.len(), lb.regions.len());
        for (ra, rb) in la.regions.iter().zip(&lb.regions) {
            assert_eq!(ra.tiles().as_slice(), rb.tiles().as_slice());
        }
        assert_eq!(la.corridors, lb.corridors);
        assert_eq!(la.connections, lb.connections);
    }
}

#[test]
fn test_overlapping_rooms_form_one_region() {
    let rooms: Vec<Vec<Tile>> = vec![
        RoomRect::new(0, 0, 4, 4).tiles().collect(),
        RoomRect::new(3, 3, 4, 4).tiles().collect(),
    ];
    let regions = extract_regions_from_rooms(&rooms);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].len(), 31);
}

#[test]
fn test_corridor_shape_example() {
    let corridor = carve(Tile::new(0, 0), Tile::new(3, 2));
    assert_eq!(
        corridor,
        vec![
            Tile::new(0, 1),
            Tile::new(0, 2),
            Tile::new(1, 2),
            Tile::new(2, 2)
        ]
    );
}

#[test]
fn test_two_far_regions_get_one_corridor() {
    let pool: TileSet = [Tile::new(0, 0), Tile::new(5, 5)].into_iter().collect();
    let regions = extract_regions(&pool);
    assert_eq!(regions.len(), 2);

    let boundaries = detect_boundaries(&regions);
    let corridor = connect(&boundaries, ConnectMode::TruncateTail);
    assert_eq!(corridor.len(), 9);
    // The path from one region to the other runs through the corridor
    let ends = [Tile::new(0, 0), Tile::new(5, 5)];
    assert!(ends.iter().any(|e| e.is_adjacent(corridor[0])));
    assert!(ends.iter().any(|e| e.is_adjacent(corridor[8])));
    assert!(!corridor.contains(&ends[0]) && !corridor.contains(&ends[1]));
}

#[test]
fn test_single_region_needs_no_corridor() {
    let mut generator = LayoutGenerator::new(
        LayoutConfig {
            room_iterations: 1,
            ..LayoutConfig::default()
        },
        LayoutRng::new(5),
    );
    let layout = generator.run_pass();
    assert_eq!(layout.regions.len(), 1);
    assert!(layout.corridors.is_empty());
    assert!(layout.connectivity().all_connected());
}

#[test]
fn test_default_config_pass() {
    let mut generator = LayoutGenerator::new(LayoutConfig::default(), LayoutRng::new(77));
    let layout = generator.run_pass();
    assert!(!layout.regions.is_empty());
    assert!(layout.connectivity().all_connected());
    assert_eq!(generator.rooms().len(), 25);
}

proptest! {
    #[test]
    fn prop_regions_partition_the_pool(raw in pool_strategy()) {
        let pool: TileSet = raw.iter().copied().collect();
        let regions = extract_regions(&pool);

        let total: usize = regions.iter().map(Region::len).sum();
        prop_assert_eq!(total, pool.len());

        let mut union = TileSet::new();
        for region in &regions {
            prop_assert!(!region.is_empty());
            for tile in region {
                // A tile in two regions would fail the second insert
                prop_assert!(union.insert(*tile));
            }
        }
        prop_assert_eq!(union, pool);
    }

    #[test]
    fn prop_regions_are_connected_and_maximal(raw in pool_strategy()) {
        let pool: TileSet = raw.into_iter().collect();
        let regions = extract_regions(&pool);
        for (i, region) in regions.iter().enumerate() {
            prop_assert!(region.is_connected());
            // No cardinal neighbour of a region tile lives in another region
            for tile in region {
                for n in tile.neighbours() {
                    if pool.contains(&n) {
                        prop_assert!(region.contains(&n));
                    }
                }
            }
            for other in regions.iter().skip(i + 1) {
                prop_assert!(other.iter().all(|t| !region.contains(t)));
            }
        }
    }

    #[test]
    fn prop_boundary_tiles_lack_a_neighbour(raw in pool_strategy()) {
        let pool: TileSet = raw.into_iter().collect();
        for region in extract_regions(&pool) {
            let boundary = boundary_of(&region);
            for tile in &region {
                let inside = tile.neighbours().filter(|n| region.contains(n)).count();
                prop_assert_eq!(boundary.contains(tile), inside < 4);
            }
            prop_assert!(!boundary.is_empty());
        }
    }

    #[test]
    fn prop_carve_is_monotonic_l_shape(from in tile_strategy(), to in tile_strategy()) {
        let corridor = carve(from, to);
        let steps = from.manhattan(to) as usize;
        prop_assert_eq!(corridor.len(), steps.saturating_sub(1));
        prop_assert!(!corridor.contains(&to));
        prop_assert!(!corridor.contains(&from));

        let mut path = vec![from];
        path.extend(corridor.iter().copied());
        if from != to {
            path.push(to);
        }
        for pair in path.windows(2) {
            prop_assert!(pair[0].is_adjacent(pair[1]));
        }
        // Vertical leg first: x stays at from.x until y reaches to.y
        for tile in &corridor {
            if tile.y != to.y {
                prop_assert_eq!(tile.x, from.x);
            }
        }
    }

    #[test]
    fn prop_seeded_passes_are_deterministic(seed in any::<u64>(), iterations in 0u32..30) {
        let mut a = LayoutGenerator::new(config(iterations), LayoutRng::new(seed));
        let mut b = LayoutGenerator::new(config(iterations), LayoutRng::new(seed));
        let la = a.run_pass();
        let lb = b.run_pass();
        prop_assert_eq!(la.corridors, lb.corridors);
        prop_assert_eq!(la.regions, lb.regions);
    }

    #[test]
    fn prop_connection_modes_link_every_region(seed in any::<u64>(), iterations in 1u32..25) {
        for mode in [ConnectMode::TruncateTail, ConnectMode::RemoveProcessed] {
            let cfg = LayoutConfig { connect_mode: mode, ..config(iterations) };
            let mut generator = LayoutGenerator::new(cfg, LayoutRng::new(seed));
            let layout = generator.run_pass();
            prop_assert_eq!(layout.connections.len(), layout.regions.len() - 1);
            prop_assert!(layout.connectivity().all_connected());
        }
    }
}
