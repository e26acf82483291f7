use super::*;
use crate::domain::{Cell, BG_COLOR};

fn world(width: u32, height: u32, workers: usize) -> WorldCore {
    let config = SimConfig::new(width, height)
        .with_worker_threads(workers)
        .with_cell_size(1)
        .with_seed(12345);
    WorldCore::new(config).expect("valid config")
}

fn materials(world: &WorldCore) -> Vec<Material> {
    let grid = world.grid();
    let mut out = Vec::with_capacity(grid.size());
    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            out.push(grid.material(x, y).expect("in bounds"));
        }
    }
    out
}

fn counts(world: &WorldCore) -> Vec<usize> {
    Material::ALL.iter().map(|&m| world.count_material(m)).collect()
}

#[test]
fn sand_falls_one_row_per_tick_and_rests_on_the_floor() {
    let mut world = world(3, 10, 1);
    assert!(world.set_cell(1, 0, Material::Sand));

    for tick in 1..=9 {
        world.step();
        assert_eq!(world.grid().material(1, tick), Some(Material::Sand));
        assert_eq!(world.particle_count(), 1);
    }

    world.step();
    assert_eq!(world.grid().material(1, 9), Some(Material::Sand));
    assert_eq!(world.tick(), 10);
}

#[test]
fn single_tick_in_3x3_moves_sand_straight_down() {
    let mut world = world(3, 3, 1);
    world.set_cell(1, 0, Material::Sand);
    world.step();
    assert_eq!(world.grid().material(1, 0), Some(Material::Air));
    assert_eq!(world.grid().material(1, 1), Some(Material::Sand));
}

#[test]
fn sand_crosses_band_boundary_through_the_seam_pass() {
    // Bands [0,2) and [2,4). The only way out for the sand is down-right,
    // into the other band.
    let mut world = world(4, 4, 2);
    world.set_cell(1, 0, Material::Sand);
    world.set_cell(1, 1, Material::Stone);
    world.set_cell(0, 1, Material::Stone);

    world.enable_perf_metrics(true);
    world.step();

    assert_eq!(world.grid().material(1, 0), Some(Material::Air));
    assert_eq!(world.grid().material(2, 1), Some(Material::Sand));
    assert_eq!(world.get_perf_stats().seam_moves(), 1);

    world.step();
    assert_eq!(world.grid().material(2, 2), Some(Material::Sand));
}

#[test]
fn no_particle_moves_twice_in_one_tick_across_a_seam() {
    let mut world = world(4, 6, 2);
    world.set_cell(2, 0, Material::Sand);
    world.step();
    // Band 1 moved it to (2,1); the seam pass must not move it again.
    assert_eq!(world.grid().material(2, 1), Some(Material::Sand));
    assert_eq!(world.particle_count(), 1);
}

#[test]
fn movement_conserves_every_material_count() {
    let mut world = world(64, 48, 4);
    world.place(Material::Stone, 32, 40, 6);
    world.place(Material::Mud, 10, 30, 2);
    world.place(Material::Sand, 20, 5, 2);
    world.place(Material::Sand, 31, 8, 2);
    world.place(Material::Sand, 47, 2, 2);
    world.place(Material::Water, 16, 12, 2);
    world.place(Material::Water, 48, 15, 2);
    world.place(Material::Water, 33, 20, 2);

    let before = counts(&world);
    for _ in 0..80 {
        world.step();
        assert_eq!(counts(&world), before);
    }
}

#[test]
fn water_in_edge_columns_stays_on_grid() {
    let mut world = world(6, 3, 2);
    for x in 0..6 {
        world.set_cell(x, 2, Material::Stone);
    }
    for y in 0..2 {
        world.set_cell(0, y, Material::Water);
        world.set_cell(5, y, Material::Water);
    }

    for _ in 0..50 {
        world.step();
        assert_eq!(world.count_material(Material::Water), 4);
        assert_eq!(world.count_material(Material::Stone), 6);
    }
}

#[test]
fn poison_removes_itself_and_the_cell_below() {
    let mut world = world(3, 3, 1);
    world.set_cell(1, 0, Material::Poison);
    world.set_cell(1, 1, Material::Stone);
    world.set_cell(0, 2, Material::Stone);

    world.step();

    assert_eq!(world.count_material(Material::Poison), 0);
    assert_eq!(world.count_material(Material::Stone), 1);
    assert_eq!(world.grid().material(1, 1), Some(Material::Air));
}

#[test]
fn poison_falls_through_air_before_consuming() {
    let mut world = world(1, 4, 1);
    world.set_cell(0, 0, Material::Poison);
    world.set_cell(0, 3, Material::Water);

    world.step();
    assert_eq!(world.grid().material(0, 1), Some(Material::Poison));
    world.step();
    assert_eq!(world.grid().material(0, 2), Some(Material::Poison));
    world.step();
    assert_eq!(world.particle_count(), 0);
}

#[test]
fn same_seed_and_inputs_give_identical_worlds() {
    let build = || {
        let mut w = world(48, 32, 3);
        w.place(Material::Sand, 10, 4, 8);
        w.place(Material::Water, 30, 6, 8);
        w.place(Material::Stone, 24, 28, 3);
        w
    };
    let mut a = build();
    let mut b = build();
    assert_eq!(materials(&a), materials(&b));

    for _ in 0..40 {
        a.step();
        b.step();
    }
    assert_eq!(materials(&a), materials(&b));
}

#[test]
fn paused_world_does_not_advance() {
    let mut world = world(3, 5, 1);
    world.set_cell(1, 0, Material::Sand);
    world.set_paused(true);
    assert!(world.is_paused());

    world.step();
    assert_eq!(world.tick(), 0);
    assert_eq!(world.grid().material(1, 0), Some(Material::Sand));

    world.set_paused(false);
    world.step();
    assert_eq!(world.grid().material(1, 1), Some(Material::Sand));
}

#[test]
fn clear_empties_grid_and_resets_tick() {
    let mut world = world(8, 8, 2);
    world.place(Material::Stone, 4, 4, 3);
    world.step();
    world.clear();
    assert_eq!(world.particle_count(), 0);
    assert_eq!(world.tick(), 0);
}

#[test]
fn small_brush_is_solid_and_clipped_to_grid() {
    let mut world = world(20, 20, 1);
    // r = 2 disc has 13 cells.
    assert_eq!(world.place(Material::Sand, 10, 10, 2), 13);
    assert_eq!(world.count_material(Material::Sand), 13);

    world.clear();
    // Only the quarter disc inside the grid is written.
    assert_eq!(world.place(Material::Water, 0, 0, 2), 6);
    assert_eq!(world.place(Material::Stone, -100, -100, 3), 0);
}

#[test]
fn large_brush_scatters_granular_but_not_stone() {
    let mut world = world(64, 64, 1);
    let disc = world.place(Material::Stone, 32, 32, 10);
    assert_eq!(disc as usize, world.count_material(Material::Stone));

    world.clear();
    let sand = world.place(Material::Sand, 32, 32, 10);
    assert!(sand < disc / 4, "sand brush wrote {sand} of {disc}");
}

#[test]
fn air_brush_erases() {
    let mut world = world(10, 10, 1);
    world.place(Material::Stone, 5, 5, 4);
    world.place(Material::Air, 5, 5, 4);
    assert_eq!(world.particle_count(), 0);
}

#[test]
fn huge_radius_is_clipped_not_overflowed() {
    let mut world = world(4, 4, 1);
    assert_eq!(world.place(Material::Stone, 2, 2, i32::MAX), 16);
}

#[test]
fn extract_pixels_scales_cells_and_fills_background() {
    let config = SimConfig::new(2, 1).with_worker_threads(1).with_cell_size(2);
    let mut world = WorldCore::new(config).expect("valid config");
    world.set_cell(0, 0, Material::Sand);

    assert_eq!(world.pixel_width(), 4);
    assert_eq!(world.pixel_height(), 2);

    let sand = Cell::new(Material::Sand).color;
    let pixels = world.extract_pixels().to_vec();
    assert_eq!(pixels.len(), 8);
    assert_eq!(&pixels[0..4], &[sand, sand, BG_COLOR, BG_COLOR]);
    assert_eq!(&pixels[4..8], &[sand, sand, BG_COLOR, BG_COLOR]);
}

#[test]
fn perf_stats_fill_only_when_enabled() {
    let mut world = world(16, 8, 2);
    world.place(Material::Sand, 8, 1, 1);

    world.step();
    assert_eq!(world.get_perf_stats().bands(), 0);

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.tick(), 1);
    assert_eq!(stats.bands(), 2);
    assert_eq!(stats.seam_columns(), 2);
    assert_eq!(stats.particle_count(), 5);
    assert!(stats.cells_moved() > 0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats().bands(), 0);
}

#[test]
fn band_boundaries_follow_worker_count() {
    let world = world(10, 4, 3);
    assert_eq!(world.band_count(), 3);
    assert_eq!(world.band_boundaries(), vec![3, 6]);

    let single = self::world(10, 4, 1);
    assert!(single.band_boundaries().is_empty());
}

#[test]
fn more_workers_than_columns_still_steps() {
    let mut world = world(3, 4, 8);
    world.set_cell(2, 0, Material::Sand);
    world.step();
    assert_eq!(world.grid().material(2, 1), Some(Material::Sand));
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        WorldCore::with_dimensions(0, 10),
        Err(EngineError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        WorldCore::new(SimConfig::new(4, 4).with_worker_threads(0)),
        Err(EngineError::NoWorkers)
    ));
    assert!(matches!(
        WorldCore::new(SimConfig::new(4, 4).with_cell_size(0)),
        Err(EngineError::InvalidCellSize)
    ));
    assert!(matches!(
        WorldCore::from_config_json("{ not json"),
        Err(EngineError::ConfigParse(_))
    ));
}

#[test]
fn config_json_drives_world_shape() {
    let world = WorldCore::from_config_json(r#"{"width": 12, "height": 7, "cellSize": 3, "workerThreads": 2}"#)
        .expect("valid json");
    assert_eq!((world.width(), world.height()), (12, 7));
    assert_eq!(world.pixel_width(), 36);
    assert_eq!(world.band_count(), 2);
}
