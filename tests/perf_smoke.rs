use powder_engine::{mat_sand, mat_water, World};

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64).expect("world");
    world.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            let material = if x % 2 == 0 { mat_sand() } else { mat_water() };
            world.set_cell(x, y, material);
        }
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert!(stats.parallel_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 128 * 32);
}
