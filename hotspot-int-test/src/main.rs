use hotspot::{PlacementBuilder, PlacementResult};
use hotspot_int_test::test_util::random_points;
use hotspot_spatial::{BoundingBox, PlanarIndex, SphericalIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> PlacementResult<()> {
    println!("Starting placement stress run...");
    let mut rng = StdRng::seed_from_u64(2024);

    let count = 2_000;
    let bounds = BoundingBox::new(0.0, 0.0, 10_000.0, 10_000.0);
    let interest_points = random_points(&mut rng, count, &bounds);

    let start = std::time::Instant::now();
    let index = PlanarIndex::new(interest_points);
    println!("Indexed {} planar points in {:?}", count, start.elapsed());

    let placer = PlacementBuilder::new()
        .hotspot_point_count(4)
        .hotspot_point_radius(250.0)
        .bounds(bounds)
        .iteration_count(4)
        .parallel(true)
        .build()?;

    let start = std::time::Instant::now();
    let placement = placer.place(&index, &mut rng)?;
    println!(
        "Placed {} planar hotspots with loss {} in {:?}",
        placement.points.len(),
        placement.loss,
        start.elapsed()
    );

    let geographic = BoundingBox::new(-10.0, 35.0, 30.0, 60.0);
    let interest_points = random_points(&mut rng, count, &geographic);
    let index = SphericalIndex::new(interest_points);

    let placer = PlacementBuilder::new()
        .hotspot_point_count(4)
        .hotspot_point_radius(50_000.0)
        .bounds(geographic)
        .iteration_count(4)
        .parallel(true)
        .build()?;

    let start = std::time::Instant::now();
    let placement = placer.place(&index, &mut rng)?;
    println!(
        "Placed {} spherical hotspots with loss {} in {:?}",
        placement.points.len(),
        placement.loss,
        start.elapsed()
    );

    Ok(())
}
