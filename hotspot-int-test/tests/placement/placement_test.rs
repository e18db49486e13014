use hotspot::{place_hotspot_points, PlacementBuilder, PlacementError, PlacementParameters};
use hotspot_int_test::test_util::{random_points, square_corners};
use hotspot_spatial::{BoundingBox, Coordinate, PlanarIndex, SphericalIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn square_bounds() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 10.0, 10.0)
}

#[test]
fn test_single_hotspot_converges_to_centroid() {
    let index = PlanarIndex::new(square_corners(10.0));
    let parameters = PlacementParameters::new(1, 1.0, square_bounds(), 5);

    let mut rng = StdRng::seed_from_u64(3);
    let placement = place_hotspot_points(&index, &parameters, &mut rng).unwrap();

    assert_eq!(placement.points.len(), 1);
    let hotspot = placement.points[0];
    assert!(hotspot.distance(&Coordinate::new(5.0, 5.0)) < 0.05, "got {}", hotspot);
    assert!((placement.loss - 5.0 * 50f64.sqrt()).abs() < 0.05, "got {}", placement.loss);
}

#[test]
fn test_two_hotspots_separate_inside_radius() {
    let index = PlanarIndex::new(square_corners(10.0));
    let parameters = PlacementParameters::new(2, 15.0, square_bounds(), 5);

    let mut rng = StdRng::seed_from_u64(5);
    let placement = place_hotspot_points(&index, &parameters, &mut rng).unwrap();

    let center = Coordinate::new(5.0, 5.0);
    let (first, second) = (placement.points[0], placement.points[1]);
    assert!(first.distance(&second) > 4.0, "hotspots at {} and {}", first, second);

    // Opposite sides of the square's center
    let dot = (first.x - center.x) * (second.x - center.x)
        + (first.y - center.y) * (second.y - center.y);
    assert!(dot < 0.0, "hotspots at {} and {}", first, second);

    // Both stacked on the center would score 2 * 5 * sqrt(50)
    assert!(placement.loss < 10.0 * 50f64.sqrt() - 1.0);
}

#[test]
fn test_output_is_finite_and_sized() {
    let mut rng = StdRng::seed_from_u64(17);
    let bounds = BoundingBox::new(-20.0, -20.0, 20.0, 20.0);
    let index = PlanarIndex::new(random_points(&mut rng, 60, &bounds));

    for count in [1, 3, 5] {
        let placement = PlacementBuilder::new()
            .hotspot_point_count(count)
            .hotspot_point_radius(2.0)
            .bounds(bounds)
            .iteration_count(2)
            .build()
            .unwrap()
            .place(&index, &mut rng)
            .unwrap();

        assert_eq!(placement.points.len(), count);
        assert!(placement.points.iter().all(|p| p.is_finite()));
        assert!(placement.loss.is_finite());
    }
}

#[test]
fn test_same_seed_same_placement() {
    let index = PlanarIndex::new(square_corners(10.0));
    let placer = PlacementBuilder::new()
        .hotspot_point_count(2)
        .hotspot_point_radius(3.0)
        .bounds_from(&square_corners(10.0))
        .iteration_count(3)
        .build()
        .unwrap();

    let first = placer.place(&index, &mut StdRng::seed_from_u64(9)).unwrap();
    let second = placer.place(&index, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_matches_sequential() {
    let index = PlanarIndex::new(square_corners(10.0));
    let builder = || {
        PlacementBuilder::new()
            .hotspot_point_count(2)
            .hotspot_point_radius(15.0)
            .bounds(square_bounds())
            .iteration_count(4)
    };

    let sequential = builder()
        .build()
        .unwrap()
        .place(&index, &mut StdRng::seed_from_u64(21))
        .unwrap();
    let parallel = builder()
        .parallel(true)
        .build()
        .unwrap()
        .place(&index, &mut StdRng::seed_from_u64(21))
        .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_spherical_placement_stays_near_cluster() {
    let interest_points = vec![
        Coordinate::new(13.30, 52.50),
        Coordinate::new(13.50, 52.50),
        Coordinate::new(13.30, 52.60),
        Coordinate::new(13.50, 52.60),
    ];
    let index = SphericalIndex::new(interest_points.clone());

    let placement = PlacementBuilder::new()
        .hotspot_point_count(1)
        .hotspot_point_radius(100.0)
        .bounds_from(&interest_points)
        .iteration_count(3)
        .build()
        .unwrap()
        .place(&index, &mut StdRng::seed_from_u64(4))
        .unwrap();

    let hotspot = placement.points[0];
    assert!((hotspot.x - 13.40).abs() < 0.03, "got {}", hotspot);
    assert!((hotspot.y - 52.55).abs() < 0.03, "got {}", hotspot);
}

#[test]
fn test_builder_rejects_bad_parameters() {
    let cases = [
        PlacementBuilder::new().hotspot_point_count(0).bounds(square_bounds()),
        PlacementBuilder::new().hotspot_point_radius(0.0).bounds(square_bounds()),
        PlacementBuilder::new().hotspot_point_radius(-2.0).bounds(square_bounds()),
        PlacementBuilder::new().iteration_count(0).bounds(square_bounds()),
        PlacementBuilder::new().bounds_from(&[]),
        PlacementBuilder::new(),
    ];

    for builder in cases {
        assert!(matches!(builder.build(), Err(PlacementError::InvalidParameter(_))));
    }
}

#[test]
fn test_empty_interest_points_fail_every_restart() {
    let index = PlanarIndex::new(Vec::new());
    let parameters = PlacementParameters::new(1, 1.0, square_bounds(), 3);

    match place_hotspot_points(&index, &parameters, &mut StdRng::seed_from_u64(1)) {
        Err(PlacementError::PlacementFailed { attempts, source }) => {
            assert_eq!(attempts, 3);
            assert!(matches!(*source, PlacementError::EmptyDistanceSet { .. }));
        }
        other => panic!("expected PlacementFailed, got {:?}", other),
    }
}
