use hotspot::{flatten, HotspotLoss, PlacementError};
use hotspot_int_test::test_util::{brute_force_loss, random_points, square_corners};
use hotspot_spatial::{
    great_circle_distance, BoundingBox, Coordinate, PlanarIndex, SpatialQuery, SphericalIndex,
    EARTH_RADIUS_METERS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_loss_matches_brute_force_on_random_points() {
    let mut rng = StdRng::seed_from_u64(11);
    let bounds = BoundingBox::new(-50.0, -50.0, 50.0, 50.0);
    let interest_points = random_points(&mut rng, 200, &bounds);
    let index = PlanarIndex::new(interest_points.clone());

    for radius in [0.5, 5.0, 40.0] {
        let loss = HotspotLoss::new(&index, radius);
        for _ in 0..10 {
            let hotspot_points = random_points(&mut rng, 3, &bounds);
            let expected = brute_force_loss(&interest_points, &hotspot_points, radius);
            let actual = loss.compute(&flatten(&hotspot_points)).unwrap();
            assert!(
                (actual - expected).abs() < 1e-6 * expected.abs().max(1.0),
                "radius {}: expected {}, got {}",
                radius,
                expected,
                actual
            );
        }
    }
}

#[test]
fn test_centroid_loss_without_penalty() {
    let index = PlanarIndex::new(square_corners(10.0));
    let loss = HotspotLoss::new(&index, 1.0);

    let value = loss.compute(&[5.0, 5.0]).unwrap();
    assert!((value - 5.0 * 50f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_penalty_needs_another_hotspot() {
    // A lone hotspot only subtracts its zero self-distance
    let index = PlanarIndex::new(square_corners(10.0));
    let with_penalty = HotspotLoss::new(&index, 100.0).compute(&[2.0, 3.0]).unwrap();
    let without_penalty = HotspotLoss::new(&index, 0.1).compute(&[2.0, 3.0]).unwrap();
    assert!((with_penalty - without_penalty).abs() < 1e-12);
}

#[test]
fn test_penalty_rewards_separation() {
    let index = PlanarIndex::new(square_corners(10.0));
    let loss = HotspotLoss::new(&index, 15.0);

    let together = loss.compute(&[5.0, 5.0, 5.0, 5.0]).unwrap();
    let apart = loss.compute(&[3.0, 5.0, 7.0, 5.0]).unwrap();
    assert!(apart < together);
}

#[test]
fn test_unreachable_interest_points_are_ignored() {
    let interest_points = vec![
        Coordinate::new(0.0, 0.0),
        Coordinate::new(1.0, 0.0),
        Coordinate::new(100.0, 0.0),
    ];
    let index = PlanarIndex::new(interest_points).with_max_distance(10.0).unwrap();
    let loss = HotspotLoss::new(&index, 0.1);

    // Only the two nearby points count: sum 1.0 + max 1.0
    let value = loss.compute(&[0.0, 0.0]).unwrap();
    assert!((value - 2.0).abs() < 1e-12);
}

#[test]
fn test_all_unreachable_is_an_error() {
    let index = PlanarIndex::new(square_corners(10.0)).with_max_distance(1.0).unwrap();
    let loss = HotspotLoss::new(&index, 1.0);

    match loss.compute(&[0.0, 0.0, 5.0, 5.0]) {
        Err(PlacementError::EmptyDistanceSet { hotspot_index }) => assert_eq!(hotspot_index, 1),
        other => panic!("expected EmptyDistanceSet, got {:?}", other),
    }
}

#[test]
fn test_empty_interest_points() {
    let index = PlanarIndex::new(Vec::new());
    let loss = HotspotLoss::new(&index, 1.0);

    assert!(matches!(
        loss.compute(&[0.0, 0.0]),
        Err(PlacementError::EmptyDistanceSet { hotspot_index: 0 })
    ));
}

#[test]
fn test_spherical_loss_in_metres() {
    let interest_points = vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
    let index = SphericalIndex::new(interest_points.clone());
    let hotspot_point = Coordinate::new(0.0, 0.5);

    let half = great_circle_distance(&hotspot_point, &interest_points[0], EARTH_RADIUS_METERS);
    let loss = HotspotLoss::new(&index, 1.0).compute(&flatten(&[hotspot_point])).unwrap();

    // Two equal distances plus the max
    assert!((loss - 3.0 * half).abs() < 1e-3);
    assert!((index.distance(&hotspot_point, &interest_points[1]) - half).abs() < 1e-3);
}
