use hotspot::{
    find_good_values, CandidateSampler, HotspotLoss, LocalMinimizer, Minimum, MinimizerConfig,
    NelderMeadMinimizer, Objective, PlacementResult,
};
use hotspot_int_test::test_util::square_corners;
use hotspot_spatial::{BoundingBox, PlanarIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Reports the starting vector as the minimum.
struct StartOnly;

impl LocalMinimizer for StartOnly {
    fn minimize(&self, objective: &Objective<'_>, start: Vec<f64>) -> PlacementResult<Minimum> {
        let loss = objective(start.as_slice())?;
        Ok(Minimum {
            values: start,
            loss,
            iterations: 0,
        })
    }
}

fn best_over_restarts(iteration_count: usize) -> f64 {
    let index = PlanarIndex::new(square_corners(10.0));
    let loss = HotspotLoss::new(&index, 1.0);
    let objective = |values: &[f64]| loss.compute(values);
    let sampler = CandidateSampler::new(&BoundingBox::new(0.0, 0.0, 10.0, 10.0), 2);
    let mut rng = StdRng::seed_from_u64(8);

    find_good_values(&objective, || sampler.sample(&mut rng), iteration_count, &StartOnly)
        .unwrap()
        .loss
}

#[test]
fn test_more_restarts_never_worse() {
    // Draws are a prefix of each other for the same seed
    let mut previous = f64::INFINITY;
    for iteration_count in 1..=8 {
        let best = best_over_restarts(iteration_count);
        assert!(best <= previous, "{} restarts gave {} after {}", iteration_count, best, previous);
        previous = best;
    }
}

#[test]
fn test_nelder_mead_improves_on_start() {
    let index = PlanarIndex::new(square_corners(10.0));
    let loss = HotspotLoss::new(&index, 1.0);
    let objective = |values: &[f64]| loss.compute(values);
    let minimizer = NelderMeadMinimizer::new(MinimizerConfig::default());

    let start = vec![1.0, 9.0];
    let start_loss = objective(start.as_slice()).unwrap();
    let minimum = minimizer.minimize(&objective, start).unwrap();

    assert!(minimum.loss < start_loss);
    assert!((minimum.loss - objective(minimum.values.as_slice()).unwrap()).abs() < 1e-9);
}
