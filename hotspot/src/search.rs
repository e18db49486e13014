//! Multi-start local search.
//!
//! A single local descent on the hotspot loss can settle in a poor basin
//! because of the radius branch. Running several independent descents from
//! random starts and keeping the best one lowers that risk at linear cost.
//!
//! All starting vectors are drawn before any trial runs. Trials are then
//! independent, so they may run on a thread pool, and the winner is chosen
//! in draw order with a strict `<`. For a given sequence of draws the
//! sequential and parallel drivers return the same result.

use rayon::prelude::*;

use crate::errors::{PlacementError, PlacementResult};
use crate::minimizer::{LocalMinimizer, Minimum, Objective};

/// Runs `iteration_count` local minimizations from vectors produced by
/// `make_values` and returns the one with the lowest loss.
///
/// # Errors
///
/// Returns `PlacementFailed` wrapping the last trial error if every trial
/// fails, and `InvalidParameter` if `iteration_count` is zero.
pub fn find_good_values<G, M>(
    objective: &Objective<'_>,
    make_values: G,
    iteration_count: usize,
    minimizer: &M,
) -> PlacementResult<Minimum>
where
    G: FnMut() -> Vec<f64>,
    M: LocalMinimizer + ?Sized,
{
    let starts = draw_starts(make_values, iteration_count)?;
    let outcomes = starts
        .into_iter()
        .enumerate()
        .map(|(iteration_index, start)| run_trial(objective, minimizer, iteration_index, start))
        .collect();
    select_best(outcomes)
}

/// Same as [`find_good_values`], with trials spread over the rayon pool.
pub fn find_good_values_parallel<G, M>(
    objective: &Objective<'_>,
    make_values: G,
    iteration_count: usize,
    minimizer: &M,
) -> PlacementResult<Minimum>
where
    G: FnMut() -> Vec<f64>,
    M: LocalMinimizer + ?Sized,
{
    let starts = draw_starts(make_values, iteration_count)?;
    let outcomes = starts
        .into_par_iter()
        .enumerate()
        .map(|(iteration_index, start)| run_trial(objective, minimizer, iteration_index, start))
        .collect();
    select_best(outcomes)
}

fn draw_starts<G>(mut make_values: G, iteration_count: usize) -> PlacementResult<Vec<Vec<f64>>>
where
    G: FnMut() -> Vec<f64>,
{
    if iteration_count == 0 {
        return Err(PlacementError::InvalidParameter(
            "iteration_count must be at least one".to_string(),
        ));
    }
    Ok((0..iteration_count).map(|_| make_values()).collect())
}

fn run_trial<M>(
    objective: &Objective<'_>,
    minimizer: &M,
    iteration_index: usize,
    start: Vec<f64>,
) -> PlacementResult<Minimum>
where
    M: LocalMinimizer + ?Sized,
{
    let outcome = minimizer.minimize(objective, start);
    match &outcome {
        Ok(minimum) => log::debug!(
            "Restart {} reached loss {} after {} iterations",
            iteration_index,
            minimum.loss,
            minimum.iterations
        ),
        Err(e) => log::warn!("Restart {} failed: {}", iteration_index, e),
    }
    outcome
}

/// Keeps the first trial with the strictly lowest loss.
fn select_best(outcomes: Vec<PlacementResult<Minimum>>) -> PlacementResult<Minimum> {
    let attempts = outcomes.len();
    let mut best: Option<Minimum> = None;
    let mut last_error: Option<PlacementError> = None;

    for outcome in outcomes {
        match outcome {
            Ok(minimum) => {
                if best.as_ref().map_or(true, |b| minimum.loss < b.loss) {
                    best = Some(minimum);
                }
            }
            Err(e) => last_error = Some(e),
        }
    }

    match (best, last_error) {
        (Some(minimum), _) => Ok(minimum),
        (None, Some(source)) => Err(PlacementError::PlacementFailed {
            attempts,
            source: Box::new(source),
        }),
        (None, None) => Err(PlacementError::InvalidParameter(
            "iteration_count must be at least one".to_string(),
        )),
    }
}
