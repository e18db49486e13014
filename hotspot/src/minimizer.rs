//! Local minimization of a black-box objective.
//!
//! The hotspot loss is non-smooth, so the default minimizer is the
//! derivative-free Nelder-Mead simplex method. Every run is bounded by an
//! iteration ceiling and always reports its best vertex.

use argmin::core::{CostFunction, Error, Executor, State};
use argmin::solver::neldermead::NelderMead;

use crate::errors::{PlacementError, PlacementResult};

/// An objective over flattened candidate vectors. Lower is better.
pub type Objective<'a> = dyn Fn(&[f64]) -> PlacementResult<f64> + Sync + 'a;

/// The outcome of one local minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum {
    pub values: Vec<f64>,
    pub loss: f64,
    pub iterations: u64,
}

/// Finds a local minimum of an objective from a starting vector.
pub trait LocalMinimizer: Send + Sync {
    fn minimize(&self, objective: &Objective<'_>, start: Vec<f64>) -> PlacementResult<Minimum>;
}

/// Settings for the Nelder-Mead minimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizerConfig {
    /// Iteration ceiling. `None` uses `200 * dimension`.
    pub max_iters: Option<u64>,
    /// Stop once the standard deviation of the simplex costs drops below this.
    pub sd_tolerance: f64,
    /// Relative step used to build the initial simplex from non-zero coordinates.
    pub nonzero_delta: f64,
    /// Absolute step used for coordinates that are exactly zero.
    pub zero_delta: f64,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            max_iters: None,
            sd_tolerance: 1e-8,
            nonzero_delta: 0.05,
            zero_delta: 0.00025,
        }
    }
}

/// Nelder-Mead simplex minimizer.
#[derive(Debug, Clone, Default)]
pub struct NelderMeadMinimizer {
    config: MinimizerConfig,
}

impl NelderMeadMinimizer {
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    fn max_iters(&self, dimension: usize) -> u64 {
        self.config
            .max_iters
            .unwrap_or(200 * dimension.max(1) as u64)
    }

    /// Builds `n + 1` vertices: the start plus one vertex per coordinate
    /// with that coordinate nudged.
    fn initial_simplex(&self, start: &[f64]) -> Vec<Vec<f64>> {
        let mut simplex = Vec::with_capacity(start.len() + 1);
        simplex.push(start.to_vec());
        for k in 0..start.len() {
            let mut vertex = start.to_vec();
            vertex[k] = if vertex[k] != 0.0 {
                (1.0 + self.config.nonzero_delta) * vertex[k]
            } else {
                self.config.zero_delta
            };
            simplex.push(vertex);
        }
        simplex
    }
}

struct ArgminObjective<'a, 'b> {
    objective: &'a Objective<'b>,
}

impl CostFunction for ArgminObjective<'_, '_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, Error> {
        Ok((self.objective)(param.as_slice())?)
    }
}

impl LocalMinimizer for NelderMeadMinimizer {
    fn minimize(&self, objective: &Objective<'_>, start: Vec<f64>) -> PlacementResult<Minimum> {
        let max_iters = self.max_iters(start.len());
        let simplex = self.initial_simplex(&start);
        // NelderMead::init unwraps initial vertex costs
        for vertex in &simplex {
            objective(vertex.as_slice())?;
        }

        let solver = NelderMead::new(simplex)
            .with_sd_tolerance(self.config.sd_tolerance)
            .map_err(|e| PlacementError::OptimizerNonconvergence(e.to_string()))?;

        let result = Executor::new(ArgminObjective { objective }, solver)
            .configure(|state| state.max_iters(max_iters))
            .run()
            .map_err(recover_placement_error)?;

        let state = result.state();
        let values = state.get_best_param().cloned().ok_or_else(|| {
            PlacementError::OptimizerNonconvergence("no parameter vector was produced".to_string())
        })?;
        let loss = state.get_best_cost();
        if !loss.is_finite() {
            return Err(PlacementError::OptimizerNonconvergence(format!(
                "best loss is not finite: {}",
                loss
            )));
        }

        Ok(Minimum {
            values,
            loss,
            iterations: state.get_iter(),
        })
    }
}

/// Unwraps a loss failure that travelled through the solver, so callers see
/// the original error kind.
fn recover_placement_error(err: Error) -> PlacementError {
    match err.downcast::<PlacementError>() {
        Ok(placement_error) => placement_error,
        Err(other) => PlacementError::OptimizerNonconvergence(other.to_string()),
    }
}
