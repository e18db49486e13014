//! Hotspot placement entry points.
//!
//! [`place_hotspot_points`] is the engine itself. It trusts its parameters.
//! [`PlacementBuilder`] is the configuration layer in front of it: it
//! validates parameters, picks the minimizer and decides whether restarts
//! run in parallel.

use hotspot_spatial::{BoundingBox, Coordinate, SpatialQuery};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::candidate::{reshape, CandidateSampler};
use crate::errors::{PlacementError, PlacementResult};
use crate::loss::HotspotLoss;
use crate::minimizer::{LocalMinimizer, MinimizerConfig, NelderMeadMinimizer};
use crate::search::{find_good_values, find_good_values_parallel};

/// Parameters of a placement run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementParameters {
    /// Number of hotspot points to place.
    pub hotspot_point_count: usize,
    /// Distance below which a hotspot point is considered to already serve
    /// an interest point, which switches on the spreading term.
    pub hotspot_point_radius: f64,
    /// Region that random starting positions are drawn from.
    pub bounds: BoundingBox,
    /// Number of independent restarts.
    pub iteration_count: usize,
}

impl PlacementParameters {
    pub fn new(
        hotspot_point_count: usize,
        hotspot_point_radius: f64,
        bounds: BoundingBox,
        iteration_count: usize,
    ) -> Self {
        Self {
            hotspot_point_count,
            hotspot_point_radius,
            bounds,
            iteration_count,
        }
    }

    /// Checks the ranges the engine relies on.
    pub fn validate(&self) -> PlacementResult<()> {
        if self.hotspot_point_count < 1 {
            return Err(PlacementError::InvalidParameter(
                "hotspot_point_count must be at least one".to_string(),
            ));
        }
        if !(self.hotspot_point_radius > 0.0) {
            return Err(PlacementError::InvalidParameter(
                "hotspot_point_radius must be greater than zero".to_string(),
            ));
        }
        if !self.bounds.is_valid() {
            return Err(PlacementError::InvalidParameter(format!(
                "bounds must be finite with min <= max, got: {}",
                self.bounds
            )));
        }
        if self.iteration_count < 1 {
            return Err(PlacementError::InvalidParameter(
                "iteration_count must be at least one".to_string(),
            ));
        }
        Ok(())
    }
}

/// The best placement found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub points: Vec<Coordinate>,
    pub loss: f64,
}

/// Places hotspot points with the default minimizer, running restarts
/// sequentially.
///
/// Parameters are not validated here. Use [`PlacementBuilder`] or
/// [`PlacementParameters::validate`] first when they come from user input.
pub fn place_hotspot_points<Q, R>(
    query: &Q,
    parameters: &PlacementParameters,
    rng: &mut R,
) -> PlacementResult<Placement>
where
    Q: SpatialQuery + ?Sized,
    R: Rng + ?Sized,
{
    place_with(query, parameters, &NelderMeadMinimizer::default(), false, rng)
}

fn place_with<Q, M, R>(
    query: &Q,
    parameters: &PlacementParameters,
    minimizer: &M,
    parallel: bool,
    rng: &mut R,
) -> PlacementResult<Placement>
where
    Q: SpatialQuery + ?Sized,
    M: LocalMinimizer + ?Sized,
    R: Rng + ?Sized,
{
    let loss = HotspotLoss::new(query, parameters.hotspot_point_radius);
    let objective = |values: &[f64]| loss.compute(values);
    let sampler = CandidateSampler::new(&parameters.bounds, parameters.hotspot_point_count);
    let make_values = || sampler.sample(&mut *rng);

    log::debug!(
        "Placing {} hotspot points over {} interest points with {} restarts",
        parameters.hotspot_point_count,
        query.size(),
        parameters.iteration_count
    );

    let best = if parallel {
        find_good_values_parallel(&objective, make_values, parameters.iteration_count, minimizer)?
    } else {
        find_good_values(&objective, make_values, parameters.iteration_count, minimizer)?
    };

    let placement = Placement {
        points: reshape(&best.values)?,
        loss: best.loss,
    };
    log::info!(
        "Placed {} hotspot points with loss {}",
        placement.points.len(),
        placement.loss
    );
    Ok(placement)
}

/// Builder for a configured [`HotspotPlacer`].
///
/// Setter errors are captured and returned from [`PlacementBuilder::build`].
///
/// # Examples
///
/// ```rust
/// use hotspot::PlacementBuilder;
/// use hotspot_spatial::{BoundingBox, Coordinate, PlanarIndex};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let interest_points = vec![Coordinate::new(0.0, 0.0), Coordinate::new(4.0, 0.0)];
/// let bounds = BoundingBox::from_coordinates(&interest_points).unwrap();
/// let index = PlanarIndex::new(interest_points);
///
/// let placer = PlacementBuilder::new()
///     .hotspot_point_count(1)
///     .hotspot_point_radius(0.5)
///     .bounds(bounds)
///     .iteration_count(3)
///     .build()?;
///
/// let placement = placer.place(&index, &mut StdRng::seed_from_u64(1))?;
/// assert_eq!(placement.points.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct PlacementBuilder {
    error: Option<PlacementError>,
    hotspot_point_count: usize,
    hotspot_point_radius: f64,
    bounds: Option<BoundingBox>,
    iteration_count: usize,
    minimizer: Option<Box<dyn LocalMinimizer>>,
    minimizer_config: MinimizerConfig,
    parallel: bool,
}

impl Default for PlacementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementBuilder {
    /// Creates a builder placing one hotspot point with three restarts.
    pub fn new() -> Self {
        PlacementBuilder {
            error: None,
            hotspot_point_count: 1,
            hotspot_point_radius: 1.0,
            bounds: None,
            iteration_count: 3,
            minimizer: None,
            minimizer_config: MinimizerConfig::default(),
            parallel: false,
        }
    }

    pub fn hotspot_point_count(mut self, hotspot_point_count: usize) -> Self {
        self.hotspot_point_count = hotspot_point_count;
        self
    }

    pub fn hotspot_point_radius(mut self, hotspot_point_radius: f64) -> Self {
        self.hotspot_point_radius = hotspot_point_radius;
        self
    }

    /// Sets the sampling region for starting positions.
    pub fn bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Sets the sampling region to the tightest box around `coordinates`.
    pub fn bounds_from(mut self, coordinates: &[Coordinate]) -> Self {
        match BoundingBox::from_coordinates(coordinates) {
            Some(bounds) => self.bounds = Some(bounds),
            None => self.capture(PlacementError::InvalidParameter(
                "cannot derive bounds from an empty coordinate set".to_string(),
            )),
        }
        self
    }

    pub fn iteration_count(mut self, iteration_count: usize) -> Self {
        self.iteration_count = iteration_count;
        self
    }

    /// Caps the number of iterations of each restart.
    pub fn max_iters(mut self, max_iters: u64) -> Self {
        if max_iters == 0 {
            self.capture(PlacementError::InvalidParameter(
                "max_iters must be at least one".to_string(),
            ));
        } else {
            self.minimizer_config.max_iters = Some(max_iters);
        }
        self
    }

    pub fn sd_tolerance(mut self, sd_tolerance: f64) -> Self {
        if !(sd_tolerance > 0.0) {
            self.capture(PlacementError::InvalidParameter(format!(
                "sd_tolerance must be greater than zero, got: {}",
                sd_tolerance
            )));
        } else {
            self.minimizer_config.sd_tolerance = sd_tolerance;
        }
        self
    }

    /// Replaces the default Nelder-Mead minimizer.
    pub fn minimizer<M: LocalMinimizer + 'static>(mut self, minimizer: M) -> Self {
        self.minimizer = Some(Box::new(minimizer));
        self
    }

    /// Runs restarts on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration and builds the placer.
    pub fn build(self) -> PlacementResult<HotspotPlacer> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let bounds = self.bounds.ok_or_else(|| {
            PlacementError::InvalidParameter("bounds must be set".to_string())
        })?;

        let parameters = PlacementParameters::new(
            self.hotspot_point_count,
            self.hotspot_point_radius,
            bounds,
            self.iteration_count,
        );
        parameters.validate()?;

        let minimizer = self
            .minimizer
            .unwrap_or_else(|| Box::new(NelderMeadMinimizer::new(self.minimizer_config)));

        Ok(HotspotPlacer {
            parameters,
            minimizer,
            parallel: self.parallel,
        })
    }

    fn capture(&mut self, error: PlacementError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

/// A validated placement configuration, reusable across providers.
pub struct HotspotPlacer {
    parameters: PlacementParameters,
    minimizer: Box<dyn LocalMinimizer>,
    parallel: bool,
}

impl HotspotPlacer {
    pub fn parameters(&self) -> &PlacementParameters {
        &self.parameters
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Places hotspot points over the interest points behind `query`.
    pub fn place<Q, R>(&self, query: &Q, rng: &mut R) -> PlacementResult<Placement>
    where
        Q: SpatialQuery + ?Sized,
        R: Rng + ?Sized,
    {
        place_with(query, &self.parameters, self.minimizer.as_ref(), self.parallel, rng)
    }
}
