use hotspot_spatial::{BoundingBox, Coordinate};
use rand::Rng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch folder that is removed when the context is dropped.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` inside the scratch folder.
    pub fn write_table(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

pub fn create_test_context() -> io::Result<TestContext> {
    Ok(TestContext {
        dir: tempfile::tempdir()?,
    })
}

/// Corners of the axis-aligned square `[0, side]^2`.
pub fn square_corners(side: f64) -> Vec<Coordinate> {
    vec![
        Coordinate::new(0.0, 0.0),
        Coordinate::new(side, 0.0),
        Coordinate::new(0.0, side),
        Coordinate::new(side, side),
    ]
}

/// Uniform points inside `bounds`.
pub fn random_points<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    bounds: &BoundingBox,
) -> Vec<Coordinate> {
    let (min_x, max_x) = bounds.x_bounds();
    let (min_y, max_y) = bounds.y_bounds();
    (0..count)
        .map(|_| Coordinate::new(rng.gen_range(min_x..=max_x), rng.gen_range(min_y..=max_y)))
        .collect()
}

/// Planar loss computed by brute force over every pair of points.
pub fn brute_force_loss(
    interest_points: &[Coordinate],
    hotspot_points: &[Coordinate],
    radius: f64,
) -> f64 {
    let mut loss = 0.0;
    for hotspot_point in hotspot_points {
        let distances: Vec<f64> = interest_points
            .iter()
            .map(|p| hotspot_point.distance(p))
            .collect();
        let min_distance = distances.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_distance = distances.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        loss += distances.iter().sum::<f64>() + max_distance;
        if min_distance < radius {
            loss -= hotspot_points.iter().map(|other| hotspot_point.distance(other)).sum::<f64>();
        }
    }
    loss
}

/// Renders points as a two-column CSV table.
pub fn to_csv(x_column: &str, y_column: &str, points: &[Coordinate]) -> String {
    let mut contents = format!("{},{}\n", x_column, y_column);
    for point in points {
        contents.push_str(&format!("{},{}\n", point.x, point.y));
    }
    contents
}
