use crate::geometry::Coordinate;

/// A 2D bounding box represented by minimum and maximum coordinates.
///
/// `BoundingBox` defines a rectangular area in 2D space using the minimum
/// (min_x, min_y) and maximum (max_x, max_y) corners. The placement engine
/// uses it to describe where random starting positions are drawn from.
///
/// # Examples
///
/// ```rust
/// use hotspot_spatial::{BoundingBox, Coordinate};
///
/// let bbox = BoundingBox::from_corners(
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(100.0, 50.0),
/// );
///
/// assert_eq!(bbox.x_bounds(), (0.0, 100.0));
/// assert_eq!(bbox.y_bounds(), (0.0, 50.0));
/// ```
#[derive(Clone, Copy, PartialEq, Default, Debug, serde::Deserialize, serde::Serialize)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundingBox({}, {}, {}, {})", self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl BoundingBox {
    /// Creates a new bounding box with the specified coordinates.
    ///
    /// # Arguments
    ///
    /// * `min_x` - Minimum X coordinate
    /// * `min_y` - Minimum Y coordinate
    /// * `max_x` - Maximum X coordinate
    /// * `max_y` - Maximum Y coordinate
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a bounding box from its `xy_min` and `xy_max` corners.
    pub fn from_corners(xy_min: Coordinate, xy_max: Coordinate) -> BoundingBox {
        BoundingBox::new(xy_min.x, xy_min.y, xy_max.x, xy_max.y)
    }

    /// Returns the tightest box containing every coordinate, or `None` when
    /// the slice is empty.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Option<BoundingBox> {
        let first = coordinates.first()?;
        let init = BoundingBox::new(first.x, first.y, first.x, first.y);
        Some(coordinates[1..].iter().fold(init, |bbox, c| {
            BoundingBox::new(
                bbox.min_x.min(c.x),
                bbox.min_y.min(c.y),
                bbox.max_x.max(c.x),
                bbox.max_y.max(c.y),
            )
        }))
    }

    /// Returns the `(min, max)` range of the x axis.
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    /// Returns the `(min, max)` range of the y axis.
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.min_y, self.max_y)
    }

    /// Checks if this bounding box contains a point.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Checks if this bounding box is valid (finite and min <= max).
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }
}
