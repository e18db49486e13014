//! Reading interest points from CSV and writing hotspot points back.

use std::path::Path;

use hotspot_spatial::Coordinate;

use crate::axis::AxisColumns;
use crate::errors::TableError;

/// File name of the result table inside the target folder.
pub const HOTSPOT_POINT_TABLE_NAME: &str = "hotspot_points.csv";

/// Interest points read from two columns of a table, along with what is
/// needed to write results in the same column layout.
#[derive(Debug, Clone)]
pub struct InterestPointTable {
    x_column: String,
    y_column: String,
    x_column_index: usize,
    y_column_index: usize,
    points: Vec<Coordinate>,
}

impl InterestPointTable {
    /// Loads the x and y columns of a CSV file.
    pub fn load(path: &Path, axes: &AxisColumns) -> Result<Self, TableError> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let x_column_index = column_index(&headers, &axes.x_column)?;
        let y_column_index = column_index(&headers, &axes.y_column)?;

        let mut points = Vec::new();
        for record in reader.records() {
            let record = record?;
            let x = parse_cell(&record, x_column_index, &axes.x_column)?;
            let y = parse_cell(&record, y_column_index, &axes.y_column)?;
            points.push(Coordinate::new(x, y));
        }
        log::info!("Loaded {} interest points from {}", points.len(), path.display());

        Ok(Self {
            x_column: axes.x_column.clone(),
            y_column: axes.y_column.clone(),
            x_column_index,
            y_column_index,
            points,
        })
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Returns the column names in the order they appear in the source table.
    pub fn column_order(&self) -> [&str; 2] {
        if self.y_column_index < self.x_column_index {
            [self.y_column.as_str(), self.x_column.as_str()]
        } else {
            [self.x_column.as_str(), self.y_column.as_str()]
        }
    }

    /// Writes hotspot points with the same column names and order as the
    /// source table.
    pub fn write_hotspot_points(
        &self,
        path: &Path,
        points: &[Coordinate],
    ) -> Result<(), TableError> {
        let y_first = self.y_column_index < self.x_column_index;
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(self.column_order())?;
        for point in points {
            let (first, second) = if y_first { (point.y, point.x) } else { (point.x, point.y) };
            writer.write_record([first.to_string(), second.to_string()])?;
        }
        writer.flush()?;

        log::info!("Wrote {} hotspot points to {}", points.len(), path.display());
        Ok(())
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| TableError::MissingColumn {
            column: column.to_string(),
        })
}

fn parse_cell(record: &csv::StringRecord, index: usize, column: &str) -> Result<f64, TableError> {
    let value = record.get(index).unwrap_or("");
    value.trim().parse::<f64>().map_err(|_| TableError::InvalidValue {
        column: column.to_string(),
        // 1-based line in the file, header included
        line: record.position().map_or(0, |position| position.line()),
        value: value.to_string(),
    })
}
