//! Radar-chart normalization of the numeric comparison results
//!
//! Each metric is rescaled onto a common 0-10 scale (user value and
//! population mean divided by the column's observed maximum, times 10) so
//! differently-scaled metrics share one chart. Output is presentation data
//! only; rendering belongs to the chart collaborator.

use super::comparator::ComparisonResult;
use super::RADAR_SCALE_MAX;
use crate::population::PopulationDataset;
use serde::Serialize;
use std::f64::consts::PI;

/// Chart-ready series for a closed two-polygon radar plot
///
/// The value and angle sequences repeat their first element at the end so
/// a plotted polygon visually closes; `labels` is one entry per metric and
/// is not closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub labels: Vec<String>,
    pub user: Vec<f64>,
    pub average: Vec<f64>,
    /// Axis angles in radians, evenly spaced over the full circle
    pub angles: Vec<f64>,
}

/// Build the radar series for the numeric subset of a comparison
pub fn radar_series(comparison: &ComparisonResult, dataset: &PopulationDataset) -> RadarSeries {
    let n = comparison.numeric.len();
    let mut labels = Vec::with_capacity(n);
    let mut user = Vec::with_capacity(n + 1);
    let mut average = Vec::with_capacity(n + 1);
    let mut angles = Vec::with_capacity(n + 1);

    for (i, metric) in comparison.numeric.iter().enumerate() {
        let max = dataset.column_max(&metric.field).unwrap_or(0.0);
        labels.push(metric.field.clone());
        user.push(normalize(metric.user_value, max));
        average.push(normalize(metric.population_mean, max));
        angles.push(i as f64 / n as f64 * 2.0 * PI);
    }

    // Close the polygon by repeating the first point
    if n > 0 {
        user.push(user[0]);
        average.push(average[0]);
        angles.push(angles[0]);
    }

    RadarSeries {
        labels,
        user,
        average,
        angles,
    }
}

/// Rescale onto [0, 10]; an all-zero column maps to 0 rather than
/// dividing by zero
fn normalize(value: f64, max: f64) -> f64 {
    if max == 0.0 {
        0.0
    } else {
        value / max * RADAR_SCALE_MAX
    }
}
