//! Geometry for the SVG price line.

use crate::domain::asset::HistorySeries;

pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 400.0;

/// `points` attribute of an SVG polyline spanning `width` x `height`.
///
/// Samples are plotted oldest first at even horizontal spacing; the price
/// range is stretched to the full height. Empty when nothing has a price.
pub fn polyline_points(series: &HistorySeries, width: f64, height: f64) -> String {
    let samples = series.chronological();
    if samples.is_empty() {
        return String::new();
    }

    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, price)| {
            (lo.min(*price), hi.max(*price))
        });
    let span = if max > min { max - min } else { 1.0 };
    let last_index = samples.len().saturating_sub(1).max(1) as f64;

    samples
        .iter()
        .enumerate()
        .map(|(i, (_, price))| {
            let x = i as f64 / last_index * width;
            let y = height - (price - min) / span * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
