// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sparkline path generation.
//!
//! Turns a numeric series into a smoothed SVG path description. Pure and
//! stateless: identical input always yields an identical path string.

use crate::models::PriceGraph;

/// Midpoint smoothing factor for the curve control points.
const SMOOTHING_FACTOR: f64 = 0.25;

/// Vertical scale fallback for an all-zero series.
const FLAT_SERIES_MAX: f64 = 1.0;

/// Generate a smoothed curve path for `series` scaled into `width`×`height`.
///
/// The path starts with a move to the first scaled point, emits one smooth
/// segment per adjacent pair (control point sits `SMOOTHING_FACTOR` of the
/// way before the pair's midpoint), and closes with a segment pinned to the
/// right edge at the final value's height. Coordinates are rounded to three
/// decimal places; the vertical axis is flipped into SVG y-down space.
pub fn generate_path(
    series: &[f64],
    width: f64,
    height: f64,
) -> Result<PriceGraph, SparklineError> {
    if series.len() < 2 {
        return Err(SparklineError::TooFewPoints(series.len()));
    }

    let max = series.iter().copied().fold(f64::MIN, f64::max);
    // An all-zero series would otherwise make the vertical scale divide by zero
    let max = if max == 0.0 { FLAT_SERIES_MAX } else { max };

    let scale_h = width / (series.len() - 1) as f64;
    let scale_v = height / max;

    let apply_h = |val: f64| round3(val * scale_h);
    let apply_v = |val: f64| round3(height - val * scale_v);

    let mut commands = vec![format!("m0,{}", apply_v(series[0]))];

    for (i, pair) in series.windows(2).enumerate() {
        let (current, next) = (pair[0], pair[1]);

        let x = i as f64 + 0.5;
        let y = current + (next - current) * 0.5;

        let ctrl_x = i as f64 + (0.5 - SMOOTHING_FACTOR);
        let ctrl_y = current + (next - current) * (0.5 - SMOOTHING_FACTOR);

        commands.push(format!(
            "S{} {},{} {}",
            apply_h(ctrl_x),
            apply_v(ctrl_y),
            apply_h(x),
            apply_v(y)
        ));
    }

    let final_y = apply_v(series[series.len() - 1]);
    commands.push(format!("S{} {},{} {}", width, final_y, width, final_y));

    Ok(PriceGraph {
        path_data: commands.join(" "),
        width,
        height,
    })
}

/// Round to three decimal places, matching the frontend's expectations.
fn round3(val: f64) -> f64 {
    (val * 1000.0).round() / 1000.0
}

/// Errors from sparkline generation.
#[derive(Debug, thiserror::Error)]
pub enum SparklineError {
    #[error("Series needs at least 2 points to scale, got {0}")]
    TooFewPoints(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_series_exact_path() {
        // max=10, scale_h=400, scale_v=10
        let graph = generate_path(&[0.0, 10.0, 0.0], 800.0, 100.0).unwrap();

        assert_eq!(
            graph.path_data,
            "m0,100 S100 75,200 50 S500 25,600 50 S800 100,800 100"
        );
        assert_eq!(graph.width, 800.0);
        assert_eq!(graph.height, 100.0);
    }

    #[test]
    fn test_first_point_anchors_to_scaled_series_start() {
        // max=4, scale_v=25, so the path opens at 100 - 2*25 = 50
        let graph = generate_path(&[2.0, 4.0], 800.0, 100.0).unwrap();

        assert!(graph.path_data.starts_with("m0,50 "));
    }

    #[test]
    fn test_path_terminates_at_right_edge() {
        // max=10, so the final value lands exactly on the baseline top
        let graph = generate_path(&[3.0, 7.0, 5.0, 10.0], 800.0, 100.0).unwrap();

        assert!(graph.path_data.ends_with("S800 0,800 0"));
    }

    #[test]
    fn test_deterministic_output() {
        let series = [0.0, 34.091, 73.864, 100.0, 46.023, 0.0];

        let first = generate_path(&series, 800.0, 100.0).unwrap();
        let second = generate_path(&series, 800.0, 100.0).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_coordinates_round_to_three_decimals() {
        // scale_h = 800/16 = 50, control x for the first pair is 0.25*50 = 12.5
        let series = vec![1.0; 17];
        let graph = generate_path(&series, 800.0, 100.0).unwrap();

        assert!(graph.path_data.contains("S12.5 "));
    }

    #[test]
    fn test_rejects_degenerate_series() {
        assert!(matches!(
            generate_path(&[], 800.0, 100.0),
            Err(SparklineError::TooFewPoints(0))
        ));
        assert!(matches!(
            generate_path(&[5.0], 800.0, 100.0),
            Err(SparklineError::TooFewPoints(1))
        ));
    }

    #[test]
    fn test_flat_zero_series_does_not_divide_by_zero() {
        let graph = generate_path(&[0.0, 0.0, 0.0], 800.0, 100.0).unwrap();

        assert!(graph.path_data.starts_with("m0,100"));
        assert!(graph.path_data.split(' ').all(|c| !c.contains("NaN")));
    }
}
