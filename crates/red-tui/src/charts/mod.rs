//! Text chart renderers.
//!
//! One view per chart kind, all following the same shape: build the
//! view from a series, then `render_lines()` to get the chart as
//! plain strings. Rendering is total; an [`EmptyState`](crate::ui::EmptyState)
//! covers views built with no data.

mod area;
mod bar;
mod line;
mod pie;

pub use area::AreaChartView;
pub use bar::BarChartView;
pub use line::LineChartView;
pub use pie::DonutChartView;

/// Default chart body height in rows, the fixed panel chart area.
pub const CHART_HEIGHT: usize = 10;

/// Default chart body width in columns.
pub const CHART_WIDTH: usize = 41;

/// Monotone cubic (Fritsch-Carlson) resampling of `values` onto
/// `columns` evenly spaced samples. Interpolation never overshoots
/// the neighboring data values.
pub(crate) fn monotone_samples(values: &[f64], columns: usize) -> Vec<f64> {
    let n = values.len();
    if n == 0 || columns == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![values[0]; columns];
    }

    // Secant slopes per interval, then Fritsch-Carlson tangents.
    let secants: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let mut tangents = vec![0.0; n];
    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        if secants[i - 1] * secants[i] > 0.0 {
            tangents[i] = (secants[i - 1] + secants[i]) / 2.0;
        }
    }
    for i in 0..n - 1 {
        if secants[i] == 0.0 {
            tangents[i] = 0.0;
            tangents[i + 1] = 0.0;
            continue;
        }
        let alpha = tangents[i] / secants[i];
        let beta = tangents[i + 1] / secants[i];
        let norm = alpha * alpha + beta * beta;
        if norm > 9.0 {
            let tau = 3.0 / norm.sqrt();
            tangents[i] = tau * alpha * secants[i];
            tangents[i + 1] = tau * beta * secants[i];
        }
    }

    (0..columns)
        .map(|col| {
            let x = if columns == 1 {
                0.0
            } else {
                col as f64 * (n - 1) as f64 / (columns - 1) as f64
            };
            let i = (x.floor() as usize).min(n - 2);
            let t = x - i as f64;
            let h00 = (1.0 + 2.0 * t) * (1.0 - t) * (1.0 - t);
            let h10 = t * (1.0 - t) * (1.0 - t);
            let h01 = t * t * (3.0 - 2.0 * t);
            let h11 = t * t * (t - 1.0);
            h00 * values[i] + h10 * tangents[i] + h01 * values[i + 1] + h11 * tangents[i + 1]
        })
        .collect()
}

/// Column index of sample `j` out of `n` on a `width`-column chart.
pub(crate) fn sample_column(j: usize, n: usize, width: usize) -> usize {
    if n <= 1 || width == 0 {
        return 0;
    }
    j * (width - 1) / (n - 1)
}

/// Axis row placing each time label at its sample column.
pub(crate) fn label_axis(labels: &[String], width: usize) -> String {
    let mut axis = vec![' '; width.max(1)];
    for (j, label) in labels.iter().enumerate() {
        let col = sample_column(j, labels.len(), width);
        let start = col.min(width.saturating_sub(label.len()));
        for (offset, ch) in label.chars().enumerate() {
            if start + offset < axis.len() {
                axis[start + offset] = ch;
            }
        }
    }
    axis.into_iter().collect::<String>().trim_end().to_string()
}

/// Linear value-to-row mapping: row 0 is the top of the chart.
pub(crate) fn value_row(value: f64, min: f64, max: f64, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let span = max - min;
    let normalized = if span > 0.0 {
        ((value - min) / span).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let row = ((1.0 - normalized) * (height - 1) as f64).round() as usize;
    row.min(height - 1)
}

/// Footer row stating the auto domain, e.g. `y: 20.0 .. 100.0`.
pub(crate) fn domain_row(min: f64, max: f64, suffix: &str) -> String {
    format!("y: {min:.1}{suffix} .. {max:.1}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotone_passes_through_data() {
        let values = [20.0, 50.0, 100.0, 60.0];
        let samples = monotone_samples(&values, 4);
        for (sample, value) in samples.iter().zip(values) {
            assert!((sample - value).abs() < 1e-9);
        }
    }

    #[test]
    fn test_monotone_no_overshoot() {
        // Overshoot past the data range is what monotone
        // interpolation exists to prevent.
        let values = [35.0, 60.0, 85.0, 65.0];
        let samples = monotone_samples(&values, 200);
        for sample in samples {
            assert!(sample >= 35.0 - 1e-9 && sample <= 85.0 + 1e-9);
        }
    }

    #[test]
    fn test_monotone_rising_segment_stays_monotone() {
        let values = [0.0, 10.0, 20.0, 30.0];
        let samples = monotone_samples(&values, 100);
        assert!(samples.windows(2).all(|w| w[1] >= w[0] - 1e-9));
    }

    #[test]
    fn test_sample_columns_hit_edges() {
        assert_eq!(sample_column(0, 4, 41), 0);
        assert_eq!(sample_column(3, 4, 41), 40);
    }

    #[test]
    fn test_label_axis_in_order() {
        let labels: Vec<String> = ["00:00", "06:00", "12:00", "18:00"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let axis = label_axis(&labels, 41);
        let p0 = axis.find("00:00").unwrap();
        let p1 = axis.find("06:00").unwrap();
        let p3 = axis.find("18:00").unwrap();
        assert!(p0 < p1 && p1 < p3);
    }

    #[test]
    fn test_value_row_bounds() {
        assert_eq!(value_row(100.0, 0.0, 100.0, 10), 0);
        assert_eq!(value_row(0.0, 0.0, 100.0, 10), 9);
    }

    #[test]
    fn test_value_row_flat_domain_centers() {
        assert_eq!(value_row(5.0, 5.0, 5.0, 11), 5);
    }
}
