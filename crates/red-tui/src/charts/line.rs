//! Line chart with monotone interpolation and marked points.
//!
//! The four samples are plotted on a character grid; the path between
//! them is resampled column by column with Fritsch-Carlson monotone
//! interpolation, so the stroke never overshoots neighboring samples.

use crate::ui::{EmptyState, THEME};

#[cfg(feature = "fancy-ui")]
use super::{domain_row, label_axis, monotone_samples, sample_column, value_row};

#[derive(Clone, Debug)]
pub struct LineChartView {
    pub title: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub width: usize,
    pub height: usize,
    pub value_suffix: String,
    pub empty: Option<EmptyState>,
}

impl LineChartView {
    pub fn new() -> Self {
        Self {
            title: None,
            labels: Vec::new(),
            values: Vec::new(),
            width: super::CHART_WIDTH,
            height: super::CHART_HEIGHT,
            value_suffix: String::new(),
            empty: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_point(mut self, label: impl Into<String>, value: f64) -> Self {
        self.labels.push(label.into());
        self.values.push(value);
        self
    }

    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn value_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.value_suffix = suffix.into();
        self
    }

    pub fn with_empty_state(mut self, empty: EmptyState) -> Self {
        self.empty = Some(empty);
        self
    }

    pub fn has_points(&self) -> bool {
        !self.values.is_empty()
    }

    #[cfg(feature = "fancy-ui")]
    fn domain(&self) -> (f64, f64) {
        let min = self.values.iter().copied().fold(f64::MAX, f64::min);
        let max = self.values.iter().copied().fold(f64::MIN, f64::max);
        (min, max)
    }

    /// Render the chart as text lines.
    #[cfg(feature = "fancy-ui")]
    pub fn render_lines(&self) -> Vec<String> {
        if self.values.is_empty() {
            if let Some(empty) = &self.empty {
                return empty.render_lines(&THEME);
            }
            return vec!["(empty chart)".to_string()];
        }

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
            lines.push(String::new());
        }

        let (min, max) = self.domain();
        let mut grid: Vec<Vec<&'static str>> = (0..self.height)
            .map(|row| {
                let fill = if row % 2 == 1 { THEME.grid } else { " " };
                vec![fill; self.width]
            })
            .collect();

        // Stroke, then plotted points on top.
        let samples = monotone_samples(&self.values, self.width);
        for (col, sample) in samples.iter().enumerate() {
            let row = value_row(*sample, min, max, self.height);
            grid[row][col] = THEME.stroke;
        }
        for (j, value) in self.values.iter().enumerate() {
            let col = sample_column(j, self.values.len(), self.width);
            let row = value_row(*value, min, max, self.height);
            grid[row][col] = THEME.point;
        }

        for row in grid {
            lines.push(row.concat());
        }
        lines.push(label_axis(&self.labels, self.width));
        lines.push(domain_row(min, max, &self.value_suffix));
        lines
    }

    /// Plain-text fallback for minimal builds.
    #[cfg(not(feature = "fancy-ui"))]
    pub fn render_lines(&self) -> Vec<String> {
        if self.values.is_empty() {
            if let Some(empty) = &self.empty {
                return empty.render_lines(&THEME);
            }
            return vec!["(empty chart)".to_string()];
        }

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        for (label, value) in self.labels.iter().zip(&self.values) {
            lines.push(format!("{label}: {value:.1}{}", self.value_suffix));
        }
        lines
    }
}

impl Default for LineChartView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wind_chart() -> LineChartView {
        LineChartView::new()
            .add_point("00:00", 35.0)
            .add_point("06:00", 60.0)
            .add_point("12:00", 85.0)
            .add_point("18:00", 65.0)
    }

    #[test]
    fn test_empty_chart_renders_placeholder() {
        let lines = LineChartView::new().render_lines();
        assert!(!lines.is_empty());
    }

    #[cfg(feature = "fancy-ui")]
    #[test]
    fn test_four_points_marked() {
        let lines = wind_chart().render_lines();
        let marks: usize = lines
            .iter()
            .map(|l| l.matches(crate::ui::THEME.point).count())
            .sum();
        assert_eq!(marks, 4);
    }

    #[cfg(feature = "fancy-ui")]
    #[test]
    fn test_axis_labels_in_order() {
        let lines = wind_chart().render_lines();
        let axis = lines
            .iter()
            .find(|l| l.contains("00:00"))
            .expect("axis row");
        let p0 = axis.find("00:00").unwrap();
        let p2 = axis.find("12:00").unwrap();
        assert!(p0 < p2);
    }

    #[cfg(feature = "fancy-ui")]
    #[test]
    fn test_domain_row_shows_data_bounds() {
        let lines = wind_chart().render_lines();
        let domain = lines.last().unwrap();
        assert!(domain.contains("35.0"));
        assert!(domain.contains("85.0"));
    }

    #[cfg(feature = "fancy-ui")]
    #[test]
    fn test_peak_point_on_top_row() {
        let chart = wind_chart();
        let lines = chart.render_lines();
        // Max value maps to the first grid row.
        assert!(lines[0].contains(crate::ui::THEME.point));
    }

    #[test]
    fn test_render_is_idempotent() {
        let chart = wind_chart();
        assert_eq!(chart.render_lines(), chart.render_lines());
    }
}
