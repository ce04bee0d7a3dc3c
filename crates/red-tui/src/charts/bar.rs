//! Horizontal bar chart.
//!
//! One row per sample: time label, bar scaled against the series
//! maximum, exact value at the end of the row.

use crate::ui::{EmptyState, THEME};

/// A single bar in the chart.
#[derive(Clone, Debug)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Horizontal bar chart renderer.
#[derive(Clone, Debug)]
pub struct BarChartView {
    pub title: Option<String>,
    pub bars: Vec<Bar>,
    pub max_value: Option<f64>,
    pub bar_width: usize,
    pub show_values: bool,
    pub value_suffix: String,
    pub empty: Option<EmptyState>,
}

impl BarChartView {
    pub fn new() -> Self {
        Self {
            title: None,
            bars: Vec::new(),
            max_value: None,
            bar_width: super::CHART_WIDTH,
            show_values: true,
            value_suffix: String::new(),
            empty: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_bar(mut self, label: impl Into<String>, value: f64) -> Self {
        self.bars.push(Bar {
            label: label.into(),
            value,
        });
        self
    }

    /// Scale against a fixed maximum instead of the data maximum.
    pub fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    pub fn show_values(mut self, show: bool) -> Self {
        self.show_values = show;
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

    pub fn has_bars(&self) -> bool {
        !self.bars.is_empty()
    }

    /// Render the chart as text lines.
    #[cfg(feature = "fancy-ui")]
    pub fn render_lines(&self) -> Vec<String> {
        if self.bars.is_empty() {
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

        let max_val = self.max_value.unwrap_or_else(|| {
            self.bars
                .iter()
                .map(|b| b.value)
                .fold(f64::MIN, f64::max)
                .max(1.0)
        });
        let max_label_len = self.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);

        for bar in &self.bars {
            let normalized = if max_val > 0.0 {
                (bar.value / max_val).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let filled = (normalized * self.bar_width as f64).round() as usize;
            let visual = THEME.bar_fill.repeat(filled);
            let padding = " ".repeat(self.bar_width.saturating_sub(filled));
            let label_pad = " ".repeat(max_label_len.saturating_sub(bar.label.len()));

            if self.show_values {
                lines.push(format!(
                    "{}{} {}{}{}{} {:.1}{}",
                    bar.label,
                    label_pad,
                    THEME.edge_v,
                    visual,
                    padding,
                    THEME.edge_v,
                    bar.value,
                    self.value_suffix
                ));
            } else {
                lines.push(format!(
                    "{}{} {}{}{}{}",
                    bar.label, label_pad, THEME.edge_v, visual, padding, THEME.edge_v
                ));
            }
        }

        lines.push(format!(
            "{}0{}{:.1}{}",
            " ".repeat(max_label_len + 2),
            " ".repeat(self.bar_width.saturating_sub(1)),
            max_val,
            self.value_suffix
        ));
        lines
    }

    /// Plain-text fallback for minimal builds.
    #[cfg(not(feature = "fancy-ui"))]
    pub fn render_lines(&self) -> Vec<String> {
        if self.bars.is_empty() {
            if let Some(empty) = &self.empty {
                return empty.render_lines(&THEME);
            }
            return vec!["(empty chart)".to_string()];
        }

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        for bar in &self.bars {
            lines.push(format!("{}: {:.1}{}", bar.label, bar.value, self.value_suffix));
        }
        lines
    }
}

impl Default for BarChartView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar_chart() -> BarChartView {
        BarChartView::new()
            .add_bar("00:00", 20.0)
            .add_bar("06:00", 50.0)
            .add_bar("12:00", 100.0)
            .add_bar("18:00", 60.0)
    }

    #[test]
    fn test_empty_chart_renders_placeholder() {
        let lines = BarChartView::new().render_lines();
        assert!(!lines.is_empty());
    }

    #[test]
    fn test_one_row_per_sample_in_order() {
        let lines = solar_chart().render_lines();
        let rows: Vec<&String> = lines.iter().filter(|l| l.contains(':')).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("00:00"));
        assert!(rows[3].starts_with("18:00"));
    }

    #[test]
    fn test_exact_values_shown() {
        let lines = solar_chart().render_lines();
        for value in ["20.0", "50.0", "100.0", "60.0"] {
            assert!(lines.iter().any(|l| l.contains(value)), "{value}");
        }
    }

    #[cfg(feature = "fancy-ui")]
    #[test]
    fn test_peak_bar_is_longest() {
        let lines = solar_chart().render_lines();
        let fill = crate::ui::THEME.bar_fill;
        let bar_len = |l: &String| l.matches(fill).count();
        let peak = lines.iter().find(|l| l.starts_with("12:00")).unwrap();
        let low = lines.iter().find(|l| l.starts_with("00:00")).unwrap();
        assert!(bar_len(peak) > bar_len(low));
    }

    #[test]
    fn test_suffix_rendered() {
        let lines = solar_chart().value_suffix(" kW").render_lines();
        assert!(lines.iter().any(|l| l.contains("kW")));
    }

    #[test]
    fn test_render_is_idempotent() {
        let chart = solar_chart();
        assert_eq!(chart.render_lines(), chart.render_lines());
    }
}
