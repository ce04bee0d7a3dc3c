//! Filled area chart, with an optional second overlaid series.
//!
//! Columns are filled from the baseline up to the monotone-resampled
//! curve. With two series (the weather panel) each keeps its own fill
//! glyph and overlapping cells get a third.

use crate::ui::{EmptyState, THEME};

#[cfg(feature = "fancy-ui")]
use super::{domain_row, label_axis, monotone_samples, value_row};

#[derive(Clone, Debug)]
struct AreaSeries {
    name: String,
    values: Vec<f64>,
}

#[derive(Clone, Debug)]
pub struct AreaChartView {
    pub title: Option<String>,
    pub labels: Vec<String>,
    primary: Option<AreaSeries>,
    secondary: Option<AreaSeries>,
    pub width: usize,
    pub height: usize,
    pub value_suffix: String,
    pub empty: Option<EmptyState>,
}

impl AreaChartView {
    pub fn new() -> Self {
        Self {
            title: None,
            labels: Vec::new(),
            primary: None,
            secondary: None,
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

    pub fn labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(|l| l.into()).collect();
        self
    }

    pub fn series(mut self, name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        self.primary = Some(AreaSeries {
            name: name.into(),
            values: values.into(),
        });
        self
    }

    /// Second series, overlaid on the first with its own fill glyph.
    pub fn overlay(mut self, name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        self.secondary = Some(AreaSeries {
            name: name.into(),
            values: values.into(),
        });
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

    pub fn has_series(&self) -> bool {
        self.primary.is_some()
    }

    #[cfg(feature = "fancy-ui")]
    fn domain(&self) -> (f64, f64) {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for series in [&self.primary, &self.secondary].into_iter().flatten() {
            for value in &series.values {
                min = min.min(*value);
                max = max.max(*value);
            }
        }
        // A filled area reads from the zero baseline.
        (min.min(0.0), max)
    }

    /// Render the chart as text lines.
    #[cfg(feature = "fancy-ui")]
    pub fn render_lines(&self) -> Vec<String> {
        let Some(primary) = &self.primary else {
            if let Some(empty) = &self.empty {
                return empty.render_lines(&THEME);
            }
            return vec!["(empty chart)".to_string()];
        };

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
            lines.push(String::new());
        }

        let (min, max) = self.domain();
        let primary_tops: Vec<usize> = monotone_samples(&primary.values, self.width)
            .into_iter()
            .map(|v| value_row(v, min, max, self.height))
            .collect();
        let secondary_tops: Option<Vec<usize>> = self.secondary.as_ref().map(|s| {
            monotone_samples(&s.values, self.width)
                .into_iter()
                .map(|v| value_row(v, min, max, self.height))
                .collect()
        });

        for row in 0..self.height {
            let mut line = String::new();
            for col in 0..self.width {
                let in_primary = row >= primary_tops[col];
                let in_secondary = secondary_tops
                    .as_ref()
                    .map(|tops| row >= tops[col])
                    .unwrap_or(false);
                line.push_str(match (in_primary, in_secondary) {
                    (true, true) => THEME.area_overlap,
                    (true, false) => THEME.area_fill,
                    (false, true) => THEME.area_fill_alt,
                    (false, false) => {
                        if row % 2 == 1 {
                            THEME.grid
                        } else {
                            " "
                        }
                    }
                });
            }
            lines.push(line);
        }

        lines.push(label_axis(&self.labels, self.width));
        lines.push(domain_row(min, max, &self.value_suffix));

        if let Some(secondary) = &self.secondary {
            lines.push(format!(
                "{} {}  {} {}  {} both",
                THEME.area_fill,
                primary.name,
                THEME.area_fill_alt,
                secondary.name,
                THEME.area_overlap
            ));
        }
        lines
    }

    /// Plain-text fallback for minimal builds.
    #[cfg(not(feature = "fancy-ui"))]
    pub fn render_lines(&self) -> Vec<String> {
        let Some(primary) = &self.primary else {
            if let Some(empty) = &self.empty {
                return empty.render_lines(&THEME);
            }
            return vec!["(empty chart)".to_string()];
        };

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        for (idx, label) in self.labels.iter().enumerate() {
            let mut line = format!("{label}:");
            if let Some(value) = primary.values.get(idx) {
                line.push_str(&format!(" {} {value:.1}{}", primary.name, self.value_suffix));
            }
            if let Some(secondary) = &self.secondary {
                if let Some(value) = secondary.values.get(idx) {
                    line.push_str(&format!(
                        " {} {value:.1}{}",
                        secondary.name, self.value_suffix
                    ));
                }
            }
            lines.push(line);
        }
        lines
    }
}

impl Default for AreaChartView {
    fn default() -> Self {
        Self::new()
    }
}
