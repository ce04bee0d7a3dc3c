//! Donut chart: per-slice shares of the series total.
//!
//! Each sample becomes one slice, labeled with its time and drawn
//! with the next glyph of the four-glyph palette. A composition strip
//! shows every slice's share of the ring at a glance.

use crate::ui::{EmptyState, THEME};

#[derive(Clone, Debug)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug)]
pub struct DonutChartView {
    pub title: Option<String>,
    pub slices: Vec<Slice>,
    pub ring_width: usize,
    pub value_suffix: String,
    pub empty: Option<EmptyState>,
}

impl DonutChartView {
    pub fn new() -> Self {
        Self {
            title: None,
            slices: Vec::new(),
            ring_width: super::CHART_WIDTH,
            value_suffix: String::new(),
            empty: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_slice(mut self, label: impl Into<String>, value: f64) -> Self {
        self.slices.push(Slice {
            label: label.into(),
            value,
        });
        self
    }

    pub fn ring_width(mut self, width: usize) -> Self {
        self.ring_width = width.max(4);
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

    pub fn has_slices(&self) -> bool {
        !self.slices.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Palette glyph for slice `index`, cycling every four slices.
    fn glyph(index: usize) -> &'static str {
        THEME.palette[index % THEME.palette.len()]
    }

    /// Render the chart as text lines.
    #[cfg(feature = "fancy-ui")]
    pub fn render_lines(&self) -> Vec<String> {
        if self.slices.is_empty() {
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

        let total = self.total().max(f64::MIN_POSITIVE);
        let max_label_len = self.slices.iter().map(|s| s.label.len()).max().unwrap_or(0);

        // The ring, unrolled: one glyph run per slice, proportional
        // to its share.
        let mut strip = String::new();
        let mut used = 0;
        for (idx, slice) in self.slices.iter().enumerate() {
            let cells = if idx == self.slices.len() - 1 {
                self.ring_width.saturating_sub(used)
            } else {
                ((slice.value / total) * self.ring_width as f64).round() as usize
            };
            strip.push_str(&Self::glyph(idx).repeat(cells));
            used += cells;
        }
        lines.push(strip);
        lines.push(String::new());

        for (idx, slice) in self.slices.iter().enumerate() {
            let share = slice.value / total * 100.0;
            let label_pad = " ".repeat(max_label_len.saturating_sub(slice.label.len()));
            lines.push(format!(
                "{} {}{} {:.1}{} ({share:.1}%)",
                Self::glyph(idx),
                slice.label,
                label_pad,
                slice.value,
                self.value_suffix
            ));
        }

        lines.push(String::new());
        lines.push(format!("total {:.1}{}", self.total(), self.value_suffix));
        lines
    }

    /// Plain-text fallback for minimal builds.
    #[cfg(not(feature = "fancy-ui"))]
    pub fn render_lines(&self) -> Vec<String> {
        if self.slices.is_empty() {
            if let Some(empty) = &self.empty {
                return empty.render_lines(&THEME);
            }
            return vec!["(empty chart)".to_string()];
        }

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        let total = self.total().max(f64::MIN_POSITIVE);
        for slice in &self.slices {
            lines.push(format!(
                "{}: {:.1}{} ({:.1}%)",
                slice.label,
                slice.value,
                self.value_suffix,
                slice.value / total * 100.0
            ));
        }
        lines.push(format!("total {:.1}{}", self.total(), self.value_suffix));
        lines
    }
}

impl Default for DonutChartView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydro_chart() -> DonutChartView {
        DonutChartView::new()
            .add_slice("00:00", 50.0)
            .add_slice("06:00", 65.0)
            .add_slice("12:00", 85.0)
            .add_slice("18:00", 70.0)
    }

    #[test]
    fn test_empty_chart_renders_placeholder() {
        let lines = DonutChartView::new().render_lines();
        assert!(!lines.is_empty());
    }

    #[test]
    fn test_every_slice_labeled_with_time() {
        let lines = hydro_chart().render_lines();
        for label in ["00:00", "06:00", "12:00", "18:00"] {
            assert!(lines.iter().any(|l| l.contains(label)), "{label}");
        }
    }

    #[test]
    fn test_shares_sum_to_total() {
        let chart = hydro_chart();
        assert_eq!(chart.total(), 270.0);
        let lines = chart.render_lines();
        assert!(lines.iter().any(|l| l.contains("270.0")));
    }

    #[cfg(feature = "fancy-ui")]
    #[test]
    fn test_ring_strip_spans_full_width() {
        let chart = hydro_chart().ring_width(40);
        let lines = chart.render_lines();
        let strip = &lines[0];
        assert_eq!(strip.chars().count(), 40);
    }

    #[cfg(feature = "fancy-ui")]
    #[test]
    fn test_palette_cycles_beyond_four_slices() {
        let chart = hydro_chart().add_slice("24:00", 10.0);
        let lines = chart.render_lines();
        // Fifth slice reuses the first palette glyph.
        let first = lines.iter().find(|l| l.contains("00:00")).unwrap();
        let fifth = lines.iter().find(|l| l.contains("24:00")).unwrap();
        assert_eq!(first.chars().next(), fifth.chars().next());
    }

    #[test]
    fn test_largest_slice_has_largest_share() {
        let lines = hydro_chart().render_lines();
        let noon = lines.iter().find(|l| l.contains("12:00")).unwrap();
        assert!(noon.contains("31.5%"));
    }
}
