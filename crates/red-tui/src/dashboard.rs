//! The five-panel dashboard as a pure render.
//!
//! Datasets are closed over, not passed in: the view is a total
//! function of the constants in `red-core`, so two renders with no
//! external change are byte-identical.

use red_core::series::{ChartKind, Source, TIME_LABELS, WEATHER};

use crate::charts::{AreaChartView, BarChartView, DonutChartView, LineChartView};
use crate::ui::{Panel, PanelGrid};

/// Page heading above the grid.
pub const PAGE_TITLE: &str = "Renewable Energy Dashboard";

/// Heading of the weather panel.
pub const WEATHER_TITLE: &str = "Weather Forecast";

pub struct Dashboard;

impl Dashboard {
    /// The five panels in fixed order: solar, wind, hydro,
    /// geothermal, weather.
    pub fn panels() -> Vec<Panel> {
        let mut panels: Vec<Panel> = Source::ALL
            .iter()
            .map(|source| {
                Panel::new(source.title()).body(Self::chart_lines(*source))
            })
            .collect();
        panels.push(Panel::new(WEATHER_TITLE).body(Self::weather_lines()));
        panels
    }

    fn chart_lines(source: Source) -> Vec<String> {
        let series = source.series();
        match source.chart_kind() {
            ChartKind::Bar => {
                let mut chart = BarChartView::new();
                for point in series {
                    chart = chart.add_bar(point.time, point.energy);
                }
                chart.render_lines()
            }
            ChartKind::Line => {
                let mut chart = LineChartView::new();
                for point in series {
                    chart = chart.add_point(point.time, point.energy);
                }
                chart.render_lines()
            }
            ChartKind::Donut => {
                let mut chart = DonutChartView::new();
                for point in series {
                    chart = chart.add_slice(point.time, point.energy);
                }
                chart.render_lines()
            }
            ChartKind::Area | ChartKind::DualArea => {
                let values: Vec<f64> = series.iter().map(|p| p.energy).collect();
                AreaChartView::new()
                    .labels(TIME_LABELS)
                    .series("energy", values)
                    .render_lines()
            }
        }
    }

    fn weather_lines() -> Vec<String> {
        let temperature: Vec<f64> = WEATHER.iter().map(|p| p.temperature).collect();
        let humidity: Vec<f64> = WEATHER.iter().map(|p| p.humidity).collect();
        AreaChartView::new()
            .labels(TIME_LABELS)
            .series("temperature", temperature)
            .overlay("humidity", humidity)
            .render_lines()
    }

    /// Render the whole dashboard: page heading, then the panel grid.
    pub fn render() -> String {
        let mut grid = PanelGrid::new(PAGE_TITLE);
        for panel in Self::panels() {
            grid = grid.with_panel(panel);
        }
        grid.render()
    }
}
