//! # red-tui: Renewable Energy Dashboard, terminal edition
//!
//! Renders the five fixed series from `red-core` as chart panels, two
//! ways:
//!
//! - [`dashboard::Dashboard`] — a pure text render: page heading plus
//!   a grid of five bordered panels (bar, line, donut, area, dual
//!   area). Total, side-effect free, byte-identical across calls.
//! - [`app::App`] — the live crossterm/ratatui view with a time
//!   cursor and a tooltip strip showing exact values.
//!
//! The chart views themselves live in [`charts`] and follow one
//! builder shape: construct, add data, `render_lines()`.

pub mod app;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod ui;

pub use app::{run_tui, App, CrosstermEventSource, EventSource};
pub use charts::{AreaChartView, BarChartView, DonutChartView, LineChartView};
pub use config::AppConfig;
pub use dashboard::{Dashboard, PAGE_TITLE};
pub use ui::{EmptyState, Panel, PanelGrid, Theme, THEME};
