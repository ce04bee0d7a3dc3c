//! Interactive terminal front end.
//!
//! The live view mirrors the pure [`Dashboard`](crate::dashboard::Dashboard)
//! panels with ratatui widgets and adds a time cursor: arrow keys move
//! the selection and the tooltip strip shows the exact values of every
//! series at the selected time.

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode};
use ratatui::backend::Backend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Span, Spans};
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, Gauge, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use red_core::series::{Source, TIME_LABELS, WEATHER};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::dashboard::{PAGE_TITLE, WEATHER_TITLE};
use crate::logging::log_key_action;

const LOG_CAPACITY: usize = 5;

pub struct App {
    /// Index into [`TIME_LABELS`]; the tooltip reads values here.
    selected: usize,
    logs: VecDeque<String>,
    refresh: Duration,
}

/// Event seam so the loop can be driven by tests.
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> crossterm::Result<bool>;
    fn read(&mut self) -> crossterm::Result<Event>;
}

pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn poll(&mut self, timeout: Duration) -> crossterm::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> crossterm::Result<Event> {
        event::read()
    }
}

impl App {
    pub fn new() -> Self {
        let mut logs = VecDeque::with_capacity(LOG_CAPACITY);
        logs.push_back("red-tui ready: q quits, arrows move the time cursor".to_string());
        Self {
            selected: 0,
            logs,
            refresh: Duration::from_secs(1),
        }
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh = interval;
        self
    }

    pub fn selected_time(&self) -> &'static str {
        TIME_LABELS[self.selected]
    }

    fn next_time(&mut self) {
        if self.selected + 1 < TIME_LABELS.len() {
            self.selected += 1;
            self.push_log(&format!("Time cursor at {}", self.selected_time()));
        }
    }

    fn previous_time(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.push_log(&format!("Time cursor at {}", self.selected_time()));
        }
    }

    /// Exact values of every series at the selected time.
    pub fn tooltip_line(&self) -> String {
        let idx = self.selected;
        let weather = WEATHER[idx];
        let energy: Vec<String> = Source::ALL
            .iter()
            .map(|s| format!("{} {:.0}", s.title(), s.series()[idx].energy))
            .collect();
        format!(
            "{} | {} | temperature {:.0}°C | humidity {:.0}%",
            TIME_LABELS[idx],
            energy.join(" | "),
            weather.temperature,
            weather.humidity
        )
    }

    fn tick(&mut self) {
        let timestamp = Local::now().format("%H:%M:%S");
        let line = format!("{timestamp} | cursor {}", self.selected_time());
        self.push_log(&line);
    }

    fn push_log(&mut self, entry: &str) {
        if self.logs.len() == LOG_CAPACITY {
            self.logs.pop_front();
        }
        self.logs.push_back(entry.to_string());
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

pub fn run_tui<B, I>(terminal: &mut Terminal<B>, event_source: &mut I, app: &mut App) -> Result<()>
where
    B: Backend,
    I: EventSource,
{
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| draw_ui(f, app))?;
        let timeout = app
            .refresh
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        if event_source.poll(timeout)? {
            if let Event::Key(key) = event_source.read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        log_key_action('q', "quit");
                        break;
                    }
                    KeyCode::Right | KeyCode::Down => {
                        log_key_action('>', "next time");
                        app.next_time();
                    }
                    KeyCode::Left | KeyCode::Up => {
                        log_key_action('<', "previous time");
                        app.previous_time();
                    }
                    KeyCode::Char('l') => {
                        log_key_action('l', "manual log entry");
                        app.push_log("Manual refresh triggered.");
                    }
                    _ => {}
                }
            }
        }
        if last_tick.elapsed() >= app.refresh {
            app.tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn draw_ui<B: Backend>(f: &mut Frame<B>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(16),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(f.size());

    render_header(f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[0]);
    render_solar_bars(f, left[0]);
    render_wind_line(f, left[1], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(50),
            Constraint::Min(6),
        ])
        .split(body[1]);
    render_hydro_gauges(f, right[0], app);
    render_geo_area(f, right[1], app);
    render_weather_areas(f, right[2], app);

    render_tooltip(f, chunks[2], app);
    render_logs(f, chunks[3], app);
}

fn render_header<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let header = Paragraph::new(Spans::from(vec![Span::styled(
        PAGE_TITLE,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_solar_bars<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let bars: Vec<(&str, u64)> = Source::Solar
        .series()
        .iter()
        .map(|p| (p.time, p.energy as u64))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Source::Solar.title()),
        )
        .data(&bars)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Yellow))
        .value_style(Style::default().fg(Color::Black).bg(Color::Yellow));
    f.render_widget(chart, area);
}

fn time_axis_labels(app: &App) -> Vec<Span<'static>> {
    TIME_LABELS
        .iter()
        .map(|label| {
            if *label == app.selected_time() {
                Span::styled(
                    *label,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(*label)
            }
        })
        .collect()
}

fn render_wind_line<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let points: Vec<(f64, f64)> = Source::Wind
        .series()
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.energy))
        .collect();
    let chart = Chart::new(vec![Dataset::default()
        .name("energy")
        .marker(Marker::Braille)
        .style(Style::default().fg(Color::LightBlue))
        .data(&points)])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Source::Wind.title()),
    )
    .x_axis(
        Axis::default()
            .bounds([0.0, 3.0])
            .labels(time_axis_labels(app)),
    )
    .y_axis(
        Axis::default()
            .bounds([0.0, 100.0])
            .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
    );
    f.render_widget(chart, area);
}

fn render_hydro_gauges<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let series = Source::Hydro.series();
    let total = Source::Hydro.total();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (point, slot) in series.iter().zip(slots.iter()) {
        let share = point.energy / total;
        let style = if point.time == app.selected_time() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(point.time))
            .gauge_style(style)
            .label(Span::raw(format!("{:.1}%", share * 100.0)))
            .ratio(share);
        f.render_widget(gauge, *slot);
    }
}

fn render_geo_area<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let points: Vec<(f64, f64)> = Source::Geothermal
        .series()
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.energy))
        .collect();
    let chart = Chart::new(vec![Dataset::default()
        .name("energy")
        .marker(Marker::Braille)
        .style(Style::default().fg(Color::Magenta))
        .data(&points)])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Source::Geothermal.title()),
    )
    .x_axis(
        Axis::default()
            .bounds([0.0, 3.0])
            .labels(time_axis_labels(app)),
    )
    .y_axis(
        Axis::default()
            .bounds([0.0, 100.0])
            .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
    );
    f.render_widget(chart, area);
}

fn render_weather_areas<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let temperature: Vec<(f64, f64)> = WEATHER
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.temperature))
        .collect();
    let humidity: Vec<(f64, f64)> = WEATHER
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.humidity))
        .collect();
    let chart = Chart::new(vec![
        Dataset::default()
            .name("temperature")
            .marker(Marker::Braille)
            .style(Style::default().fg(Color::Yellow))
            .data(&temperature),
        Dataset::default()
            .name("humidity")
            .marker(Marker::Braille)
            .style(Style::default().fg(Color::Cyan))
            .data(&humidity),
    ])
    .block(Block::default().borders(Borders::ALL).title(WEATHER_TITLE))
    .x_axis(
        Axis::default()
            .bounds([0.0, 3.0])
            .labels(time_axis_labels(app)),
    )
    .y_axis(
        Axis::default()
            .bounds([0.0, 100.0])
            .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
    );
    f.render_widget(chart, area);
}

fn render_tooltip<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let tooltip = Paragraph::new(app.tooltip_line())
        .block(Block::default().borders(Borders::ALL).title("Values"));
    f.render_widget(tooltip, area);
}

fn render_logs<B: Backend>(f: &mut Frame<B>, area: Rect, app: &App) {
    let text: Vec<Spans> = app.logs.iter().map(|line| Spans::from(line.clone())).collect();
    let logs = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Logs"))
        .wrap(Wrap { trim: true });
    f.render_widget(logs, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_at_midnight() {
        let app = App::new();
        assert_eq!(app.selected_time(), "00:00");
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        let mut app = App::new();
        app.previous_time();
        assert_eq!(app.selected_time(), "00:00");
        for _ in 0..10 {
            app.next_time();
        }
        assert_eq!(app.selected_time(), "18:00");
    }

    #[test]
    fn test_tooltip_shows_exact_values_at_noon() {
        let mut app = App::new();
        app.next_time();
        app.next_time();
        let tooltip = app.tooltip_line();
        assert!(tooltip.starts_with("12:00"));
        assert!(tooltip.contains("Solar Energy 100"));
        assert!(tooltip.contains("Wind Energy 85"));
        assert!(tooltip.contains("temperature 30"));
        assert!(tooltip.contains("humidity 60"));
    }

    #[test]
    fn test_log_ring_is_bounded() {
        let mut app = App::new();
        for i in 0..20 {
            app.push_log(&format!("entry {i}"));
        }
        assert_eq!(app.logs.len(), LOG_CAPACITY);
        assert!(app.logs.back().unwrap().contains("entry 19"));
    }
}
