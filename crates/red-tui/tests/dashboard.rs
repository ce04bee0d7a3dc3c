//! Structural assertions over the pure dashboard render.

use red_core::series::{Source, TIME_LABELS, WEATHER};
use red_tui::charts::{AreaChartView, BarChartView, DonutChartView, LineChartView};
use red_tui::dashboard::{Dashboard, PAGE_TITLE, WEATHER_TITLE};

const PANEL_TITLES: [&str; 5] = [
    "Solar Energy",
    "Wind Energy",
    "Hydropower",
    "Geothermal Energy",
    "Weather Forecast",
];

#[test]
fn page_heading_comes_first() {
    let output = Dashboard::render();
    assert!(output.starts_with(PAGE_TITLE));
}

#[test]
fn each_panel_heading_appears_exactly_once() {
    let output = Dashboard::render();
    for title in PANEL_TITLES {
        assert_eq!(output.matches(title).count(), 1, "{title}");
    }
}

#[test]
fn panels_come_in_fixed_order() {
    let output = Dashboard::render();
    let positions: Vec<usize> = PANEL_TITLES
        .iter()
        .map(|t| output.find(t).expect(t))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn every_panel_binds_four_points_with_ordered_time_labels() {
    for panel in Dashboard::panels() {
        let body = panel.body.join("\n");
        let mut last = 0;
        for label in TIME_LABELS {
            let at = body.find(label).unwrap_or_else(|| {
                panic!("{}: missing time label {label}", panel.title)
            });
            assert!(at >= last, "{}: {label} out of order", panel.title);
            last = at;
        }
    }
}

#[test]
fn solar_panel_is_the_bar_chart_of_the_solar_series() {
    let mut expected = BarChartView::new();
    for point in Source::Solar.series() {
        expected = expected.add_bar(point.time, point.energy);
    }
    let panel = &Dashboard::panels()[0];
    assert_eq!(panel.body, expected.render_lines());
    let body = panel.body.join("\n");
    for value in ["20.0", "50.0", "100.0", "60.0"] {
        assert!(body.contains(value), "{value}");
    }
}

#[test]
fn wind_panel_is_the_line_chart_of_the_wind_series() {
    let mut expected = LineChartView::new();
    for point in Source::Wind.series() {
        expected = expected.add_point(point.time, point.energy);
    }
    let panel = &Dashboard::panels()[1];
    assert_eq!(panel.title, "Wind Energy");
    assert_eq!(panel.body, expected.render_lines());
}

#[test]
fn hydro_panel_is_the_donut_chart_of_the_hydro_series() {
    let mut expected = DonutChartView::new();
    for point in Source::Hydro.series() {
        expected = expected.add_slice(point.time, point.energy);
    }
    let panel = &Dashboard::panels()[2];
    assert_eq!(panel.body, expected.render_lines());
}

#[test]
fn geothermal_panel_is_the_area_chart_of_the_geo_series() {
    let values: Vec<f64> = Source::Geothermal.series().iter().map(|p| p.energy).collect();
    let expected = AreaChartView::new()
        .labels(TIME_LABELS)
        .series("energy", values);
    let panel = &Dashboard::panels()[3];
    assert_eq!(panel.body, expected.render_lines());
}

#[test]
fn weather_panel_overlays_temperature_and_humidity() {
    let temperature: Vec<f64> = WEATHER.iter().map(|p| p.temperature).collect();
    let humidity: Vec<f64> = WEATHER.iter().map(|p| p.humidity).collect();
    assert_eq!(temperature, vec![22.0, 18.0, 30.0, 26.0]);
    assert_eq!(humidity, vec![80.0, 90.0, 60.0, 75.0]);

    let expected = AreaChartView::new()
        .labels(TIME_LABELS)
        .series("temperature", temperature)
        .overlay("humidity", humidity);
    let panel = &Dashboard::panels()[4];
    assert_eq!(panel.title, WEATHER_TITLE);
    assert_eq!(panel.body, expected.render_lines());

    let body = panel.body.join("\n");
    assert!(body.contains("temperature"));
    assert!(body.contains("humidity"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    assert_eq!(Dashboard::render(), Dashboard::render());
}
