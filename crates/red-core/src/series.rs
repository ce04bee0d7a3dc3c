//! The constant series rendered by the dashboard.
//!
//! Values are illustrative, baked in at compile time, and never
//! mutated: four samples per source across one day. The dashboard
//! binds each series to exactly one chart kind via [`Source`].

use serde::Serialize;

/// The four sample times shared by every series.
pub const TIME_LABELS: [&str; 4] = ["00:00", "06:00", "12:00", "18:00"];

/// One sample of an energy series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnergyPoint {
    /// HH:MM label of the sample.
    pub time: &'static str,
    /// Output in arbitrary units, 0-100.
    pub energy: f64,
}

/// One sample of the weather series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WeatherPoint {
    pub time: &'static str,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
}

const fn energy(time: &'static str, energy: f64) -> EnergyPoint {
    EnergyPoint { time, energy }
}

pub const SOLAR: [EnergyPoint; 4] = [
    energy("00:00", 20.0),
    energy("06:00", 50.0),
    energy("12:00", 100.0),
    energy("18:00", 60.0),
];

pub const WIND: [EnergyPoint; 4] = [
    energy("00:00", 35.0),
    energy("06:00", 60.0),
    energy("12:00", 85.0),
    energy("18:00", 65.0),
];

pub const HYDRO: [EnergyPoint; 4] = [
    energy("00:00", 50.0),
    energy("06:00", 65.0),
    energy("12:00", 85.0),
    energy("18:00", 70.0),
];

pub const GEOTHERMAL: [EnergyPoint; 4] = [
    energy("00:00", 40.0),
    energy("06:00", 55.0),
    energy("12:00", 75.0),
    energy("18:00", 65.0),
];

pub const WEATHER: [WeatherPoint; 4] = [
    WeatherPoint {
        time: "00:00",
        temperature: 22.0,
        humidity: 80.0,
    },
    WeatherPoint {
        time: "06:00",
        temperature: 18.0,
        humidity: 90.0,
    },
    WeatherPoint {
        time: "12:00",
        temperature: 30.0,
        humidity: 60.0,
    },
    WeatherPoint {
        time: "18:00",
        temperature: 26.0,
        humidity: 75.0,
    },
];

/// Chart kind a panel binds its series to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    Line,
    Donut,
    Area,
    /// Two overlaid filled areas (weather only).
    DualArea,
}

/// An energy source with a fixed series and a fixed chart binding.
///
/// Weather is not a `Source`: its records carry two measurements and
/// its panel is accessed through [`WEATHER`] directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Source {
    Solar,
    Wind,
    Hydro,
    Geothermal,
}

impl Source {
    /// Panel order on the dashboard.
    pub const ALL: [Source; 4] = [Source::Solar, Source::Wind, Source::Hydro, Source::Geothermal];

    /// Panel heading text.
    pub fn title(&self) -> &'static str {
        match self {
            Source::Solar => "Solar Energy",
            Source::Wind => "Wind Energy",
            Source::Hydro => "Hydropower",
            Source::Geothermal => "Geothermal Energy",
        }
    }

    /// The series this panel renders.
    pub fn series(&self) -> &'static [EnergyPoint] {
        match self {
            Source::Solar => &SOLAR,
            Source::Wind => &WIND,
            Source::Hydro => &HYDRO,
            Source::Geothermal => &GEOTHERMAL,
        }
    }

    /// The chart kind this panel renders with.
    pub fn chart_kind(&self) -> ChartKind {
        match self {
            Source::Solar => ChartKind::Bar,
            Source::Wind => ChartKind::Line,
            Source::Hydro => ChartKind::Donut,
            Source::Geothermal => ChartKind::Area,
        }
    }

    /// Largest sample in the series.
    pub fn peak(&self) -> f64 {
        self.series()
            .iter()
            .map(|p| p.energy)
            .fold(f64::MIN, f64::max)
    }

    /// Sum over the series (the donut chart's slice base).
    pub fn total(&self) -> f64 {
        self.series().iter().map(|p| p.energy).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_series_has_four_samples_in_time_order() {
        for source in Source::ALL {
            let series = source.series();
            assert_eq!(series.len(), 4, "{:?}", source);
            for (point, label) in series.iter().zip(TIME_LABELS) {
                assert_eq!(point.time, label);
            }
        }
        for (point, label) in WEATHER.iter().zip(TIME_LABELS) {
            assert_eq!(point.time, label);
        }
    }

    #[test]
    fn test_solar_values() {
        let values: Vec<f64> = SOLAR.iter().map(|p| p.energy).collect();
        assert_eq!(values, vec![20.0, 50.0, 100.0, 60.0]);
        assert_eq!(Source::Solar.peak(), 100.0);
    }

    #[test]
    fn test_wind_values() {
        let values: Vec<f64> = WIND.iter().map(|p| p.energy).collect();
        assert_eq!(values, vec![35.0, 60.0, 85.0, 65.0]);
    }

    #[test]
    fn test_weather_values() {
        let temps: Vec<f64> = WEATHER.iter().map(|p| p.temperature).collect();
        let humidity: Vec<f64> = WEATHER.iter().map(|p| p.humidity).collect();
        assert_eq!(temps, vec![22.0, 18.0, 30.0, 26.0]);
        assert_eq!(humidity, vec![80.0, 90.0, 60.0, 75.0]);
    }

    #[test]
    fn test_chart_bindings() {
        assert_eq!(Source::Solar.chart_kind(), ChartKind::Bar);
        assert_eq!(Source::Wind.chart_kind(), ChartKind::Line);
        assert_eq!(Source::Hydro.chart_kind(), ChartKind::Donut);
        assert_eq!(Source::Geothermal.chart_kind(), ChartKind::Area);
    }

    #[test]
    fn test_hydro_total_for_donut_shares() {
        assert_eq!(Source::Hydro.total(), 270.0);
    }

    #[test]
    fn test_points_serialize_with_field_names() {
        let json = serde_json::to_value(SOLAR[2]).unwrap();
        assert_eq!(json["time"], "12:00");
        assert_eq!(json["energy"], 100.0);
    }
}
