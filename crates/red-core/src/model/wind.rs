//! Wind turbine power output.
//!
//! `P = ½ · ρ · A · v³ · Cp`, with `Cp` bounded by the Betz limit.

use crate::{RedError, RedResult};

use super::{argmax, linspace};

/// Air density at sea level, kg/m³.
pub const AIR_DENSITY: f64 = 1.225;

/// Betz limit: no turbine extracts more than 16/27 of the wind's
/// kinetic energy.
pub const BETZ_LIMIT: f64 = 16.0 / 27.0;

/// A horizontal-axis wind turbine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turbine {
    /// Swept area, m².
    pub swept_area_m2: f64,
    /// Power coefficient, 0 < Cp ≤ Betz limit.
    pub power_coefficient: f64,
}

impl Turbine {
    /// The 100 m² / Cp 0.4 reference turbine.
    pub const REFERENCE: Turbine = Turbine {
        swept_area_m2: 100.0,
        power_coefficient: 0.4,
    };

    /// Turbine from blade radius: `A = π·R²`.
    pub fn from_blade_radius(radius_m: f64, power_coefficient: f64) -> RedResult<Turbine> {
        if radius_m <= 0.0 {
            return Err(RedError::Validation(format!(
                "blade radius {radius_m} m must be positive"
            )));
        }
        let turbine = Turbine {
            swept_area_m2: std::f64::consts::PI * radius_m * radius_m,
            power_coefficient,
        };
        turbine.validate()?;
        Ok(turbine)
    }

    fn validate(&self) -> RedResult<()> {
        if self.swept_area_m2 <= 0.0 {
            return Err(RedError::Validation(format!(
                "swept area {} m² must be positive",
                self.swept_area_m2
            )));
        }
        if self.power_coefficient <= 0.0 || self.power_coefficient > BETZ_LIMIT {
            return Err(RedError::Validation(format!(
                "power coefficient {} outside (0, {BETZ_LIMIT:.3}]",
                self.power_coefficient
            )));
        }
        Ok(())
    }

    /// Raw kinetic power in the wind through the swept area, watts.
    pub fn wind_power(&self, wind_speed_m_s: f64) -> RedResult<f64> {
        self.validate()?;
        if wind_speed_m_s < 0.0 {
            return Err(RedError::Validation(format!(
                "wind speed {wind_speed_m_s} m/s is negative"
            )));
        }
        Ok(0.5 * AIR_DENSITY * self.swept_area_m2 * wind_speed_m_s.powi(3))
    }

    /// Electrical power output at the given wind speed, watts.
    pub fn power(&self, wind_speed_m_s: f64) -> RedResult<f64> {
        Ok(self.wind_power(wind_speed_m_s)? * self.power_coefficient)
    }

    /// Power curve over a wind-speed sweep: `(v, P)` points.
    pub fn power_curve(
        &self,
        speed_from: f64,
        speed_to: f64,
        steps: usize,
    ) -> RedResult<Vec<(f64, f64)>> {
        linspace(speed_from, speed_to, steps)
            .into_iter()
            .map(|v| Ok((v, self.power(v)?)))
            .collect()
    }

    /// Wind speed of peak output on the sweep. For the cubic law this
    /// is the top of the range, but the sweep keeps the shape general.
    pub fn optimal_speed(&self, speed_from: f64, speed_to: f64, steps: usize) -> RedResult<f64> {
        let curve = self.power_curve(speed_from, speed_to, steps)?;
        argmax(&curve)
            .map(|(v, _)| v)
            .ok_or_else(|| RedError::Model("empty speed sweep".into()))
    }
}
