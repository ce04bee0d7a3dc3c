//! Solar panel power output.
//!
//! `P = η · G · A` with an optional tilt correction
//! `G_adj = G · cos(θ)` for panels off the normal.

use crate::{RedError, RedResult};

use super::{argmax, linspace};

/// Reference irradiance under clear sky, W/m².
pub const CLEAR_SKY_IRRADIANCE: f64 = 1000.0;

/// A photovoltaic panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    /// Surface area, m².
    pub area_m2: f64,
    /// Conversion efficiency, 0-1.
    pub efficiency: f64,
}

impl Panel {
    /// The 1.6 m² / 18% reference panel.
    pub const REFERENCE: Panel = Panel {
        area_m2: 1.6,
        efficiency: 0.18,
    };

    fn validate(&self) -> RedResult<()> {
        if self.area_m2 <= 0.0 {
            return Err(RedError::Validation(format!(
                "panel area {} m² must be positive",
                self.area_m2
            )));
        }
        if !(0.0..=1.0).contains(&self.efficiency) {
            return Err(RedError::Validation(format!(
                "panel efficiency {} outside [0, 1]",
                self.efficiency
            )));
        }
        Ok(())
    }

    /// Power output in watts at the given irradiance.
    pub fn power(&self, irradiance_w_m2: f64) -> RedResult<f64> {
        self.validate()?;
        if irradiance_w_m2 < 0.0 {
            return Err(RedError::Validation(format!(
                "irradiance {irradiance_w_m2} W/m² is negative"
            )));
        }
        Ok(self.efficiency * irradiance_w_m2 * self.area_m2)
    }

    /// Power at the given irradiance with the panel tilted `tilt_deg`
    /// away from the normal.
    pub fn power_at_tilt(&self, irradiance_w_m2: f64, tilt_deg: f64) -> RedResult<f64> {
        if !(0.0..=90.0).contains(&tilt_deg) {
            return Err(RedError::Validation(format!(
                "tilt {tilt_deg}° outside [0°, 90°]"
            )));
        }
        let adjusted = irradiance_w_m2 * tilt_deg.to_radians().cos();
        self.power(adjusted)
    }

    /// Power-output curve over an irradiance sweep: `(G, P)` points.
    pub fn power_curve(
        &self,
        irradiance_from: f64,
        irradiance_to: f64,
        steps: usize,
    ) -> RedResult<Vec<(f64, f64)>> {
        linspace(irradiance_from, irradiance_to, steps)
            .into_iter()
            .map(|g| Ok((g, self.power(g)?)))
            .collect()
    }

    /// Tilt angle maximizing output at the given irradiance, by grid
    /// search over [0°, 90°] in one-degree steps.
    pub fn optimal_tilt(&self, irradiance_w_m2: f64) -> RedResult<f64> {
        let curve: Vec<(f64, f64)> = (0..=90)
            .map(|deg| {
                let deg = deg as f64;
                Ok((deg, self.power_at_tilt(irradiance_w_m2, deg)?))
            })
            .collect::<RedResult<_>>()?;
        argmax(&curve)
            .map(|(deg, _)| deg)
            .ok_or_else(|| RedError::Model("empty tilt sweep".into()))
    }
}
