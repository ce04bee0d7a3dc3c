//! Hydropower output from head and flow.
//!
//! `P = η · ρ · g · Q · H`.

use crate::{RedError, RedResult};

use super::{argmax, linspace};

/// Standard gravity, m/s².
pub const GRAVITY: f64 = 9.81;

/// Water density, kg/m³.
pub const WATER_DENSITY: f64 = 1000.0;

/// A hydropower station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Station {
    /// Water head, m.
    pub head_m: f64,
    /// Turbine efficiency, 0-1.
    pub efficiency: f64,
}

impl Station {
    /// The 50 m head / 90% efficiency reference station.
    pub const REFERENCE: Station = Station {
        head_m: 50.0,
        efficiency: 0.9,
    };

    fn validate(&self) -> RedResult<()> {
        if self.head_m <= 0.0 {
            return Err(RedError::Validation(format!(
                "water head {} m must be positive",
                self.head_m
            )));
        }
        if !(0.0..=1.0).contains(&self.efficiency) {
            return Err(RedError::Validation(format!(
                "turbine efficiency {} outside [0, 1]",
                self.efficiency
            )));
        }
        Ok(())
    }

    /// Power output in watts at the given flow rate (m³/s).
    pub fn power(&self, flow_m3_s: f64) -> RedResult<f64> {
        self.validate()?;
        if flow_m3_s < 0.0 {
            return Err(RedError::Validation(format!(
                "flow rate {flow_m3_s} m³/s is negative"
            )));
        }
        Ok(self.efficiency * WATER_DENSITY * GRAVITY * flow_m3_s * self.head_m)
    }

    /// Power curve over a flow sweep: `(Q, P)` points.
    pub fn power_curve(
        &self,
        flow_from: f64,
        flow_to: f64,
        steps: usize,
    ) -> RedResult<Vec<(f64, f64)>> {
        linspace(flow_from, flow_to, steps)
            .into_iter()
            .map(|q| Ok((q, self.power(q)?)))
            .collect()
    }

    /// Flow rate of peak output on the sweep.
    pub fn optimal_flow(&self, flow_from: f64, flow_to: f64, steps: usize) -> RedResult<f64> {
        let curve = self.power_curve(flow_from, flow_to, steps)?;
        argmax(&curve)
            .map(|(q, _)| q)
            .ok_or_else(|| RedError::Model("empty flow sweep".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_station_at_ten_m3_s() {
        // 0.9 * 1000 * 9.81 * 10 * 50
        let p = Station::REFERENCE.power(10.0).unwrap();
        assert!((p - 4_414_500.0).abs() < 1e-6);
    }

    #[test]
    fn test_power_linear_in_flow() {
        let p1 = Station::REFERENCE.power(5.0).unwrap();
        let p2 = Station::REFERENCE.power(10.0).unwrap();
        assert!((p2 - 2.0 * p1).abs() < 1e-6);
    }

    #[test]
    fn test_optimal_flow_is_top_of_sweep() {
        let q = Station::REFERENCE.optimal_flow(1.0, 20.0, 50).unwrap();
        assert!((q - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_flow_rejected() {
        assert!(Station::REFERENCE.power(-1.0).is_err());
    }

    #[test]
    fn test_zero_head_rejected() {
        let station = Station {
            head_m: 0.0,
            efficiency: 0.9,
        };
        assert!(station.power(10.0).is_err());
    }
}
