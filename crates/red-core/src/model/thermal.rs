//! Heat diffusion across a solar panel.
//!
//! One-dimensional explicit finite differences:
//! `T[i] += α·dt/dx² · (T[i-1] − 2·T[i] + T[i+1])`, with fixed (zero)
//! boundary temperatures. The explicit scheme is only stable for
//! `dt < dx² / (2α)`; construction rejects unstable parameters.

use crate::{RedError, RedResult};

/// Parameters for a panel heat-diffusion run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatSim {
    /// Thermal diffusivity, m²/s.
    pub alpha: f64,
    /// Spatial step, m.
    pub dx: f64,
    /// Time step, s.
    pub dt: f64,
    /// Panel length, m.
    pub length: f64,
}

impl HeatSim {
    /// The reference run: α 0.01, dx 0.01, dt 1e-4 over a 1 m panel.
    pub const REFERENCE: HeatSim = HeatSim {
        alpha: 0.01,
        dx: 0.01,
        dt: 1e-4,
        length: 1.0,
    };

    fn validate(&self) -> RedResult<()> {
        if self.alpha <= 0.0 || self.dx <= 0.0 || self.dt <= 0.0 || self.length <= 0.0 {
            return Err(RedError::Validation(
                "diffusivity, steps, and length must all be positive".into(),
            ));
        }
        let stable_dt = self.dx * self.dx / (2.0 * self.alpha);
        if self.dt >= stable_dt {
            return Err(RedError::Model(format!(
                "explicit scheme unstable: dt {} >= dx²/(2α) = {stable_dt}",
                self.dt
            )));
        }
        Ok(())
    }

    /// Number of spatial cells across the panel.
    pub fn cells(&self) -> usize {
        (self.length / self.dx) as usize
    }

    /// Run the diffusion for `duration` seconds from a point heat
    /// source in the middle of the panel, returning the final
    /// temperature profile.
    pub fn run(&self, source_temp: f64, duration: f64) -> RedResult<Vec<f64>> {
        self.validate()?;
        if duration < 0.0 {
            return Err(RedError::Validation("duration is negative".into()));
        }

        let nx = self.cells();
        if nx < 3 {
            return Err(RedError::Model(format!(
                "panel too short for dx {}: {nx} cells",
                self.dx
            )));
        }
        let steps = (duration / self.dt) as usize;
        let factor = self.alpha * self.dt / (self.dx * self.dx);

        let mut temp = vec![0.0; nx];
        temp[nx / 2] = source_temp;

        let mut next = temp.clone();
        for _ in 0..steps {
            for i in 1..nx - 1 {
                next[i] = temp[i] + factor * (temp[i - 1] - 2.0 * temp[i] + temp[i + 1]);
            }
            std::mem::swap(&mut temp, &mut next);
        }
        Ok(temp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_parameters_are_stable() {
        assert!(HeatSim::REFERENCE.run(100.0, 0.01).is_ok());
    }

    #[test]
    fn test_unstable_timestep_rejected() {
        let sim = HeatSim {
            dt: 0.01,
            ..HeatSim::REFERENCE
        };
        let err = sim.run(100.0, 0.01).unwrap_err();
        assert!(err.to_string().contains("unstable"));
    }

    #[test]
    fn test_heat_spreads_from_center() {
        let profile = HeatSim::REFERENCE.run(100.0, 0.05).unwrap();
        let nx = profile.len();
        let center = profile[nx / 2];
        let neighbor = profile[nx / 2 + 5];
        // Diffusion flattens the spike but keeps the center warmest.
        assert!(center < 100.0);
        assert!(center > neighbor);
        assert!(neighbor > 0.0);
    }

    #[test]
    fn test_zero_duration_keeps_initial_profile() {
        let profile = HeatSim::REFERENCE.run(100.0, 0.0).unwrap();
        let nx = profile.len();
        assert_eq!(profile[nx / 2], 100.0);
        assert!(profile.iter().enumerate().all(|(i, t)| i == nx / 2 || *t == 0.0));
    }

    #[test]
    fn test_energy_not_created() {
        let profile = HeatSim::REFERENCE.run(100.0, 0.05).unwrap();
        let total: f64 = profile.iter().sum();
        // Fixed cold boundaries only ever remove heat.
        assert!(total <= 100.0 + 1e-9);
    }
}
