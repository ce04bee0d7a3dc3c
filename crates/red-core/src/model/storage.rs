//! Battery storage and least-cost dispatch.
//!
//! Covers the round-trip efficiency of a charge/discharge cycle, a
//! greedy 24-hour dispatch against a demand profile, and the
//! closed-form least-cost split between solar, wind, and storage.

use crate::{RedError, RedResult};

/// Hours simulated by [`Battery::simulate_day`].
pub const HOURS_PER_DAY: usize = 24;

/// A battery storage system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Battery {
    /// Usable capacity, kWh.
    pub capacity_kwh: f64,
    /// Charging efficiency, 0-1.
    pub charging_efficiency: f64,
    /// Discharging efficiency, 0-1.
    pub discharging_efficiency: f64,
    /// Maximum charge rate, kW.
    pub charge_power_kw: f64,
    /// Maximum discharge rate, kW.
    pub discharge_power_kw: f64,
}

impl Battery {
    /// The 10 kWh reference battery (90% in, 85% out).
    pub const REFERENCE: Battery = Battery {
        capacity_kwh: 10.0,
        charging_efficiency: 0.9,
        discharging_efficiency: 0.85,
        charge_power_kw: 3.0,
        discharge_power_kw: 2.5,
    };

    fn validate(&self) -> RedResult<()> {
        if self.capacity_kwh <= 0.0 {
            return Err(RedError::Validation(format!(
                "battery capacity {} kWh must be positive",
                self.capacity_kwh
            )));
        }
        for (name, eta) in [
            ("charging", self.charging_efficiency),
            ("discharging", self.discharging_efficiency),
        ] {
            if !(0.0..=1.0).contains(&eta) {
                return Err(RedError::Validation(format!(
                    "{name} efficiency {eta} outside [0, 1]"
                )));
            }
        }
        if self.charge_power_kw <= 0.0 || self.discharge_power_kw <= 0.0 {
            return Err(RedError::Validation(
                "charge and discharge power must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Fraction of stored energy recovered over a full cycle.
    pub fn round_trip_efficiency(&self) -> f64 {
        self.charging_efficiency * self.discharging_efficiency
    }

    /// Greedy hour-by-hour dispatch: renewables serve demand first,
    /// surplus charges the battery, deficit discharges it, and the
    /// grid covers whatever remains.
    pub fn simulate_day(
        &self,
        demand_kw: &[f64; HOURS_PER_DAY],
        solar_kw: &[f64; HOURS_PER_DAY],
        wind_kw: &[f64; HOURS_PER_DAY],
        initial_soc: f64,
        grid_price_per_kwh: f64,
    ) -> RedResult<DaySimulation> {
        self.validate()?;
        if !(0.0..=1.0).contains(&initial_soc) {
            return Err(RedError::Validation(format!(
                "initial state of charge {initial_soc} outside [0, 1]"
            )));
        }
        if grid_price_per_kwh < 0.0 {
            return Err(RedError::Validation("grid price is negative".into()));
        }

        let mut stored_kwh = initial_soc * self.capacity_kwh;
        let mut soc = Vec::with_capacity(HOURS_PER_DAY);
        let mut grid_import_kw = Vec::with_capacity(HOURS_PER_DAY);
        let mut renewable_used_kwh = 0.0;

        for hour in 0..HOURS_PER_DAY {
            let renewable = solar_kw[hour] + wind_kw[hour];
            let balance = renewable - demand_kw[hour];

            if balance >= 0.0 {
                renewable_used_kwh += demand_kw[hour];
                // Surplus charges the battery, capped by rate and headroom.
                let headroom = self.capacity_kwh - stored_kwh;
                let charge = balance
                    .min(self.charge_power_kw)
                    .min(headroom / self.charging_efficiency.max(f64::MIN_POSITIVE));
                stored_kwh += charge * self.charging_efficiency;
                grid_import_kw.push(0.0);
            } else {
                renewable_used_kwh += renewable;
                let mut deficit = -balance;
                // Discharge first, capped by rate and stored energy.
                let discharge = deficit
                    .min(self.discharge_power_kw)
                    .min(stored_kwh * self.discharging_efficiency);
                stored_kwh -= discharge / self.discharging_efficiency.max(f64::MIN_POSITIVE);
                deficit -= discharge;
                grid_import_kw.push(deficit);
            }
            soc.push(stored_kwh / self.capacity_kwh);
        }

        let grid_import_kwh: f64 = grid_import_kw.iter().sum();
        Ok(DaySimulation {
            soc,
            grid_import_kw,
            grid_cost: grid_import_kwh * grid_price_per_kwh,
            renewable_used_kwh,
        })
    }
}

/// Result of a 24-hour dispatch run.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySimulation {
    /// State of charge at the end of each hour, 0-1.
    pub soc: Vec<f64>,
    /// Grid import per hour, kW.
    pub grid_import_kw: Vec<f64>,
    /// Total cost of grid imports.
    pub grid_cost: f64,
    /// Energy served directly from renewables, kWh.
    pub renewable_used_kwh: f64,
}

/// Per-unit costs for the three supply options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceCosts {
    pub solar: f64,
    pub wind: f64,
    pub storage: f64,
}

/// Least-cost allocation of `S + W − B = demand` with all three
/// non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DispatchPlan {
    pub solar: f64,
    pub wind: f64,
    pub battery: f64,
    pub cost: f64,
}

/// Solve the least-cost source split for a fixed demand.
///
/// Storage appears on the demand side of the balance, so any positive
/// allocation both raises cost and raises the generation that must be
/// covered; its optimum is the lower bound. The remaining problem is a
/// two-way split won entirely by the cheaper source.
pub fn least_cost_split(costs: SourceCosts, demand: f64) -> RedResult<DispatchPlan> {
    if demand < 0.0 {
        return Err(RedError::Validation(format!("demand {demand} is negative")));
    }
    for (name, cost) in [
        ("solar", costs.solar),
        ("wind", costs.wind),
        ("storage", costs.storage),
    ] {
        if cost < 0.0 {
            return Err(RedError::Validation(format!(
                "{name} cost {cost} is negative"
            )));
        }
    }

    let (solar, wind) = if costs.solar <= costs.wind {
        (demand, 0.0)
    } else {
        (0.0, demand)
    };
    Ok(DispatchPlan {
        solar,
        wind,
        battery: 0.0,
        cost: solar * costs.solar + wind * costs.wind,
    })
}
