//! # red-core: Renewable Energy Dashboard Core
//!
//! Provides the fixed datasets the dashboard renders and the physical
//! models behind them.
//!
//! ## Layout
//!
//! - [`series`] — the five constant series (solar, wind, hydro,
//!   geothermal, weather) and the panel-to-chart mapping. These are
//!   literal data: created at load, immutable, never validated.
//! - [`model`] — power-output formulas and small simulations (solar
//!   panel power, wind turbine power curves, hydropower, battery
//!   dispatch, panel heat diffusion). Model functions validate their
//!   physical parameters and return [`RedResult`].
//! - [`error`] — the unified [`RedError`] type.
//!
//! ## Quick start
//!
//! ```rust
//! use red_core::series::{Source, WEATHER};
//!
//! for source in Source::ALL {
//!     let series = source.series();
//!     assert_eq!(series.len(), 4);
//!     println!("{}: peak {}", source.title(), source.peak());
//! }
//! assert_eq!(WEATHER[0].humidity, 80.0);
//! ```

pub mod error;
pub mod model;
pub mod series;

pub use error::{RedError, RedResult};
pub use series::{ChartKind, EnergyPoint, Source, WeatherPoint, TIME_LABELS, WEATHER};
