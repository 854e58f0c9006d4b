//! Quantities and operations the relief models need that [`uom`] lacks.
//!
//! Two kinds of extension live here:
//!
//! - [`MolarRate`] and [`DutyPerArea`] type aliases for dimensions uom defines
//!   no named quantity for. Vaporization rates are molar (mol/s) because the
//!   flash layer works with molar enthalpies, and the API 521 duty constants
//!   carry a heat-flux dimension (W/m² in SI).
//! - [`TemperatureDifference`], which subtracts two absolute temperatures
//!   into a [`TemperatureInterval`](uom::si::f64::TemperatureInterval):
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::kelvin};
//! use relief_models::support::units::TemperatureDifference;
//!
//! let dew = ThermodynamicTemperature::new::<kelvin>(450.0);
//! let bubble = ThermodynamicTemperature::new::<kelvin>(350.0);
//! let rise = dew.minus(bubble); // a TemperatureInterval, not an absolute temperature
//! assert_eq!(rise.get::<temperature_interval::kelvin>(), 100.0);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{DutyPerArea, MolarRate};
pub use temperature_difference::TemperatureDifference;
