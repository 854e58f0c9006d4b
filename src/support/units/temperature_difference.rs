use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures into a temperature interval.
///
/// uom keeps [`ThermodynamicTemperature`] and [`TemperatureInterval`] as
/// separate quantities and does not provide the subtraction between them
/// (see [uom#380](https://github.com/iliekturtles/uom/issues/380)), but the
/// fire-wetted energy balance needs exactly that: the sensible enthalpy term
/// is a heat capacity times the temperature rise between the two resolved
/// equilibrium states. This trait supplies the missing operation.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
