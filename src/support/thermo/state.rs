use uom::si::f64::{MolarEnergy, MolarHeatCapacity, ThermodynamicTemperature};

/// An equilibrium state returned by a [`Flasher`](super::Flasher).
///
/// The snapshot carries the bulk properties the relief models consume.
/// It is immutable: models read from it but never modify it, and the flasher
/// that produced it remains the authority on its consistency.
///
/// Enthalpy and heat capacity are molar quantities because flash calculations
/// work with mole fractions; vaporization rates derived from them are
/// likewise molar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumState {
    /// Equilibrium temperature.
    pub temperature: ThermodynamicTemperature,

    /// Vapor mole fraction.
    ///
    /// Reported exactly as the flasher computed it. A value slightly outside
    /// `[0, 1]` is possible from backend round-off and is preserved rather
    /// than clamped.
    pub vapor_fraction: f64,

    /// Bulk molar enthalpy.
    pub molar_enthalpy: MolarEnergy,

    /// Bulk molar heat capacity at constant pressure.
    pub molar_heat_capacity: MolarHeatCapacity,
}

impl EquilibriumState {
    /// Creates a new equilibrium state snapshot.
    #[must_use]
    pub fn new(
        temperature: ThermodynamicTemperature,
        vapor_fraction: f64,
        molar_enthalpy: MolarEnergy,
        molar_heat_capacity: MolarHeatCapacity,
    ) -> Self {
        Self {
            temperature,
            vapor_fraction,
            molar_enthalpy,
            molar_heat_capacity,
        }
    }
}
