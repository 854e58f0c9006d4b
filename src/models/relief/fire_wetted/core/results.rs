//! Results type for the fire-wetted vaporization solve.

use uom::si::f64::{MolarEnergy, MolarHeatCapacity, Power, ThermodynamicTemperature};

use crate::support::units::{DutyPerArea, MolarRate};

/// Results of a fire-wetted vaporization solve.
///
/// Enthalpy quantities are molar and describe the chosen vaporization
/// interval, not the whole inventory: the latent heat per unit vaporized is
/// an apportioned value over that interval, not a pure-component heat of
/// vaporization, since the endpoints need not be pure phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireWettedResults {
    /// Heat duty absorbed through the wetted surface.
    pub duty: Power,

    /// Duty constant applied (21 000 or 34 500 BTU/(hr·ft²)).
    pub duty_constant: DutyPerArea,

    /// Vaporization rate sustained by the duty.
    pub vaporization_rate: MolarRate,

    /// Arithmetic mean of the two endpoint heat capacities.
    ///
    /// A simplification: the heat capacity is not integrated over the
    /// temperature interval.
    pub average_heat_capacity: MolarHeatCapacity,

    /// Temperature of the initial equilibrium state.
    pub initial_temperature: ThermodynamicTemperature,

    /// Temperature of the final equilibrium state.
    pub final_temperature: ThermodynamicTemperature,

    /// Total enthalpy change over the interval, `H(final) - H(initial)`.
    pub total_enthalpy_change: MolarEnergy,

    /// Sensible part of the enthalpy change, `avg_cp · (T_final - T_initial)`.
    pub sensible_enthalpy_change: MolarEnergy,

    /// Latent part of the enthalpy change, total minus sensible.
    ///
    /// Treats the heat-capacity estimate as a faithful proxy for the
    /// non-latent portion; approximate for real mixtures.
    pub latent_enthalpy_change: MolarEnergy,

    /// Latent enthalpy change per unit vaporized over the interval.
    pub latent_heat_per_vaporized: MolarEnergy,
}
