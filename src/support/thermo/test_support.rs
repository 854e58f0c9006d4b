use std::cell::Cell;

use uom::si::{
    f64::{MolarEnergy, MolarHeatCapacity, Pressure, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    thermodynamic_temperature::kelvin,
};

use super::{EquilibriumState, FlashError, Flasher, VaporFraction};

/// Instrumented flasher with a linear two-phase region.
///
/// The vapor fraction varies linearly with temperature between the bubble
/// point (350 K) and the dew point (450 K), the molar heat capacity is
/// constant, and the molar enthalpy is `cp·T + vf·h_vap`. With a constant
/// heat capacity, the sensible/latent decomposition in the fire-wetted model
/// is exact: the latent heat per unit vaporized is `h_vap` regardless of the
/// interval chosen.
///
/// Saturation temperatures are independent of pressure, which is adequate for
/// exercising the resolver and the energy balance. Every flash increments a
/// call counter so tests can verify memoization.
#[derive(Debug)]
pub(crate) struct LinearFlasher {
    tp_calls: Cell<usize>,
    pq_calls: Cell<usize>,
}

/// Bubble-point temperature, K.
const T_BUBBLE: f64 = 350.0;

/// Dew-point temperature, K.
const T_DEW: f64 = 450.0;

/// Constant bulk molar heat capacity, J/(mol·K).
pub(crate) const CP: f64 = 100.0;

/// Molar heat of vaporization, J/mol.
pub(crate) const H_VAP: f64 = 30_000.0;

impl LinearFlasher {
    pub(crate) fn new() -> Self {
        Self {
            tp_calls: Cell::new(0),
            pq_calls: Cell::new(0),
        }
    }

    pub(crate) fn tp_calls(&self) -> usize {
        self.tp_calls.get()
    }

    pub(crate) fn pq_calls(&self) -> usize {
        self.pq_calls.get()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.tp_calls() + self.pq_calls()
    }

    /// Temperature at which this flasher reports the given vapor fraction.
    pub(crate) fn temperature_at(&self, vapor_fraction: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(T_BUBBLE + vapor_fraction * (T_DEW - T_BUBBLE))
    }

    fn state_at(&self, temperature: ThermodynamicTemperature) -> EquilibriumState {
        let t = temperature.get::<kelvin>();
        let vf = (t - T_BUBBLE) / (T_DEW - T_BUBBLE);
        EquilibriumState::new(
            temperature,
            vf,
            MolarEnergy::new::<joule_per_mole>(CP * t + vf * H_VAP),
            MolarHeatCapacity::new::<joule_per_kelvin_mole>(CP),
        )
    }
}

impl Flasher for LinearFlasher {
    fn flash_tp(
        &self,
        temperature: ThermodynamicTemperature,
        _pressure: Pressure,
        _zs: &[f64],
    ) -> Result<EquilibriumState, FlashError> {
        self.tp_calls.set(self.tp_calls.get() + 1);
        Ok(self.state_at(temperature))
    }

    fn flash_pq(
        &self,
        _pressure: Pressure,
        vapor_fraction: VaporFraction,
        _zs: &[f64],
    ) -> Result<EquilibriumState, FlashError> {
        self.pq_calls.set(self.pq_calls.get() + 1);
        Ok(self.state_at(self.temperature_at(vapor_fraction.into_inner())))
    }
}
