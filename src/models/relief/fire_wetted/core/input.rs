use uom::si::f64::{Area, Pressure};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    thermo::VaporFraction,
};

use super::FireWettedError;

/// Validated input for a fire-wetted vaporization solve.
///
/// Construction checks every invariant that can be checked without flashing,
/// so an invalid case is rejected before any equilibrium work is spent:
/// the wetted area must be strictly positive and the final vapor fraction
/// must exceed the initial one.
///
/// The composition is forwarded to the flasher verbatim; it is not normalized
/// to sum to one. The flasher owns composition validity.
#[derive(Debug, Clone)]
pub struct FireWettedInput {
    pressure: Pressure,
    composition: Vec<f64>,
    initial_vapor_fraction: VaporFraction,
    final_vapor_fraction: VaporFraction,
    wetted_area: Constrained<Area, StrictlyPositive>,
    adequate_drainage: bool,
    environment_factor: Constrained<f64, NonNegative>,
    air_cooler: bool,
}

impl FireWettedInput {
    /// Constructs a validated input.
    ///
    /// The relief pressure, component mole fractions, vapor-fraction interval
    /// over which vaporization is considered, wetted equipment area, and the
    /// adequate-drainage credit are required. The environment factor defaults
    /// to 1.0 (uninsulated equipment) and the equipment is assumed not to be
    /// an air-cooled heat exchanger; see [`Self::with_environment_factor`]
    /// and [`Self::with_air_cooler`].
    ///
    /// # Errors
    ///
    /// Returns [`FireWettedError::VaporFractionOrder`] if the final vapor
    /// fraction does not exceed the initial one, or a constraint error if the
    /// wetted area is not strictly positive.
    pub fn new(
        pressure: Pressure,
        composition: Vec<f64>,
        initial_vapor_fraction: VaporFraction,
        final_vapor_fraction: VaporFraction,
        wetted_area: Area,
        adequate_drainage: bool,
    ) -> Result<Self, FireWettedError> {
        if final_vapor_fraction.into_inner() <= initial_vapor_fraction.into_inner() {
            return Err(FireWettedError::VaporFractionOrder {
                initial: initial_vapor_fraction.into_inner(),
                requested_final: final_vapor_fraction.into_inner(),
            });
        }

        let wetted_area = StrictlyPositive::new(wetted_area)?;

        Ok(Self {
            pressure,
            composition,
            initial_vapor_fraction,
            final_vapor_fraction,
            wetted_area,
            adequate_drainage,
            environment_factor: NonNegative::one(),
            air_cooler: false,
        })
    }

    /// Sets the environment factor (API 521 Table 5).
    ///
    /// Accounts for fire-proof insulation or earth-covered storage.
    #[must_use]
    pub fn with_environment_factor(mut self, factor: Constrained<f64, NonNegative>) -> Self {
        self.environment_factor = factor;
        self
    }

    /// Marks the equipment as an air-cooled heat exchanger in liquid-cooling
    /// service, switching the wetted-area exponent to 1.0.
    #[must_use]
    pub fn with_air_cooler(mut self, air_cooler: bool) -> Self {
        self.air_cooler = air_cooler;
        self
    }

    /// Relief pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Component mole fractions, as supplied.
    #[must_use]
    pub fn composition(&self) -> &[f64] {
        &self.composition
    }

    /// Lower bound of the vaporization interval.
    #[must_use]
    pub fn initial_vapor_fraction(&self) -> VaporFraction {
        self.initial_vapor_fraction
    }

    /// Upper bound of the vaporization interval.
    #[must_use]
    pub fn final_vapor_fraction(&self) -> VaporFraction {
        self.final_vapor_fraction
    }

    /// Wetted area of the equipment item.
    #[must_use]
    pub fn wetted_area(&self) -> Constrained<Area, StrictlyPositive> {
        self.wetted_area
    }

    /// Whether adequate drainage and firefighting are present.
    #[must_use]
    pub fn adequate_drainage(&self) -> bool {
        self.adequate_drainage
    }

    /// Environment factor.
    #[must_use]
    pub fn environment_factor(&self) -> Constrained<f64, NonNegative> {
        self.environment_factor
    }

    /// Whether the equipment is an air-cooled heat exchanger.
    #[must_use]
    pub fn air_cooler(&self) -> bool {
        self.air_cooler
    }
}
