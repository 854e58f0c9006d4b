//! API Standard 521 fire-wetted vaporization model.
//!
//! Calculates the rate of vaporization for equipment containing liquid under
//! external fire exposure. The computational core is in the internal [`core`]
//! module; [`FireWetted`] is the thin [`twine_core::Model`] adapter over it.
//!
//! # Method
//!
//! The heat duty absorbed through the wetted surface follows equations (7)
//! and (8) of API Standard 521, 7th Ed., §4.4.13.2.4.2:
//!
//! `Q = C · F · A^0.82`
//!
//! For an air-cooled heat exchanger in liquid-cooling service the wetted-area
//! exponent becomes 1.0, per equations (21) and (22) in §4.4.13.2.8.4 of the
//! same standard. The constant `C` depends on whether adequate drainage and
//! firefighting are present, and `F` is an environment factor (Table 5)
//! crediting fire-proof insulation or earth-covered storage.
//!
//! The standard does not prescribe how the heat of vaporization is obtained.
//! The overall heat of vaporization is not necessarily conservative, so this
//! model evaluates it over a caller-chosen vapor-fraction interval: the
//! enthalpy change between the two equilibrium states is split into a
//! sensible part (average heat capacity times temperature rise) and a latent
//! remainder, and the entire duty is charged against the latent heat per unit
//! vaporized.
//!
//! Use this model for each equipment item individually. Applying it to the
//! total wetted area of several items under-predicts the total duty because
//! of the 0.82 area exponent.

mod core;

pub use core::{
    AREA_EXPONENT_AIR_COOLER, AREA_EXPONENT_GENERAL, DUTY_CONSTANT_ADEQUATE_DRAINAGE,
    DUTY_CONSTANT_INADEQUATE_DRAINAGE, FireWettedError, FireWettedInput, FireWettedResults,
    WettedDuty, wetted_duty,
};

use twine_core::Model;

use crate::support::thermo::{FlashResolver, Flasher, ResolveConfig};

/// Fire-wetted vaporization model for a vessel's liquid contents.
///
/// Pairs a caller-supplied flasher with a [`FlashResolver`] whose cache is
/// reused across solves, so repeated studies at the same relief pressure
/// (e.g., varying wetted area or drainage credit) flash each equilibrium
/// state once.
#[derive(Debug)]
pub struct FireWetted<'a, F> {
    flasher: &'a F,
    resolver: FlashResolver,
}

impl<'a, F: Flasher> FireWetted<'a, F> {
    /// Creates a model with the default resolver configuration.
    #[must_use]
    pub fn new(flasher: &'a F) -> Self {
        Self::with_config(flasher, ResolveConfig::default())
    }

    /// Creates a model with a custom resolver configuration.
    #[must_use]
    pub fn with_config(flasher: &'a F, config: ResolveConfig) -> Self {
        Self {
            flasher,
            resolver: FlashResolver::new(config),
        }
    }

    /// Solves the fire-wetted vaporization case for the given input.
    ///
    /// # Errors
    ///
    /// Returns [`FireWettedError`] if an equilibrium state cannot be resolved
    /// or the flashed vapor-fraction interval collapses.
    pub fn solve(&self, input: &FireWettedInput) -> Result<FireWettedResults, FireWettedError> {
        core::solve(input, self.flasher, &self.resolver)
    }
}

impl<F: Flasher> Model for FireWetted<'_, F> {
    type Input = FireWettedInput;
    type Output = FireWettedResults;
    type Error = FireWettedError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
