//! Problem formulation for resolving a target vapor fraction.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{EquilibriumState, FlashError, Flasher};

/// Model adapter exposing temperature as the sole input variable.
///
/// Wraps a flasher at fixed pressure and composition so the bisection solver
/// can probe equilibrium states along the temperature axis.
pub(super) struct FlashAtTemperature<'a, F> {
    flasher: &'a F,
    pressure: Pressure,
    zs: &'a [f64],
}

impl<'a, F> FlashAtTemperature<'a, F> {
    pub(super) fn new(flasher: &'a F, pressure: Pressure, zs: &'a [f64]) -> Self {
        Self {
            flasher,
            pressure,
            zs,
        }
    }
}

impl<F: Flasher> Model for FlashAtTemperature<'_, F> {
    type Input = ThermodynamicTemperature;
    type Output = EquilibriumState;
    type Error = FlashError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.flasher.flash_tp(*input, self.pressure, self.zs)
    }
}

/// Equation problem definition for vapor-fraction matching.
///
/// Computes the residual as `achieved_vf - target_vf`.
pub(super) struct VaporFractionProblem {
    target: f64,
}

impl VaporFractionProblem {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for VaporFractionProblem {
    type Input = ThermodynamicTemperature;
    type Output = EquilibriumState;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.vapor_fraction - self.target])
    }
}
