//! Darcy–Weisbach pressure-drop model.
//!
//! Computes the friction pressure drop `Δp = f · ρ · L · v² / (2 D)` for
//! single-phase pipe flow. The flow may be specified as a velocity, a
//! volumetric flow, or a mass flow — exactly one of the three — and is
//! normalized to a velocity through the pipe's circular cross-section before
//! the formula is applied. The computational core is in the internal
//! [`core`] module; [`PressureDrop`] is the thin [`twine_core::Model`]
//! adapter over it.

mod core;

pub use core::{FlowSpec, FlowSpecError, PressureDropError, PressureDropInput};

use twine_core::Model;
use uom::si::f64::Pressure;

/// Darcy–Weisbach pressure-drop model.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressureDrop;

impl PressureDrop {
    /// Solves the pressure drop for the given input.
    ///
    /// # Errors
    ///
    /// Returns [`PressureDropError`] if the flow specification does not name
    /// exactly one flow quantity.
    pub fn solve(input: &PressureDropInput) -> Result<Pressure, PressureDropError> {
        core::solve(input)
    }
}

impl Model for PressureDrop {
    type Input = PressureDropInput;
    type Output = Pressure;
    type Error = PressureDropError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Self::solve(input)
    }
}
