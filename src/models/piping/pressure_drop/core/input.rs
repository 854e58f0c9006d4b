use uom::si::f64::{Length, MassDensity};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::{FlowSpec, PressureDropError};

/// Validated input for a straight-pipe pressure drop calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureDropInput {
    friction_factor: Constrained<f64, NonNegative>,
    length: Length,
    diameter: Constrained<Length, StrictlyPositive>,
    density: Constrained<MassDensity, StrictlyPositive>,
    flow: FlowSpec,
}

impl PressureDropInput {
    /// Creates a validated input.
    ///
    /// # Errors
    ///
    /// Returns a constraint error when the friction factor is negative or
    /// the diameter or density is not strictly positive. The flow
    /// specification itself is checked when the pressure drop is computed.
    pub fn new(
        friction_factor: f64,
        length: Length,
        diameter: Length,
        density: MassDensity,
        flow: FlowSpec,
    ) -> Result<Self, PressureDropError> {
        Ok(Self {
            friction_factor: NonNegative::new(friction_factor)?,
            length,
            diameter: StrictlyPositive::new(diameter)?,
            density: StrictlyPositive::new(density)?,
            flow,
        })
    }

    /// Darcy friction factor.
    #[must_use]
    pub fn friction_factor(&self) -> f64 {
        self.friction_factor.into_inner()
    }

    /// Pipe length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Inner pipe diameter.
    #[must_use]
    pub(super) fn diameter(&self) -> Constrained<Length, StrictlyPositive> {
        self.diameter
    }

    /// Fluid density.
    #[must_use]
    pub(super) fn density(&self) -> Constrained<MassDensity, StrictlyPositive> {
        self.density
    }

    /// The flow specification.
    #[must_use]
    pub fn flow(&self) -> FlowSpec {
        self.flow
    }
}
