use std::f64::consts::PI;

use uom::si::f64::{Area, Length, MassDensity, MassRate, Velocity, VolumeRate};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::FlowSpecError;

/// A flow specification: exactly one of velocity, volumetric flow, or mass flow.
///
/// The fields are public options so a specification can be assembled
/// field-by-field (e.g., from optional user input); the exactly-one-of-three
/// rule is enforced when the specification is resolved, with distinct errors
/// for an empty and an over-filled specification.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowSpec {
    /// Mean flow velocity.
    pub velocity: Option<Velocity>,

    /// Volumetric flow rate.
    pub volumetric_flow: Option<VolumeRate>,

    /// Mass flow rate.
    pub mass_flow: Option<MassRate>,
}

impl FlowSpec {
    /// A specification giving the mean flow velocity directly.
    #[must_use]
    pub fn from_velocity(velocity: Velocity) -> Self {
        Self {
            velocity: Some(velocity),
            ..Self::default()
        }
    }

    /// A specification giving the volumetric flow rate.
    #[must_use]
    pub fn from_volumetric_flow(volumetric_flow: VolumeRate) -> Self {
        Self {
            volumetric_flow: Some(volumetric_flow),
            ..Self::default()
        }
    }

    /// A specification giving the mass flow rate.
    #[must_use]
    pub fn from_mass_flow(mass_flow: MassRate) -> Self {
        Self {
            mass_flow: Some(mass_flow),
            ..Self::default()
        }
    }

    /// Resolves this specification to a velocity through a circular pipe.
    ///
    /// A volumetric flow is divided by the flow area `π D² / 4`; a mass flow
    /// is first converted to a volumetric flow with the fluid density; a
    /// velocity passes through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FlowSpecError::Underspecified`] when no flow quantity is
    /// given and [`FlowSpecError::Overspecified`] when more than one is.
    pub fn resolve_velocity(
        &self,
        diameter: Constrained<Length, StrictlyPositive>,
        density: Constrained<MassDensity, StrictlyPositive>,
    ) -> Result<Velocity, FlowSpecError> {
        let given = usize::from(self.velocity.is_some())
            + usize::from(self.volumetric_flow.is_some())
            + usize::from(self.mass_flow.is_some());
        if given == 0 {
            return Err(FlowSpecError::Underspecified);
        }
        if given > 1 {
            return Err(FlowSpecError::Overspecified);
        }

        let d = diameter.into_inner();
        let flow_area: Area = PI * d * d / 4.0;

        let velocity = if let Some(velocity) = self.velocity {
            velocity
        } else if let Some(volumetric_flow) = self.volumetric_flow {
            volumetric_flow / flow_area
        } else if let Some(mass_flow) = self.mass_flow {
            mass_flow / density.into_inner() / flow_area
        } else {
            unreachable!("exactly one flow quantity is present")
        };

        Ok(velocity)
    }
}
