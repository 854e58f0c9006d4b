use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// An invalid flow specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowSpecError {
    /// No flow quantity was given.
    #[error("no flow specified: provide exactly one of velocity, volumetric flow, or mass flow")]
    Underspecified,

    /// More than one flow quantity was given.
    #[error(
        "more than one flow specified: provide exactly one of velocity, volumetric flow, or mass flow"
    )]
    Overspecified,
}

/// An error computing the pressure drop through a pipe.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PressureDropError {
    /// A geometry or fluid parameter violated its constraint.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// The flow specification could not be resolved to a velocity.
    #[error(transparent)]
    Flow(#[from] FlowSpecError),
}
