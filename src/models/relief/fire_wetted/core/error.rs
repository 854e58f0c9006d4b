use thiserror::Error;

use crate::support::{constraint::ConstraintError, thermo::ResolveError};

/// Errors that can occur while solving the fire-wetted vaporization case.
#[derive(Debug, Error)]
pub enum FireWettedError {
    /// The requested vaporization interval is not increasing.
    ///
    /// Raised at input construction, before any flash is attempted.
    #[error(
        "final vapor fraction must exceed initial: initial={initial}, final={requested_final}"
    )]
    VaporFractionOrder {
        /// Requested initial vapor fraction.
        initial: f64,

        /// Requested final vapor fraction.
        requested_final: f64,
    },

    /// An input value violated a numeric constraint.
    #[error("invalid input")]
    Constraint(#[from] ConstraintError),

    /// An equilibrium state could not be resolved.
    #[error("equilibrium resolution failed")]
    Resolve(#[from] ResolveError),

    /// The flashed vapor-fraction interval collapsed.
    ///
    /// Even with a valid requested interval, solver tolerance can leave the
    /// two flashed states at the same vapor fraction, which would make the
    /// latent heat per unit vaporized undefined. No recovery is attempted;
    /// a wider interval or tighter resolver tolerance is a caller decision.
    #[error(
        "vapor-fraction interval collapsed after flashing: \
         initial={initial}, final={flashed_final}"
    )]
    DegenerateInterval {
        /// Vapor fraction of the flashed initial state.
        initial: f64,

        /// Vapor fraction of the flashed final state.
        flashed_final: f64,
    },
}
