use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::thermo::FlashError;

/// Errors that can occur while resolving a target vapor fraction.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A saturation boundary flash failed.
    #[error("boundary flash failed")]
    Flash(#[from] FlashError),

    /// The bisection solver encountered an error.
    ///
    /// This includes a bracket with no vapor-fraction sign change, which is
    /// what a non-monotonic VF(T) curve (e.g., retrograde condensation)
    /// produces.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best vapor-fraction residual achieved.
        ///
        /// This is the smallest absolute difference between achieved and
        /// target vapor fraction encountered during iteration.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
