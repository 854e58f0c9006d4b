use thiserror::Error;

/// Errors that may occur when evaluating a flash.
///
/// These are produced by [`Flasher`](super::Flasher) implementations and
/// propagated unchanged by the models in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlashError {
    /// No equilibrium exists at the specified conditions.
    ///
    /// For example, a pressure above the mixture's critical point.
    #[error("no equilibrium at the specified conditions: {context}")]
    NoEquilibrium { context: String },

    /// The specified conditions are outside the flasher's valid domain.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The flash calculation failed due to a numerical or internal error.
    ///
    /// For example, an inner equation-of-state iteration that diverged.
    #[error("flash calculation failed: {context}")]
    Calculation { context: String },
}
