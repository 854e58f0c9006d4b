//! Vapor-liquid equilibrium support.
//!
//! This module defines the flash capability consumed by the relief models and
//! a resolver that locates equilibrium states at a requested vapor fraction.
//!
//! The crate never constructs a [`Flasher`]; callers supply one (typically a
//! wrapper around an equation-of-state library). Models only read from the
//! immutable [`EquilibriumState`] snapshots the flasher returns.

mod capability;
mod error;
mod resolve;
mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use capability::Flasher;
pub use error::FlashError;
pub use resolve::{FlashResolver, ResolveConfig, ResolveError};
pub use state::EquilibriumState;

use crate::support::constraint::{Constrained, UnitInterval};

/// A vapor fraction constrained to the closed unit interval.
///
/// Construct one with [`UnitInterval::new`] (or the
/// [`UnitInterval::zero`]/[`UnitInterval::one`] endpoints), which rejects
/// out-of-range values before any flash work is attempted.
pub type VaporFraction = Constrained<f64, UnitInterval>;
