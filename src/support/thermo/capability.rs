use uom::si::f64::{Pressure, ThermodynamicTemperature};

use super::{EquilibriumState, FlashError, VaporFraction};

/// Capability trait for phase-equilibrium (flash) calculations.
///
/// A `Flasher` models the contents of a vessel: given two independent
/// specifications plus a composition, it produces the corresponding
/// [`EquilibriumState`]. The two specification pairs the relief models need
/// are temperature/pressure (used while searching for a target vapor
/// fraction) and pressure/vapor-fraction (used at the saturation boundaries,
/// where the flash is directly well-defined).
///
/// Compositions are mole fractions and are forwarded to the implementation
/// verbatim — this crate does not normalize them to sum to one. The flasher
/// owns composition validity and should reject inputs it cannot handle.
pub trait Flasher {
    /// Flashes at fixed temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError`] if no equilibrium state can be computed at the
    /// given conditions.
    fn flash_tp(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        zs: &[f64],
    ) -> Result<EquilibriumState, FlashError>;

    /// Flashes at fixed pressure and vapor fraction.
    ///
    /// Implementations must support the saturation boundaries
    /// (vapor fraction 0 and 1) at any pressure within their domain.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError`] if no equilibrium state can be computed at the
    /// given conditions.
    fn flash_pq(
        &self,
        pressure: Pressure,
        vapor_fraction: VaporFraction,
        zs: &[f64],
    ) -> Result<EquilibriumState, FlashError>;
}
