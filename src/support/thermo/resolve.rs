//! Equilibrium-state resolution at a requested vapor fraction.
//!
//! A flash fixed by pressure and vapor fraction is only directly well-defined
//! at the saturation boundaries (vapor fraction 0 or 1). For an intermediate
//! vapor fraction, [`FlashResolver`] brackets the saturation temperatures and
//! bisects for the temperature whose flash hits the target.
//!
//! Resolution assumes the vapor fraction increases monotonically with
//! temperature at fixed pressure between the two saturation temperatures.
//! That is the standard vapor-liquid equilibrium picture; it does not hold in
//! retrograde regions, where the bracket produces no sign change and the
//! solve fails rather than returning a wrong state.

mod cache;
mod config;
mod error;
mod problem;

pub use config::ResolveConfig;
pub use error::ResolveError;

use std::cell::RefCell;

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::UnitInterval;

use super::{EquilibriumState, Flasher, VaporFraction};

use cache::{CacheKey, FlashCache};
use problem::{FlashAtTemperature, VaporFractionProblem};

/// Resolves equilibrium states at a requested vapor fraction, with memoization.
///
/// The resolver owns a bounded cache of previously resolved states, keyed by
/// (pressure, vapor fraction, composition). Saturation boundary states are
/// resolved once per pressure and reused by every intermediate query at that
/// pressure, and a repeated identical query issues no flasher calls at all.
///
/// Because flasher identity is part of a cached state's meaning, use one
/// resolver per flasher instance. The cache lives behind a [`RefCell`], so a
/// resolver is deliberately not `Sync`; concurrent callers should hold one
/// resolver each.
#[derive(Debug)]
pub struct FlashResolver {
    config: ResolveConfig,
    cache: RefCell<FlashCache>,
}

impl Default for FlashResolver {
    fn default() -> Self {
        Self::new(ResolveConfig::default())
    }
}

impl FlashResolver {
    /// Creates a resolver with the given configuration.
    #[must_use]
    pub fn new(config: ResolveConfig) -> Self {
        let cache = RefCell::new(FlashCache::new(config.cache_capacity));
        Self { config, cache }
    }

    /// Resolves the equilibrium state at `pressure` and `vapor_fraction`.
    ///
    /// Boundary requests (vapor fraction exactly 0 or 1) delegate directly to
    /// [`Flasher::flash_pq`]. Intermediate requests resolve both saturation
    /// boundaries at the same pressure, then bisect for the temperature whose
    /// temperature-pressure flash reproduces the target vapor fraction.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if a boundary flash fails, if the bisection
    /// bracket produces no sign change, or if the solve does not converge
    /// within the configured iteration limit. There is no automatic retry:
    /// the method is deterministic, so only a caller-chosen change of
    /// tolerance or bracket could alter the outcome.
    pub fn resolve(
        &self,
        flasher: &impl Flasher,
        pressure: Pressure,
        vapor_fraction: VaporFraction,
        zs: &[f64],
    ) -> Result<EquilibriumState, ResolveError> {
        let target = vapor_fraction.into_inner();
        let key = CacheKey::new(pressure, target, zs);

        if let Some(state) = self.cache.borrow().get(&key) {
            return Ok(state);
        }

        let state = if target == 0.0 || target == 1.0 {
            flasher.flash_pq(pressure, vapor_fraction, zs)?
        } else {
            let sat_liquid = self.resolve(flasher, pressure, UnitInterval::zero(), zs)?;
            let sat_vapor = self.resolve(flasher, pressure, UnitInterval::one(), zs)?;
            self.bisect(
                flasher,
                pressure,
                target,
                zs,
                sat_liquid.temperature,
                sat_vapor.temperature,
            )?
        };

        self.cache.borrow_mut().insert(key, state);
        Ok(state)
    }

    /// Bisects for the temperature whose flash hits the target vapor fraction.
    fn bisect(
        &self,
        flasher: &impl Flasher,
        pressure: Pressure,
        target: f64,
        zs: &[f64],
        t_sat_liquid: ThermodynamicTemperature,
        t_sat_vapor: ThermodynamicTemperature,
    ) -> Result<EquilibriumState, ResolveError> {
        let model = FlashAtTemperature::new(flasher, pressure, zs);
        let problem = VaporFractionProblem::new(target);

        let solution = bisection::solve(
            &model,
            &problem,
            [t_sat_liquid.get::<kelvin>(), t_sat_vapor.get::<kelvin>()],
            &self.config.bisection(),
            |event: &bisection::Event<'_, _, _>| {
                // A failed flash means this temperature is outside the
                // feasible region. Guide bisection away by assuming positive
                // residual (vapor fraction above target).
                if event.result().is_err() {
                    return Some(bisection::Action::assume_positive());
                }
                None
            },
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(ResolveError::MaxIters {
                residual: solution.residual,
                iters: solution.iters,
            });
        }

        Ok(solution.snapshot.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MolarEnergy, MolarHeatCapacity},
        molar_energy::joule_per_mole,
        molar_heat_capacity::joule_per_kelvin_mole,
        pressure::kilopascal,
    };

    use crate::support::thermo::{FlashError, test_support::LinearFlasher};

    fn vf(value: f64) -> VaporFraction {
        UnitInterval::new(value).unwrap()
    }

    #[test]
    fn boundary_requests_delegate_directly() {
        let flasher = LinearFlasher::new();
        let resolver = FlashResolver::default();
        let p = Pressure::new::<kilopascal>(500.0);

        let sat_liquid = resolver
            .resolve(&flasher, p, UnitInterval::zero(), &[1.0])
            .unwrap();
        let sat_vapor = resolver
            .resolve(&flasher, p, UnitInterval::one(), &[1.0])
            .unwrap();

        assert_relative_eq!(sat_liquid.vapor_fraction, 0.0);
        assert_relative_eq!(sat_vapor.vapor_fraction, 1.0);
        assert!(sat_vapor.temperature > sat_liquid.temperature);

        // One pressure/vapor-fraction flash per boundary, no bisection.
        assert_eq!(flasher.pq_calls(), 2);
        assert_eq!(flasher.tp_calls(), 0);
    }

    #[test]
    fn intermediate_request_hits_target_within_tolerance() {
        let flasher = LinearFlasher::new();
        let resolver = FlashResolver::default();
        let p = Pressure::new::<kilopascal>(500.0);

        let state = resolver.resolve(&flasher, p, vf(0.4), &[1.0]).unwrap();

        assert_relative_eq!(state.vapor_fraction, 0.4, epsilon = 1e-8);
        assert_relative_eq!(
            state.temperature.get::<kelvin>(),
            flasher.temperature_at(0.4).get::<kelvin>(),
            epsilon = 1e-6
        );
        assert!(flasher.tp_calls() > 0);
    }

    #[test]
    fn repeated_query_issues_no_flasher_calls() {
        let flasher = LinearFlasher::new();
        let resolver = FlashResolver::default();
        let p = Pressure::new::<kilopascal>(500.0);

        let first = resolver.resolve(&flasher, p, vf(0.25), &[1.0]).unwrap();
        let calls_after_first = flasher.total_calls();

        let second = resolver.resolve(&flasher, p, vf(0.25), &[1.0]).unwrap();

        assert_eq!(flasher.total_calls(), calls_after_first);
        assert_eq!(first, second);
    }

    #[test]
    fn boundary_states_shared_across_intermediate_queries() {
        let flasher = LinearFlasher::new();
        let resolver = FlashResolver::default();
        let p = Pressure::new::<kilopascal>(500.0);

        resolver.resolve(&flasher, p, vf(0.3), &[1.0]).unwrap();
        let pq_calls_after_first = flasher.pq_calls();

        resolver.resolve(&flasher, p, vf(0.7), &[1.0]).unwrap();

        // The second intermediate query reuses both cached saturation states.
        assert_eq!(flasher.pq_calls(), pq_calls_after_first);
    }

    #[test]
    fn distinct_compositions_are_distinct_cache_entries() {
        let flasher = LinearFlasher::new();
        let resolver = FlashResolver::default();
        let p = Pressure::new::<kilopascal>(500.0);

        resolver
            .resolve(&flasher, p, UnitInterval::zero(), &[0.5, 0.5])
            .unwrap();
        resolver
            .resolve(&flasher, p, UnitInterval::zero(), &[0.4, 0.6])
            .unwrap();

        assert_eq!(flasher.pq_calls(), 2);
    }

    #[test]
    fn cache_is_bounded() {
        let flasher = LinearFlasher::new();
        let resolver = FlashResolver::new(ResolveConfig {
            cache_capacity: 2,
            ..ResolveConfig::default()
        });

        for i in 0..4 {
            let p = Pressure::new::<kilopascal>(100.0 + f64::from(i));
            resolver
                .resolve(&flasher, p, UnitInterval::zero(), &[1.0])
                .unwrap();
        }
        assert_eq!(flasher.pq_calls(), 4);

        // The oldest entry was evicted, so re-requesting it flashes again.
        let p = Pressure::new::<kilopascal>(100.0);
        resolver
            .resolve(&flasher, p, UnitInterval::zero(), &[1.0])
            .unwrap();
        assert_eq!(flasher.pq_calls(), 5);
    }

    /// Flasher whose interior states never leave the liquid side: boundary
    /// flashes report the requested vapor fraction, but every
    /// temperature-pressure flash reports 0.
    struct StuckLiquidFlasher;

    impl Flasher for StuckLiquidFlasher {
        fn flash_tp(
            &self,
            temperature: ThermodynamicTemperature,
            _pressure: Pressure,
            _zs: &[f64],
        ) -> Result<EquilibriumState, FlashError> {
            Ok(Self::state(temperature, 0.0))
        }

        fn flash_pq(
            &self,
            _pressure: Pressure,
            vapor_fraction: VaporFraction,
            _zs: &[f64],
        ) -> Result<EquilibriumState, FlashError> {
            let vf = vapor_fraction.into_inner();
            let temperature =
                ThermodynamicTemperature::new::<kelvin>(350.0 + vf * 100.0);
            Ok(Self::state(temperature, vf))
        }
    }

    impl StuckLiquidFlasher {
        fn state(temperature: ThermodynamicTemperature, vf: f64) -> EquilibriumState {
            EquilibriumState::new(
                temperature,
                vf,
                MolarEnergy::new::<joule_per_mole>(5_000.0),
                MolarHeatCapacity::new::<joule_per_kelvin_mole>(75.0),
            )
        }
    }

    #[test]
    fn bracket_without_sign_change_is_a_solver_error() {
        let resolver = FlashResolver::default();
        let p = Pressure::new::<kilopascal>(500.0);

        // The target 0.5 is never crossed: the residual is -0.5 across the
        // entire bracket, so bisection cannot establish a sign change.
        let result = resolver.resolve(&StuckLiquidFlasher, p, vf(0.5), &[1.0]);

        assert!(matches!(result, Err(ResolveError::Bisection(_))));
    }
}
