use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Solver configuration for resolving a target vapor fraction.
#[derive(Debug, Clone, Copy)]
pub struct ResolveConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the temperature search variable.
    pub temperature_tol: TemperatureInterval,

    /// Absolute tolerance for the vapor-fraction residual (achieved - target).
    pub vapor_fraction_tol: f64,

    /// Maximum number of memoized equilibrium states.
    pub cache_capacity: usize,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            vapor_fraction_tol: 1e-9,
            cache_capacity: 64,
        }
    }
}

impl ResolveConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temperature_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.vapor_fraction_tol,
        }
    }
}
