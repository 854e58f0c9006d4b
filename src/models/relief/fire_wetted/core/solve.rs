//! Energy balance for the fire-wetted vaporization solve.

use uom::si::f64::MolarEnergy;

use crate::support::{
    thermo::{FlashResolver, Flasher},
    units::{MolarRate, TemperatureDifference},
};

use super::{FireWettedError, FireWettedInput, FireWettedResults, duty::wetted_duty};

/// Solves the fire-wetted vaporization case.
///
/// Computes the API 521 wetted-surface duty, resolves the equilibrium states
/// bounding the requested vapor-fraction interval, splits the enthalpy change
/// between them into sensible and latent parts, and charges the entire duty
/// against the latent heat per unit vaporized.
pub(crate) fn solve(
    input: &FireWettedInput,
    flasher: &impl Flasher,
    resolver: &FlashResolver,
) -> Result<FireWettedResults, FireWettedError> {
    let wetted = wetted_duty(
        input.wetted_area(),
        input.adequate_drainage(),
        input.environment_factor(),
        input.air_cooler(),
    );

    let initial = resolver.resolve(
        flasher,
        input.pressure(),
        input.initial_vapor_fraction(),
        input.composition(),
    )?;
    let r#final = resolver.resolve(
        flasher,
        input.pressure(),
        input.final_vapor_fraction(),
        input.composition(),
    )?;

    let average_heat_capacity = (initial.molar_heat_capacity + r#final.molar_heat_capacity) / 2.0;

    let total_enthalpy_change = r#final.molar_enthalpy - initial.molar_enthalpy;
    let sensible_enthalpy_change: MolarEnergy =
        average_heat_capacity * r#final.temperature.minus(initial.temperature);
    let latent_enthalpy_change = total_enthalpy_change - sensible_enthalpy_change;

    // The flashed fractions govern here, not the requested ones: solver
    // tolerance can collapse a nominally valid interval.
    let vaporized_fraction = r#final.vapor_fraction - initial.vapor_fraction;
    if vaporized_fraction <= 0.0 {
        return Err(FireWettedError::DegenerateInterval {
            initial: initial.vapor_fraction,
            flashed_final: r#final.vapor_fraction,
        });
    }

    let latent_heat_per_vaporized = latent_enthalpy_change / vaporized_fraction;
    let vaporization_rate: MolarRate = wetted.duty / latent_heat_per_vaporized;

    Ok(FireWettedResults {
        duty: wetted.duty,
        duty_constant: wetted.constant,
        vaporization_rate,
        average_heat_capacity,
        initial_temperature: initial.temperature,
        final_temperature: r#final.temperature,
        total_enthalpy_change,
        sensible_enthalpy_change,
        latent_enthalpy_change,
        latent_heat_per_vaporized,
    })
}
