use uom::si::f64::Pressure;

use super::{PressureDropError, PressureDropInput};

/// Computes the Darcy-Weisbach pressure drop `Δp = f · ρ · L · v² / (2 D)`.
pub(crate) fn solve(input: &PressureDropInput) -> Result<Pressure, PressureDropError> {
    let velocity = input.flow().resolve_velocity(input.diameter(), input.density())?;

    let density = input.density().into_inner();
    let diameter = input.diameter().into_inner();

    let pressure_drop: Pressure =
        input.friction_factor() * density * input.length() * velocity * velocity
            / (2.0 * diameter);

    Ok(pressure_drop)
}
