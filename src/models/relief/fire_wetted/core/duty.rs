use uom::si::{
    area::square_foot,
    energy::btu_it,
    f64::{Area, Energy, Power, Time},
    time::hour,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::DutyPerArea,
};

/// Duty constant with adequate drainage and firefighting, BTU/(hr·ft²).
///
/// The determination of what constitutes adequate drainage is subjective and
/// left to the user, but it should be designed to carry flammable or
/// combustible liquids away from the vessel (API 521, §4.4.13.2.4.2).
pub const DUTY_CONSTANT_ADEQUATE_DRAINAGE: f64 = 21_000.0;

/// Duty constant without adequate drainage and firefighting, BTU/(hr·ft²).
pub const DUTY_CONSTANT_INADEQUATE_DRAINAGE: f64 = 34_500.0;

/// Wetted-area exponent for general equipment (API 521 equations 7 and 8).
pub const AREA_EXPONENT_GENERAL: f64 = 0.82;

/// Wetted-area exponent for air-cooled heat exchangers in liquid-cooling
/// service (API 521 equations 21 and 22).
pub const AREA_EXPONENT_AIR_COOLER: f64 = 1.0;

/// Wetted-surface heat absorption during fire exposure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WettedDuty {
    /// Total heat duty absorbed through the wetted surface.
    pub duty: Power,

    /// Duty constant applied, per unit wetted area.
    pub constant: DutyPerArea,
}

/// A power of `value` BTU (international table) per hour.
///
/// uom 0.36 has no BTU-based power unit, so the quantity is assembled from
/// its energy and time factors.
fn btu_it_per_hour(value: f64) -> Power {
    Energy::new::<btu_it>(value) / Time::new::<hour>(1.0)
}

/// Computes the API 521 wetted-surface heat duty `Q = C · F · A^E`.
///
/// The correlation constants are empirical and unit-specific: the wetted area
/// enters in square feet and the constant carries BTU/(hr·ft²). The fractional
/// exponent makes the formula dimensionally inhomogeneous, so the conversion
/// happens here, once, and the result is returned as a typed [`Power`].
#[must_use]
pub fn wetted_duty(
    wetted_area: Constrained<Area, StrictlyPositive>,
    adequate_drainage: bool,
    environment_factor: Constrained<f64, NonNegative>,
    air_cooler: bool,
) -> WettedDuty {
    let c = if adequate_drainage {
        DUTY_CONSTANT_ADEQUATE_DRAINAGE
    } else {
        DUTY_CONSTANT_INADEQUATE_DRAINAGE
    };

    let e = if air_cooler {
        AREA_EXPONENT_AIR_COOLER
    } else {
        AREA_EXPONENT_GENERAL
    };

    let area_ft2 = wetted_area.into_inner().get::<square_foot>();
    let duty = btu_it_per_hour(c * environment_factor.into_inner() * area_ft2.powf(e));
    let constant = btu_it_per_hour(c) / Area::new::<square_foot>(1.0);

    WettedDuty { duty, constant }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use crate::support::constraint::{NonNegative, StrictlyPositive};

    fn area(ft2: f64) -> Constrained<Area, StrictlyPositive> {
        StrictlyPositive::new(Area::new::<square_foot>(ft2)).unwrap()
    }

    fn factor(f: f64) -> Constrained<f64, NonNegative> {
        NonNegative::new(f).unwrap()
    }

    fn as_btu_per_hour(power: Power) -> f64 {
        (power * Time::new::<hour>(1.0)).get::<btu_it>()
    }

    #[test]
    fn general_equipment_scenario() {
        // 1000 ft², no drainage credit: Q = 34500 · 1000^0.82.
        let result = wetted_duty(area(1000.0), false, factor(1.0), false);

        assert_relative_eq!(
            as_btu_per_hour(result.duty),
            9_949_908.6857,
            epsilon = 1e-2
        );
        assert_relative_eq!(
            as_btu_per_hour(result.constant * Area::new::<square_foot>(1.0)),
            34_500.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn air_cooler_uses_linear_area() {
        let result = wetted_duty(area(500.0), false, factor(1.0), true);

        // 34500 · 500^1.0, exactly.
        assert_relative_eq!(
            as_btu_per_hour(result.duty),
            17_250_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn adequate_drainage_lowers_the_constant() {
        let result = wetted_duty(area(500.0), true, factor(1.0), true);

        assert_relative_eq!(
            as_btu_per_hour(result.duty),
            21_000.0 * 500.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            as_btu_per_hour(result.constant * Area::new::<square_foot>(1.0)),
            21_000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn duty_scales_with_the_area_exponent() {
        let single = wetted_duty(area(100.0), false, factor(1.0), false);
        let doubled = wetted_duty(area(200.0), false, factor(1.0), false);
        assert_relative_eq!(
            as_btu_per_hour(doubled.duty) / as_btu_per_hour(single.duty),
            2.0_f64.powf(AREA_EXPONENT_GENERAL),
            epsilon = 1e-12
        );

        let single = wetted_duty(area(100.0), false, factor(1.0), true);
        let doubled = wetted_duty(area(200.0), false, factor(1.0), true);
        assert_relative_eq!(
            as_btu_per_hour(doubled.duty) / as_btu_per_hour(single.duty),
            2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn environment_factor_scales_the_duty() {
        let bare = wetted_duty(area(1000.0), false, factor(1.0), false);
        let insulated = wetted_duty(area(1000.0), false, factor(0.75), false);

        assert_relative_eq!(
            as_btu_per_hour(insulated.duty),
            0.75 * as_btu_per_hour(bare.duty),
            epsilon = 1e-9
        );
    }
}
