use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N3, P1, Z0},
};

/// Molar flow rate, mol/s in SI.
///
/// Vaporization rates are reported on a molar basis because the flasher
/// works with molar enthalpies and compositions.
pub type MolarRate = Quantity<ISQ<Z0, Z0, N1, Z0, Z0, P1, Z0>, SI<f64>, f64>;

/// Heat duty per unit area, W/m² in SI.
///
/// The API 521 duty constants (21 000 and 34 500 BTU/(hr·ft²)) carry this
/// dimension. Construct values by dividing a [`Power`](uom::si::f64::Power)
/// by an [`Area`](uom::si::f64::Area).
pub type DutyPerArea = Quantity<ISQ<Z0, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
