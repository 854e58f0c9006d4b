//! Core fire-wetted vaporization calculation.

mod duty;
mod error;
mod input;
mod results;
mod solve;

pub use duty::{
    AREA_EXPONENT_AIR_COOLER, AREA_EXPONENT_GENERAL, DUTY_CONSTANT_ADEQUATE_DRAINAGE,
    DUTY_CONSTANT_INADEQUATE_DRAINAGE, WettedDuty, wetted_duty,
};
pub use error::FireWettedError;
pub use input::FireWettedInput;
pub use results::FireWettedResults;

pub(super) use solve::solve;
