//! Core Darcy–Weisbach pressure-drop calculation.

mod error;
mod flow;
mod input;
mod solve;

pub use error::{FlowSpecError, PressureDropError};
pub use flow::FlowSpec;
pub use input::PressureDropInput;

pub(super) use solve::solve;
