//! Pipe-flow models.
//!
//! This module contains hydraulic models that support relief sizing,
//! currently single-phase Darcy–Weisbach pressure drop.

pub mod pressure_drop;
