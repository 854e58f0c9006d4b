//! # Relief Models
//!
//! Pressure-relief sizing models for equipment exposed to external fire,
//! plus supporting pipe-flow pressure-drop calculations.
//!
//! The centerpiece is the API Standard 521 fire-wetted vaporization model:
//! given a flasher capability modeling the vessel contents, it computes the
//! wetted-surface heat duty and the resulting vaporization rate over a chosen
//! vapor-fraction interval.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Thermodynamics
//!
//! This crate contains no equation of state. Phase-equilibrium calculations
//! are delegated to a caller-supplied [`support::thermo::Flasher`], and all
//! physical quantities are typed with [`uom`] so dimension mismatches are
//! rejected at compile time rather than checked at runtime.

pub mod models;
pub mod support;
