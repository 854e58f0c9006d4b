//! Relief-load models.
//!
//! This module contains models that size the vapor load a pressure-relief
//! device must handle, currently the API Standard 521 external-fire case.

pub mod fire_wetted;
