//! Public relief models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules ([`relief`],
//! [`piping`]) based on an opinionated taxonomy. This organization may evolve
//! as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The `core`
//! module is an implementation detail; its input, result, and error types are
//! re-exported from the model's module, and the [`twine_core::Model`]
//! implementation is a thin adapter that delegates to the core API.

pub mod piping;
pub mod relief;
