//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by the Annotated Gigaword to Concrete conversion pipeline ([AgigaToConcrete]).
mod convert;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use convert::AgigaToConcrete;
pub use pipeline::Pipeline;
