//! relaygen compiler: turns contract descriptors into C# implementations.
//!
//! - `emit` - the per-contract emitter, identifier allocation, literal escaping
//! - `method` - the method builder boundary and the default forwarding builder

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod method;

#[cfg(test)]
pub mod test_utils;

pub use emit::{Config, EmitError, EmittedArtifact, Emitter, WellKnownTypes, emit, emit_batch};
pub use method::{ForwardingMethodBuilder, MethodBuilder, MethodContext};

/// Result type for emission.
pub type Result<T> = std::result::Result<T, EmitError>;
