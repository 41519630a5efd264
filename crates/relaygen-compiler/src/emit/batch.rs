//! Emitting several contracts into one compilation.

use relaygen_core::TypeDescriptor;

use super::{Config, EmittedArtifact, emit_with};
use crate::Result;
use crate::method::{ForwardingMethodBuilder, MethodBuilder};

/// Emit every descriptor, using its position as the batch index.
///
/// Each type succeeds or fails on its own; one failure does not stop the rest.
pub fn emit_batch(descriptors: &[TypeDescriptor], config: &Config) -> Vec<Result<EmittedArtifact>> {
    emit_batch_with(descriptors, config, &ForwardingMethodBuilder)
}

/// [`emit_batch`] with a custom method builder shared by every type.
#[tracing::instrument(skip_all, fields(types = descriptors.len()))]
pub fn emit_batch_with<B: MethodBuilder>(
    descriptors: &[TypeDescriptor],
    config: &Config,
    method_builder: &B,
) -> Vec<Result<EmittedArtifact>> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let result = emit_with(descriptor, config, index, method_builder);
            if let Err(err) = &result {
                tracing::warn!(type_name = %descriptor.name, index, %err, "emission failed");
            }
            result
        })
        .collect()
}
