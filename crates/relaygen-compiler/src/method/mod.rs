//! Method body emission.
//!
//! The emitter owns naming and scaffolding; what goes inside a forwarded
//! method belongs to a [`MethodBuilder`]. The boundary is fixed so the builder
//! can be swapped without touching the emitter.

mod forwarding;


pub use forwarding::ForwardingMethodBuilder;

use relaygen_core::MethodDescriptor;

use crate::Result;
use crate::emit::{CodeWriter, WellKnownTypes};

/// Everything a method builder may reference from the enclosing class.
#[derive(Clone, Copy, Debug)]
pub struct MethodContext<'a> {
    /// Fully-qualified contract name, for explicit implementations and `typeof`.
    pub contract: &'a str,
    /// Fully-qualified name of the generated class.
    pub qualified_type_name: &'a str,
    /// Instance field holding the requester.
    pub requester_field: &'a str,
    /// Static header table, present only when the contract declares headers.
    pub class_headers_field: Option<&'a str>,
    /// Freshly allocated identifier reserved for this method's cached metadata.
    pub method_info_field: &'a str,
    pub types: &'a WellKnownTypes,
}

/// Writes one complete forwarding member per method descriptor.
///
/// Implementations must call exactly one requester operation per method.
pub trait MethodBuilder {
    fn build(
        &self,
        method: &MethodDescriptor,
        ctx: &MethodContext<'_>,
        out: &mut CodeWriter,
    ) -> Result<()>;
}

impl<B: MethodBuilder + ?Sized> MethodBuilder for &B {
    fn build(
        &self,
        method: &MethodDescriptor,
        ctx: &MethodContext<'_>,
        out: &mut CodeWriter,
    ) -> Result<()> {
        (**self).build(method, ctx, out)
    }
}
