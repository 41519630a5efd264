//! Core emitter struct and the per-type emission entry points.

use relaygen_core::csharp::escape_identifier;
use relaygen_core::{MemberDescriptor, TypeDescriptor};

use super::{CodeWriter, Config, EmitError, EmittedArtifact, NameAllocator};
use crate::Result;
use crate::method::{ForwardingMethodBuilder, MethodBuilder};

/// Emits one implementation of one contract.
///
/// Construction writes the scaffold and constructors; members are then added
/// in caller order and [`Emitter::finalize`] consumes the emitter.
pub struct Emitter<'a, B: MethodBuilder = ForwardingMethodBuilder> {
    pub(super) descriptor: &'a TypeDescriptor,
    pub(super) config: &'a Config,
    pub(super) method_builder: B,

    /// Output buffer
    pub(super) writer: CodeWriter,
    /// Generated identifiers (collision avoidance)
    pub(super) names: NameAllocator<'a>,

    /// `Contoso.RestEaseGeneratedTypes`
    pub(super) namespace_name: String,
    /// `Implementation_0_`
    pub(super) type_name_prefix: String,
    /// `Implementation_0_IApi`
    pub(super) constructor_name: String,
    /// `Implementation_0_IApi<T>`
    pub(super) type_name: String,
    /// `global::Contoso.RestEaseGeneratedTypes.Implementation_0_IApi<T>`
    pub(super) qualified_type_name: String,
    /// `global::Contoso.IApi<T>`
    pub(super) contract_name: String,
    pub(super) requester_field: String,
    /// Present iff the contract declares header annotations.
    pub(super) class_headers_field: Option<String>,

    /// First member failure; a poisoned emitter refuses further work.
    failed: Option<EmitError>,
}

impl<'a> Emitter<'a> {
    /// Start an implementation using the forwarding method builder.
    pub fn new(descriptor: &'a TypeDescriptor, config: &'a Config, index: usize) -> Result<Self> {
        Self::with_method_builder(descriptor, config, index, ForwardingMethodBuilder)
    }
}

impl<'a, B: MethodBuilder> Emitter<'a, B> {
    /// Start an implementation whose methods are written by `method_builder`.
    ///
    /// `index` is the position in the current batch and is embedded in the
    /// generated type name.
    #[tracing::instrument(skip_all, fields(type_name = %descriptor.name, index = index))]
    pub fn with_method_builder(
        descriptor: &'a TypeDescriptor,
        config: &'a Config,
        index: usize,
        method_builder: B,
    ) -> Result<Self> {
        config.validate()?;
        descriptor
            .validate()
            .map_err(|source| EmitError::Descriptor {
                type_name: descriptor.name.clone(),
                source,
            })?;

        let namespace_name = generated_namespace(descriptor, config);
        let type_name_prefix = format!("{}_{}_", config.type_prefix, index);
        // `{prefix}_{index}_` is never a keyword, so the raw name is used
        // here; type parameters keep their own escaping.
        let constructor_name = format!("{type_name_prefix}{}", descriptor.raw_name());
        let type_name = format!("{constructor_name}{}", type_parameter_list(descriptor));
        let qualified_type_name = format!("global::{namespace_name}.{type_name}");
        let contract_name = contract_name(descriptor);

        let mut names = NameAllocator::new(descriptor.reserved_names());
        let requester_field = names.allocate("requester");
        let class_headers_field = descriptor
            .has_headers()
            .then(|| names.allocate("classHeaders"));

        let mut emitter = Self {
            descriptor,
            config,
            method_builder,
            writer: CodeWriter::new(config.indent_width),
            names,
            namespace_name,
            type_name_prefix,
            constructor_name,
            type_name,
            qualified_type_name,
            contract_name,
            requester_field,
            class_headers_field,
            failed: None,
        };

        emitter.emit_scaffold()?;
        emitter.emit_instance_ctor()?;
        emitter.emit_static_ctor()?;
        Ok(emitter)
    }

    /// Emit one member. Every member kind has exactly one builder.
    ///
    /// After a failure the emitter is poisoned: later members and
    /// [`Emitter::finalize`] return the first error.
    pub fn emit_member(&mut self, member: &MemberDescriptor) -> Result<()> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        tracing::trace!(member = member.declared_name().unwrap_or("Dispose"), "emit member");
        let result = self.dispatch_member(member);
        if let Err(err) = &result {
            self.failed = Some(err.clone());
        }
        result
    }

    fn dispatch_member(&mut self, member: &MemberDescriptor) -> Result<()> {
        match member {
            MemberDescriptor::Property(property) => self.emit_property(property),
            MemberDescriptor::RequesterProperty(property) => {
                self.emit_requester_property(property);
                Ok(())
            }
            MemberDescriptor::Dispose => {
                self.emit_dispose();
                Ok(())
            }
            MemberDescriptor::Method(method) => self.emit_method(method),
        }
    }

    /// Close open scopes and hand back the finished text.
    ///
    /// Fails if any member failed, so a partial implementation never escapes.
    pub fn finalize(mut self) -> Result<EmittedArtifact> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        // class, then namespace
        while self.writer.depth() > 0 {
            self.writer.close_block();
        }
        Ok(EmittedArtifact::new(self.writer.finish()))
    }

    pub fn namespace_name(&self) -> &str {
        &self.namespace_name
    }

    pub fn type_name_prefix(&self) -> &str {
        &self.type_name_prefix
    }

    pub fn qualified_type_name(&self) -> &str {
        &self.qualified_type_name
    }

    pub fn requester_field(&self) -> &str {
        &self.requester_field
    }

    pub fn class_headers_field(&self) -> Option<&str> {
        self.class_headers_field.as_deref()
    }
}

/// Emit a complete implementation of `descriptor` with the forwarding method builder.
pub fn emit(descriptor: &TypeDescriptor, config: &Config, index: usize) -> Result<EmittedArtifact> {
    emit_with(descriptor, config, index, ForwardingMethodBuilder)
}

/// Emit a complete implementation of `descriptor` with a custom method builder.
#[tracing::instrument(skip_all, fields(type_name = %descriptor.name, index = index, members = descriptor.members.len()))]
pub fn emit_with<B: MethodBuilder>(
    descriptor: &TypeDescriptor,
    config: &Config,
    index: usize,
    method_builder: B,
) -> Result<EmittedArtifact> {
    let mut emitter = Emitter::with_method_builder(descriptor, config, index, method_builder)?;
    for member in &descriptor.members {
        emitter.emit_member(member)?;
    }
    emitter.finalize()
}

// ============================================================================
// Naming
// ============================================================================

fn generated_namespace(descriptor: &TypeDescriptor, config: &Config) -> String {
    descriptor
        .namespace
        .iter()
        .map(String::as_str)
        .chain(config.namespace_suffix.split('.'))
        .map(escape_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// `<A, @class>`, or empty for non-generic contracts.
pub(super) fn type_parameter_list(descriptor: &TypeDescriptor) -> String {
    if descriptor.type_parameters.is_empty() {
        return String::new();
    }
    let params = descriptor
        .type_parameters
        .iter()
        .map(|p| escape_identifier(&p.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("<{params}>")
}

/// Contract path without type arguments: `global::Contoso.Outer.IApi`.
pub(super) fn contract_path(descriptor: &TypeDescriptor) -> String {
    let segments = descriptor
        .namespace
        .iter()
        .chain(&descriptor.containing_types)
        .chain(std::iter::once(&descriptor.name))
        .map(|s| escape_identifier(s))
        .collect::<Vec<_>>()
        .join(".");
    format!("global::{segments}")
}

fn contract_name(descriptor: &TypeDescriptor) -> String {
    format!(
        "{}{}",
        contract_path(descriptor),
        type_parameter_list(descriptor)
    )
}

/// ` where T : class, new()` clauses, in type-parameter order.
pub(super) fn constraint_clauses(descriptor: &TypeDescriptor) -> String {
    descriptor
        .type_parameters
        .iter()
        .filter(|p| !p.constraints.is_empty())
        .map(|p| {
            format!(
                " where {} : {}",
                escape_identifier(&p.name),
                p.constraints.join(", ")
            )
        })
        .collect()
}

