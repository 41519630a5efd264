//! Member builders: properties, the requester property, `Dispose`, and methods.

use relaygen_core::csharp::{escape_identifier, raw_identifier};
use relaygen_core::{DescriptorError, MethodDescriptor, PropertyDescriptor};

use super::{EmitError, Emitter};
use crate::Result;
use crate::method::{MethodBuilder, MethodContext};

impl<B: MethodBuilder> Emitter<'_, B> {
    /// Auto-property matching the contract's declaration.
    ///
    /// Explicit properties are qualified by the contract so they are reachable
    /// only through it; implicit ones become public members.
    pub(super) fn emit_property(&mut self, property: &PropertyDescriptor) -> Result<()> {
        let accessors = match (property.has_getter, property.has_setter) {
            (true, true) => "{ get; set; }",
            (true, false) => "{ get; }",
            (false, true) => "{ set; }",
            (false, false) => {
                return Err(EmitError::Descriptor {
                    type_name: self.descriptor.name.clone(),
                    source: DescriptorError::NoAccessors(property.name.clone()),
                });
            }
        };
        let name = escape_identifier(&property.name);

        let line = if property.is_explicit {
            format!(
                "{} {}.{name} {accessors}",
                property.type_name, self.contract_name
            )
        } else {
            format!("public {} {name} {accessors}", property.type_name)
        };
        self.writer.line(&line);
        Ok(())
    }

    /// Public property returning the stored requester.
    pub(super) fn emit_requester_property(&mut self, property: &PropertyDescriptor) {
        self.writer.line(&format!(
            "public {} {} {{ get {{ return this.{}; }} }}",
            self.config.types.requester,
            escape_identifier(&property.name),
            self.requester_field
        ));
    }

    /// Explicit `Dispose()` forwarding to the requester, nothing else.
    pub(super) fn emit_dispose(&mut self) {
        self.writer
            .line(&format!("void {}.Dispose()", self.config.types.disposable));
        self.writer.open_block();
        self.writer
            .line(&format!("this.{}.Dispose();", self.requester_field));
        self.writer.close_block();
    }

    /// Hand the method to the method builder with a freshly allocated metadata field.
    pub(super) fn emit_method(&mut self, method: &MethodDescriptor) -> Result<()> {
        let method_info_field = self
            .names
            .allocate(&format!("methodInfo_{}", raw_identifier(&method.name)));
        let ctx = MethodContext {
            contract: &self.contract_name,
            qualified_type_name: &self.qualified_type_name,
            requester_field: &self.requester_field,
            class_headers_field: self.class_headers_field.as_deref(),
            method_info_field: &method_info_field,
            types: &self.config.types,
        };
        self.method_builder.build(method, &ctx, &mut self.writer)
    }
}
