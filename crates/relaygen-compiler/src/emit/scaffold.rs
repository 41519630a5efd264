//! Compilation-unit header, namespace, class declaration, and backing fields.

use relaygen_core::csharp::bare_angles;

use super::Emitter;
use super::emitter::{constraint_clauses, contract_path};
use crate::Result;
use crate::method::MethodBuilder;

pub(super) const HEADER_PAIR_TYPE: &str =
    "global::System.Collections.Generic.KeyValuePair<string, string>";

impl<B: MethodBuilder> Emitter<'_, B> {
    /// Emit everything up to and including the field declarations.
    ///
    /// Leaves the namespace and class blocks open for the finalizer.
    pub(super) fn emit_scaffold(&mut self) -> Result<()> {
        let arity = self.descriptor.arity();
        let contract_typeof = format!("{}{}", contract_path(self.descriptor), bare_angles(arity));
        let implementation_typeof = format!(
            "global::{}.{}{}",
            self.namespace_name,
            self.constructor_name,
            bare_angles(arity)
        );

        if self.config.nullable_disable {
            self.writer.line("#nullable disable");
        }
        self.writer.line(&format!(
            "[assembly: {}(typeof({contract_typeof}), typeof({implementation_typeof}))]",
            self.config.types.implementation_attribute
        ));

        self.writer
            .line(&format!("namespace {}", self.namespace_name));
        self.writer.open_block();

        self.writer.line(
            "[global::System.ComponentModel.EditorBrowsable(global::System.ComponentModel.EditorBrowsableState.Never)]",
        );
        self.writer
            .line("[global::System.Runtime.CompilerServices.CompilerGenerated]");
        self.writer.line(&format!(
            "internal class {} : {}{}",
            self.type_name,
            self.contract_name,
            constraint_clauses(self.descriptor)
        ));
        self.writer.open_block();

        self.writer.line(&format!(
            "private readonly {} {};",
            self.config.types.requester, self.requester_field
        ));
        if let Some(headers) = &self.class_headers_field {
            self.writer.line(&format!(
                "private static readonly {HEADER_PAIR_TYPE}[] {headers};"
            ));
        }
        Ok(())
    }
}
