//! Instance and static constructors.

use super::Emitter;
use super::escape::{checked_literal, checked_optional_literal};
use super::scaffold::HEADER_PAIR_TYPE;
use crate::Result;
use crate::method::MethodBuilder;

impl<B: MethodBuilder> Emitter<'_, B> {
    /// `public Implementation_0_IApi(IRequester requester)`: stores the requester and nothing else.
    pub(super) fn emit_instance_ctor(&mut self) -> Result<()> {
        let message = format!(
            "Do not use this type directly. Use {}<{}>(...)",
            self.config.types.factory,
            self.descriptor.raw_name()
        );
        self.writer.line(&format!(
            "[global::System.Obsolete({}, true)]",
            checked_literal(&message)?
        ));
        self.writer.line(&format!(
            "public {}({} requester)",
            self.constructor_name, self.config.types.requester
        ));
        self.writer.open_block();
        self.writer
            .line(&format!("this.{} = requester;", self.requester_field));
        self.writer.close_block();
        Ok(())
    }

    /// Populate the header table, one pair per annotation in declaration order.
    ///
    /// Emits nothing when the contract has no header annotations.
    pub(super) fn emit_static_ctor(&mut self) -> Result<()> {
        let Some(field) = self.class_headers_field.clone() else {
            return Ok(());
        };

        // Render every literal before writing so a bad value leaves no half-built block.
        let pairs = self
            .descriptor
            .headers
            .iter()
            .map(|header| {
                Ok(format!(
                    "new {HEADER_PAIR_TYPE}({}, {}),",
                    checked_literal(&header.name)?,
                    checked_optional_literal(header.value.as_deref())?
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        self.writer
            .line(&format!("static {}()", self.constructor_name));
        self.writer.open_block();
        self.writer.line(&format!(
            "{}.{field} = new {HEADER_PAIR_TYPE}[]",
            self.qualified_type_name
        ));
        self.writer.open_block();
        for pair in &pairs {
            self.writer.line(pair);
        }
        self.writer.close_block_with(";");
        self.writer.close_block();
        Ok(())
    }
}
