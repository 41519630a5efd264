//! Default method builder: package arguments into a request and hand it to the requester.

use indexmap::IndexSet;
use relaygen_core::csharp::{escape_identifier, raw_identifier};
use relaygen_core::{MethodDescriptor, ParameterRole, RequestDescriptor, ResponseKind};

use super::{MethodBuilder, MethodContext};
use crate::Result;
use crate::emit::{CodeWriter, EmitError, NameAllocator, checked_literal, checked_optional_literal};

const METHOD_INFO_TYPE: &str = "global::System.Reflection.MethodInfo";
const HTTP_METHOD_TYPE: &str = "global::System.Net.Http.HttpMethod";

/// Emits a cached `MethodInfo` field and a method that builds a request
/// description and forwards it in a single requester call.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardingMethodBuilder;

impl MethodBuilder for ForwardingMethodBuilder {
    fn build(
        &self,
        method: &MethodDescriptor,
        ctx: &MethodContext<'_>,
        out: &mut CodeWriter,
    ) -> Result<()> {
        let request = request_of(method)?;
        let statements = parameter_statements(method)?;

        // Locals share the method scope with parameters.
        let mut locals = NameAllocator::new(
            method
                .parameters
                .iter()
                .map(|p| raw_identifier(&p.name))
                .collect::<IndexSet<_>>(),
        );
        let request_info = locals.allocate("requestInfo");
        let method_info = format!("{}.{}", ctx.qualified_type_name, ctx.method_info_field);

        out.line(&format!(
            "private static {METHOD_INFO_TYPE} {};",
            ctx.method_info_field
        ));
        out.line(&signature(method, ctx));
        out.open_block();

        out.line(&format!("if ({method_info} == null)"));
        out.open_block();
        out.line(&format!(
            "{method_info} = typeof({}).GetMethod({}, {});",
            ctx.contract,
            checked_literal(raw_identifier(&method.name))?,
            parameter_types(method),
        ));
        out.close_block();

        out.line(&format!(
            "var {request_info} = new {}(new {HTTP_METHOD_TYPE}({}), {}, {method_info});",
            ctx.types.request_info,
            checked_literal(&request.method)?,
            checked_literal(&request.path)?,
        ));
        if let Some(headers) = ctx.class_headers_field {
            out.line(&format!(
                "{request_info}.ClassHeaders = {}.{headers};",
                ctx.qualified_type_name
            ));
        }
        for header in &method.headers {
            out.line(&format!(
                "{request_info}.AddMethodHeader({}, {});",
                checked_literal(&header.name)?,
                checked_optional_literal(header.value.as_deref())?,
            ));
        }
        for statement in statements {
            out.line(&format!("{request_info}.{statement}"));
        }

        out.line(&format!(
            "return this.{}.{}({request_info});",
            ctx.requester_field,
            requester_call(&method.response)
        ));
        out.close_block();
        Ok(())
    }
}

fn request_of(method: &MethodDescriptor) -> Result<&RequestDescriptor> {
    let request = method
        .request
        .as_ref()
        .ok_or_else(|| malformed(method, "no request verb and path"))?;
    if request.method.trim().is_empty() {
        return Err(malformed(method, "empty request verb"));
    }
    Ok(request)
}

/// One `requestInfo` member call per parameter, in declaration order.
fn parameter_statements(method: &MethodDescriptor) -> Result<Vec<String>> {
    let mut statements = Vec::with_capacity(method.parameters.len());
    let mut has_body = false;
    let mut has_token = false;

    for param in &method.parameters {
        let arg = escape_identifier(&param.name);
        let statement = match &param.role {
            ParameterRole::Path { name } => {
                let key = name.as_deref().unwrap_or(raw_identifier(&param.name));
                format!("AddPathParameter({}, {arg});", checked_literal(key)?)
            }
            ParameterRole::Query => format!(
                "AddQueryParameter({}, {arg});",
                checked_literal(raw_identifier(&param.name))?
            ),
            ParameterRole::NamedQuery { name } => {
                format!("AddQueryParameter({}, {arg});", checked_literal(name)?)
            }
            ParameterRole::Header { name } => {
                format!("AddHeaderParameter({}, {arg});", checked_literal(name)?)
            }
            ParameterRole::Body => {
                if std::mem::replace(&mut has_body, true) {
                    return Err(malformed(method, "more than one body parameter"));
                }
                format!("SetBodyParameter({arg});")
            }
            ParameterRole::CancellationToken => {
                if std::mem::replace(&mut has_token, true) {
                    return Err(malformed(method, "more than one cancellation token"));
                }
                format!("CancellationToken = {arg};")
            }
        };
        statements.push(statement);
    }
    Ok(statements)
}

fn signature(method: &MethodDescriptor, ctx: &MethodContext<'_>) -> String {
    let params = method
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.type_name, escape_identifier(&p.name)))
        .collect::<Vec<_>>()
        .join(", ");
    let name = escape_identifier(&method.name);

    if method.is_explicit {
        format!("{} {}.{name}({params})", method.return_type, ctx.contract)
    } else {
        format!("public {} {name}({params})", method.return_type)
    }
}

fn parameter_types(method: &MethodDescriptor) -> String {
    if method.parameters.is_empty() {
        return "global::System.Type.EmptyTypes".to_string();
    }
    let types = method
        .parameters
        .iter()
        .map(|p| format!("typeof({})", p.type_name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("new global::System.Type[] {{ {types} }}")
}

fn requester_call(response: &ResponseKind) -> String {
    match response {
        ResponseKind::Void => "RequestVoidAsync".to_string(),
        ResponseKind::Deserialized { type_name } => format!("RequestAsync<{type_name}>"),
        ResponseKind::Response { type_name } => format!("RequestWithResponseAsync<{type_name}>"),
        ResponseKind::ResponseMessage => "RequestWithResponseMessageAsync".to_string(),
        ResponseKind::Raw => "RequestRawAsync".to_string(),
        ResponseKind::Stream => "RequestStreamAsync".to_string(),
    }
}

fn malformed(method: &MethodDescriptor, reason: &str) -> EmitError {
    EmitError::MalformedMethod {
        method: method.name.clone(),
        reason: reason.to_string(),
    }
}
