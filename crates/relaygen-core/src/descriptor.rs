//! Contract descriptors consumed by the emitter.
//!
//! A descriptor is produced by an analysis phase that has already resolved the
//! contract's annotations. Everything here is plain data: the emitter never
//! looks further than what a descriptor states.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::DescriptorError;
use crate::csharp::{is_valid_identifier, raw_identifier};

// ============================================================================
// Type Level
// ============================================================================

/// An interface-like contract to implement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Declared name, optionally with a leading `@`.
    pub name: String,
    /// Namespace segments, outermost first. Empty for the global namespace.
    #[serde(default)]
    pub namespace: Vec<String>,
    /// Enclosing type names for nested contracts, outermost first.
    #[serde(default)]
    pub containing_types: Vec<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Contract-level header annotations, in declaration order.
    #[serde(default)]
    pub headers: Vec<HeaderAnnotation>,
    /// Members in the order they should be emitted.
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
}

/// A generic parameter and its constraint clauses, carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    /// Constraint clauses such as `class` or `new()`.
    #[serde(default)]
    pub constraints: Vec<String>,
}

/// A compile-time name/value pair materialized into generated code.
///
/// An absent value means the header is declared without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderAnnotation {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl HeaderAnnotation {
    /// Create a validated header annotation.
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Result<Self, DescriptorError> {
        let header = Self {
            name: name.into(),
            value: value.map(str::to_string),
        };
        header.validate()?;
        Ok(header)
    }

    pub(crate) fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.is_empty() {
            return Err(DescriptorError::EmptyHeaderName);
        }
        if self.name.contains(':') {
            return Err(DescriptorError::HeaderNameColon(self.name.clone()));
        }
        Ok(())
    }
}

// ============================================================================
// Members
// ============================================================================

/// One contract member, tagged by how it must be implemented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberDescriptor {
    /// Plain auto-property.
    Property(PropertyDescriptor),
    /// Property exposing the requester the implementation forwards to.
    RequesterProperty(PropertyDescriptor),
    /// The disposal capability's `Dispose()`.
    Dispose,
    /// Request method.
    Method(MethodDescriptor),
}

impl MemberDescriptor {
    /// Name the member declares on the contract, if any.
    ///
    /// `Dispose` comes from the disposal capability, not from the contract.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::Property(p) | Self::RequesterProperty(p) => Some(&p.name),
            Self::Method(m) => Some(&m.name),
            Self::Dispose => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    /// Rendered property type.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default = "default_true")]
    pub has_getter: bool,
    #[serde(default)]
    pub has_setter: bool,
    /// Implement the property explicitly (only reachable through the contract).
    #[serde(default)]
    pub is_explicit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    /// Rendered return type.
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub is_explicit: bool,
    /// Verb and path. Methods without one cannot be forwarded.
    #[serde(default)]
    pub request: Option<RequestDescriptor>,
    #[serde(default)]
    pub response: ResponseKind,
    /// Method-level header annotations, in declaration order.
    #[serde(default)]
    pub headers: Vec<HeaderAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// HTTP verb, e.g. `GET`.
    pub method: String,
    /// Path template, e.g. `users/{id}`.
    #[serde(default)]
    pub path: String,
}

/// What the method's return type asks the requester for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseKind {
    /// `Task`: no response body.
    #[default]
    Void,
    /// `Task<T>`: deserialized body.
    Deserialized {
        #[serde(rename = "type")]
        type_name: String,
    },
    /// `Task<Response<T>>`: body plus response metadata.
    Response {
        #[serde(rename = "type")]
        type_name: String,
    },
    /// `Task<HttpResponseMessage>`.
    ResponseMessage,
    /// `Task<string>`.
    Raw,
    /// `Task<Stream>`.
    Stream,
}

impl ResponseKind {
    /// Type argument of the requester call, for the kinds that carry one.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Deserialized { type_name } | Self::Response { type_name } => Some(type_name),
            Self::Void | Self::ResponseMessage | Self::Raw | Self::Stream => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub role: ParameterRole,
}

/// How a parameter contributes to the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterRole {
    /// Substituted into the path template; `name` overrides the placeholder.
    Path {
        #[serde(default)]
        name: Option<String>,
    },
    /// Query string parameter keyed by the parameter name.
    #[default]
    Query,
    /// Query string parameter with an explicit key.
    NamedQuery { name: String },
    /// Request header.
    Header { name: String },
    /// Request body.
    Body,
    /// Cancellation token passed through to the requester.
    CancellationToken,
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Queries and Validation
// ============================================================================

impl TypeDescriptor {
    /// Names declared by the contract itself.
    ///
    /// Generated identifiers must stay clear of these.
    pub fn member_names(&self) -> IndexSet<&str> {
        self.members
            .iter()
            .filter_map(MemberDescriptor::declared_name)
            .map(raw_identifier)
            .collect()
    }

    /// Every name in scope inside the generated class: type parameters, then members.
    pub fn reserved_names(&self) -> IndexSet<&str> {
        self.type_parameters
            .iter()
            .map(|p| raw_identifier(&p.name))
            .chain(self.member_names())
            .collect()
    }

    /// Name without the verbatim marker.
    pub fn raw_name(&self) -> &str {
        raw_identifier(&self.name)
    }

    pub fn arity(&self) -> usize {
        self.type_parameters.len()
    }

    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Check every identifier and header annotation.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        check_identifier("type name", &self.name)?;
        for segment in &self.namespace {
            check_identifier("namespace segment", segment)?;
        }
        for containing in &self.containing_types {
            check_identifier("containing type", containing)?;
        }
        for param in &self.type_parameters {
            check_identifier("type parameter", &param.name)?;
            for constraint in &param.constraints {
                check_type("constraint", &param.name, constraint)?;
            }
        }
        for header in &self.headers {
            header.validate()?;
        }

        for member in &self.members {
            match member {
                MemberDescriptor::Property(p) | MemberDescriptor::RequesterProperty(p) => {
                    check_identifier("property", &p.name)?;
                    check_type("property", &p.name, &p.type_name)?;
                    if !p.has_getter && !p.has_setter {
                        return Err(DescriptorError::NoAccessors(p.name.clone()));
                    }
                }
                MemberDescriptor::Method(m) => {
                    check_identifier("method", &m.name)?;
                    check_type("method", &m.name, &m.return_type)?;
                    if let Some(type_name) = m.response.type_name() {
                        check_type("response", &m.name, type_name)?;
                    }
                    for param in &m.parameters {
                        check_identifier("parameter", &param.name)?;
                        check_type("parameter", &param.name, &param.type_name)?;
                    }
                    for header in &m.headers {
                        header.validate()?;
                    }
                }
                MemberDescriptor::Dispose => {}
            }
        }
        Ok(())
    }
}

fn check_identifier(what: &'static str, name: &str) -> Result<(), DescriptorError> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(DescriptorError::InvalidIdentifier {
            what,
            name: name.to_string(),
        })
    }
}

fn check_type(what: &'static str, name: &str, type_name: &str) -> Result<(), DescriptorError> {
    if type_name.trim().is_empty() {
        return Err(DescriptorError::MissingType {
            what,
            name: name.to_string(),
        });
    }
    if !is_type_text(type_name) {
        return Err(DescriptorError::MalformedType {
            what,
            name: name.to_string(),
            type_name: type_name.to_string(),
        });
    }
    Ok(())
}

/// Type and constraint text is written verbatim, so it must stay inside one
/// declaration: no statement or block punctuation, no comments or literals,
/// no line breaks, and balanced brackets.
fn is_type_text(text: &str) -> bool {
    let mut open = Vec::new();
    for c in text.chars() {
        match c {
            '<' | '(' | '[' => open.push(c),
            '>' | ')' | ']' => {
                let expected = match c {
                    '>' => '<',
                    ')' => '(',
                    _ => '[',
                };
                if open.pop() != Some(expected) {
                    return false;
                }
            }
            ';' | '{' | '}' | '/' | '"' | '\'' | '#' => return false,
            '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}' => return false,
            _ => {}
        }
    }
    open.is_empty()
}
