#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for relaygen.
//!
//! - **Descriptors** (`TypeDescriptor` and friends): the contract model the
//!   emitter consumes, deserializable from JSON.
//! - **C# naming** (`csharp`): keyword escaping and identifier checks shared
//!   by descriptor validation and emission.

pub mod csharp;
mod descriptor;

#[cfg(test)]
mod descriptor_tests;

pub use descriptor::{
    HeaderAnnotation, MemberDescriptor, MethodDescriptor, ParameterDescriptor, ParameterRole,
    PropertyDescriptor, RequestDescriptor, ResponseKind, TypeDescriptor, TypeParameter,
};

/// A descriptor that cannot describe a valid contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("invalid {what} identifier `{name}`")]
    InvalidIdentifier { what: &'static str, name: String },

    #[error("{what} `{name}` has no type")]
    MissingType { what: &'static str, name: String },

    #[error("{what} `{name}` has malformed type `{type_name}`")]
    MalformedType {
        what: &'static str,
        name: String,
        type_name: String,
    },

    #[error("property `{0}` has neither a getter nor a setter")]
    NoAccessors(String),

    #[error("header name must not be empty")]
    EmptyHeaderName,

    #[error("header name `{0}` must not contain ':'")]
    HeaderNameColon(String),
}

/// Parse descriptors from JSON: either a single object or an array of them.
pub fn parse_descriptors(json: &str) -> Result<Vec<TypeDescriptor>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|descriptor| vec![descriptor])
    }
}
