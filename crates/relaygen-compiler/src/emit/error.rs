//! Error types for implementation emission.

use relaygen_core::DescriptorError;

/// Error during implementation emission.
///
/// Any error aborts the whole type: no partial implementation is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// A naming option would produce an invalid declaration.
    #[error("invalid {option} `{value}`")]
    Config { option: &'static str, value: String },

    /// The descriptor failed validation.
    #[error("invalid descriptor for `{type_name}`: {source}")]
    Descriptor {
        type_name: String,
        #[source]
        source: DescriptorError,
    },

    /// A method lacks the shape needed to forward it.
    #[error("method `{method}` cannot be implemented: {reason}")]
    MalformedMethod { method: String, reason: String },

    /// A string did not survive the round trip through a C# literal.
    #[error("{value:?} cannot be written as a string literal")]
    UnrepresentableLiteral { value: String },
}
