//! Configuration types for implementation emission.

use relaygen_core::csharp::is_valid_identifier;

use super::EmitError;

/// Fully-qualified names of the runtime types generated code refers to.
///
/// The caller resolves these against the runtime it targets; names must be
/// written so they resolve from any namespace (`global::` prefixed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WellKnownTypes {
    /// The requester every member forwards to.
    pub requester: String,
    /// The disposal capability whose `Dispose()` is implemented explicitly.
    pub disposable: String,
    /// Assembly attribute linking a contract to its implementation.
    pub implementation_attribute: String,
    /// Per-call request description handed to the requester.
    pub request_info: String,
    /// Factory expression named in the constructor's obsolete message.
    pub factory: String,
}

impl Default for WellKnownTypes {
    fn default() -> Self {
        Self {
            requester: "global::RestEase.IRequester".to_string(),
            disposable: "global::System.IDisposable".to_string(),
            implementation_attribute:
                "global::RestEase.Implementation.RestEaseInterfaceImplementationAttribute"
                    .to_string(),
            request_info: "global::RestEase.Implementation.RequestInfo".to_string(),
            factory: "RestClient.For".to_string(),
        }
    }
}

/// Configuration for implementation emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Namespace segment appended to the contract's namespace
    pub(crate) namespace_suffix: String,
    /// Leading part of generated type names, before the batch index
    pub(crate) type_prefix: String,
    /// Spaces per indentation level
    pub(crate) indent_width: usize,
    /// Whether to open the file with `#nullable disable`
    pub(crate) nullable_disable: bool,
    /// Runtime types referenced by generated code
    pub(crate) types: WellKnownTypes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace_suffix: "RestEaseGeneratedTypes".to_string(),
            type_prefix: "Implementation".to_string(),
            indent_width: 4,
            nullable_disable: true,
            types: WellKnownTypes::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace segment reserved for generated types.
    pub fn namespace_suffix(mut self, value: impl Into<String>) -> Self {
        self.namespace_suffix = value.into();
        self
    }

    /// Set the generated type name prefix.
    pub fn type_prefix(mut self, value: impl Into<String>) -> Self {
        self.type_prefix = value.into();
        self
    }

    /// Set the number of spaces per indentation level.
    pub fn indent_width(mut self, value: usize) -> Self {
        self.indent_width = value;
        self
    }

    /// Set whether to emit `#nullable disable`.
    pub fn nullable_disable(mut self, value: bool) -> Self {
        self.nullable_disable = value;
        self
    }

    /// Set the runtime type names.
    pub fn types(mut self, value: WellKnownTypes) -> Self {
        self.types = value;
        self
    }

    pub fn well_known_types(&self) -> &WellKnownTypes {
        &self.types
    }

    /// Check that the naming options form valid C# names.
    ///
    /// Each dot-separated suffix segment must be an identifier, and the prefix
    /// must start one (`{prefix}_0_IApi`).
    pub fn validate(&self) -> Result<(), EmitError> {
        if !self.namespace_suffix.split('.').all(is_valid_identifier) {
            return Err(EmitError::Config {
                option: "namespace suffix",
                value: self.namespace_suffix.clone(),
            });
        }
        if !is_valid_identifier(&format!("{}_0_", self.type_prefix)) {
            return Err(EmitError::Config {
                option: "type prefix",
                value: self.type_prefix.clone(),
            });
        }
        Ok(())
    }
}
