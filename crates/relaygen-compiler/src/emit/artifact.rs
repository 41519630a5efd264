//! Finished emitter output.

use std::fmt;

/// Source text of one generated implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedArtifact {
    source: String,
}

impl EmittedArtifact {
    pub(crate) fn new(source: String) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }
}

impl fmt::Display for EmittedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
