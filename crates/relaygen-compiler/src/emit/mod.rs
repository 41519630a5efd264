//! Implementation emission from contract descriptors.
//!
//! One [`Emitter`] per contract produces one [`EmittedArtifact`]:
//! - `naming` - collision-free generated identifiers
//! - `scaffold` - linking attribute, namespace, class, backing fields
//! - `ctor` - instance constructor and header-table initializer
//! - `members` - properties, requester property, `Dispose`, methods
//! - `escape` - C# string literals

mod artifact;
mod batch;
mod config;
mod ctor;
mod emitter;
mod error;
mod escape;
mod members;
mod naming;
mod scaffold;
mod writer;


pub use artifact::EmittedArtifact;
pub use batch::{emit_batch, emit_batch_with};
pub use config::{Config, WellKnownTypes};
pub use emitter::{Emitter, emit, emit_with};
pub use error::EmitError;
pub use escape::{quote_optional, quote_string, unquote_string};
pub use naming::NameAllocator;
pub use writer::CodeWriter;

pub(crate) use escape::{checked_literal, checked_optional_literal};
