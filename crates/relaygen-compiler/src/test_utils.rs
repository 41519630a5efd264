//! Test utilities.

use relaygen_core::{TypeDescriptor, parse_descriptors};

use crate::emit::{Config, emit};

/// Parse a single descriptor from JSON.
pub fn descriptor(json: &str) -> TypeDescriptor {
    let mut descriptors = parse_descriptors(json).expect("descriptor JSON should parse");
    assert_eq!(descriptors.len(), 1, "expected exactly one descriptor");
    descriptors.remove(0)
}

/// Emit a descriptor given as JSON with the default config at batch index 0.
pub fn emit_json(json: &str) -> String {
    emit_json_at(json, 0)
}

/// Emit a descriptor given as JSON with the default config.
pub fn emit_json_at(json: &str, index: usize) -> String {
    let descriptor = descriptor(json);
    emit(&descriptor, &Config::default(), index)
        .expect("emission should succeed")
        .into_source()
}

/// Lines strictly between `opening` and the `}` that closes its block.
pub fn block_body<'a>(source: &'a str, opening: &str) -> Vec<&'a str> {
    let mut lines = source.lines().skip_while(|l| l.trim() != opening);
    lines.next().expect("opening line not found");
    let brace = lines.next().expect("block has no opening brace");
    let indent = &brace[..brace.len() - brace.trim_start().len()];
    let close = format!("{indent}}}");
    lines.take_while(|l| *l != close).collect()
}
