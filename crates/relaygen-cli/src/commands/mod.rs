pub mod check;
pub mod descriptor_loader;
pub mod emit;

#[cfg(test)]
mod emit_tests;
