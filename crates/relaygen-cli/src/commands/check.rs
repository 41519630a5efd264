use std::path::PathBuf;

use relaygen_compiler::{Config, emit_batch};
use relaygen_core::TypeDescriptor;

use super::descriptor_loader::load_descriptors;

pub struct CheckArgs {
    pub inputs: Vec<PathBuf>,
}

pub fn run(args: CheckArgs) -> Result<(), String> {
    let descriptors = load_descriptors(&args.inputs).map_err(|e| e.to_string())?;

    let problems = check_descriptors(&descriptors);
    for problem in &problems {
        eprintln!("error: {}", problem);
    }
    if !problems.is_empty() {
        return Err(format!(
            "{} of {} contracts are invalid",
            problems.len(),
            descriptors.len()
        ));
    }

    // Silent on success (like cargo check)
    Ok(())
}

/// One message per descriptor that cannot be implemented.
///
/// Goes through full emission so method shapes are checked too.
pub fn check_descriptors(descriptors: &[TypeDescriptor]) -> Vec<String> {
    emit_batch(descriptors, &Config::default())
        .into_iter()
        .zip(descriptors)
        .filter_map(|(result, descriptor)| {
            result
                .err()
                .map(|e| format!("{}: {}", descriptor.name, e))
        })
        .collect()
}
