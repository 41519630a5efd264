use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use relaygen_compiler::{Config, EmittedArtifact, emit_batch};
use relaygen_core::TypeDescriptor;

use super::descriptor_loader::load_descriptors;

pub struct EmitArgs {
    pub inputs: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub namespace_suffix: String,
    pub type_prefix: String,
    pub indent: usize,
    pub nullable_disable: bool,
}

impl EmitArgs {
    fn config(&self) -> Config {
        Config::new()
            .namespace_suffix(self.namespace_suffix.as_str())
            .type_prefix(self.type_prefix.as_str())
            .indent_width(self.indent)
            .nullable_disable(self.nullable_disable)
    }

    /// `Implementation_0_IApi.g.cs`, matching the generated type name.
    fn file_name(&self, index: usize, descriptor: &TypeDescriptor) -> String {
        format!("{}_{}_{}.g.cs", self.type_prefix, index, descriptor.raw_name())
    }
}

pub fn run(args: EmitArgs) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit_to(&args, &mut out)
}

/// Emit every loaded descriptor, to `args.out_dir` or else to `out`.
///
/// `out` receives a single compilation unit, so more than one contract needs
/// an output directory. Types that fail are reported on stderr; the rest are
/// still written.
pub fn emit_to(args: &EmitArgs, out: &mut dyn Write) -> Result<(), String> {
    let config = args.config();
    config.validate().map_err(|e| e.to_string())?;

    let descriptors = load_descriptors(&args.inputs).map_err(|e| e.to_string())?;

    if args.out_dir.is_none() && descriptors.len() > 1 {
        return Err(format!(
            "{} contracts loaded; stdout holds one, use -o/--out-dir for more",
            descriptors.len()
        ));
    }

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)
            .map_err(|e| format!("failed to create '{}': {}", dir.display(), e))?;
    }

    let results = emit_batch(&descriptors, &config);
    let mut failed = 0;
    for (index, (descriptor, result)) in descriptors.iter().zip(results).enumerate() {
        match result {
            Ok(artifact) => write_artifact(args, index, descriptor, &artifact, out)?,
            Err(e) => {
                eprintln!("error: {}: {}", descriptor.name, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!(
            "{} of {} contracts could not be generated",
            failed,
            descriptors.len()
        ));
    }
    Ok(())
}

fn write_artifact(
    args: &EmitArgs,
    index: usize,
    descriptor: &TypeDescriptor,
    artifact: &EmittedArtifact,
    out: &mut dyn Write,
) -> Result<(), String> {
    match &args.out_dir {
        Some(dir) => {
            let path = dir.join(args.file_name(index, descriptor));
            fs::write(&path, artifact.source())
                .map_err(|e| format!("failed to write '{}': {}", path.display(), e))?;
            tracing::info!(path = %path.display(), "wrote implementation");
        }
        None => {
            out.write_all(artifact.source().as_bytes())
                .map_err(|e| format!("failed to write output: {}", e))?;
        }
    }
    Ok(())
}
