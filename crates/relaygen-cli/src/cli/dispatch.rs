//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::emit::EmitArgs;

pub struct EmitParams {
    pub inputs: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub namespace_suffix: String,
    pub type_prefix: String,
    pub indent: usize,
    pub no_nullable_disable: bool,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: parse_inputs(m),
            out_dir: m.get_one::<PathBuf>("out_dir").cloned(),
            namespace_suffix: m
                .get_one::<String>("namespace_suffix")
                .cloned()
                .unwrap_or_default(),
            type_prefix: m
                .get_one::<String>("type_prefix")
                .cloned()
                .unwrap_or_default(),
            indent: m.get_one::<usize>("indent").copied().unwrap_or(4),
            no_nullable_disable: m.get_flag("no_nullable_disable"),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        Self {
            inputs: p.inputs,
            out_dir: p.out_dir,
            namespace_suffix: p.namespace_suffix,
            type_prefix: p.type_prefix,
            indent: p.indent,
            nullable_disable: !p.no_nullable_disable,
        }
    }
}

pub struct CheckParams {
    pub inputs: Vec<PathBuf>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: parse_inputs(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self { inputs: p.inputs }
    }
}

fn parse_inputs(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("inputs")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default()
}
