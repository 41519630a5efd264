//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Descriptor files or directories (positional, one or more).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("DESCRIPTORS")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Descriptor JSON files, directories of them, or '-' for stdin")
}

/// Output directory (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write one .g.cs file per contract here instead of stdout (required for more than one contract)")
}

/// Generated namespace segment (--namespace-suffix).
pub fn namespace_suffix_arg() -> Arg {
    Arg::new("namespace_suffix")
        .long("namespace-suffix")
        .value_name("NAME")
        .default_value("RestEaseGeneratedTypes")
        .help("Namespace segment appended to each contract's namespace")
}

/// Generated type name prefix (--type-prefix).
pub fn type_prefix_arg() -> Arg {
    Arg::new("type_prefix")
        .long("type-prefix")
        .value_name("NAME")
        .default_value("Implementation")
        .help("Prefix of generated type names")
}

/// Indentation width (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("4")
        .value_parser(value_parser!(usize))
        .help("Spaces per indentation level")
}

/// Skip the nullable directive (--no-nullable-disable).
pub fn no_nullable_disable_arg() -> Arg {
    Arg::new("no_nullable_disable")
        .long("no-nullable-disable")
        .action(ArgAction::SetTrue)
        .help("Don't open files with `#nullable disable`")
}
