//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("relaygen")
        .about("Generate forwarding C# implementations from contract descriptors")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(emit_command())
        .subcommand(check_command())
}

/// Generate implementations.
pub fn emit_command() -> Command {
    Command::new("emit")
        .about("Generate implementations for contract descriptors")
        .override_usage(
            "\
  relaygen emit <DESCRIPTORS>...
  relaygen emit <DESCRIPTORS>... -o <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  relaygen emit api.json                  # print to stdout
  relaygen emit contracts/ -o Generated   # one file per contract
  relaygen emit api.json --indent 2       # two-space indentation
  cat api.json | relaygen emit -          # read stdin"#,
        )
        .arg(inputs_arg())
        .arg(out_dir_arg())
        .arg(namespace_suffix_arg())
        .arg(type_prefix_arg())
        .arg(indent_arg())
        .arg(no_nullable_disable_arg())
}

/// Validate descriptors without writing anything.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate contract descriptors")
        .after_help(
            r#"EXAMPLES:
  relaygen check api.json                 # single file
  relaygen check contracts/               # every .json in a directory"#,
        )
        .arg(inputs_arg())
}
