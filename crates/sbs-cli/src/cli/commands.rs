//! Command builders for the CLI.
//!
//! Every command loads a repository, so every command takes the schema
//! inputs and the common flags.

use clap::Command;

use super::args::*;

/// Schema inputs plus the flags shared by all commands.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(schema_paths_arg())
        .arg(schema_text_arg())
        .arg(serializer_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sbs")
        .about("Schema-driven binary serialization")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(encode_command())
        .subcommand(decode_command())
        .subcommand(export_command())
}

/// Load and evaluate schemas.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate schemas")
        .override_usage(
            "\
  sbs check <SCHEMA>...
  sbs check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  sbs check shapes.sbs                # one file
  sbs check schemas/                  # every .sbs file below a directory
  sbs check -s 'module M T = Integer' # inline schema"#,
        );

    with_common_args(cmd)
}

/// JSON value in, bytes out.
pub fn encode_command() -> Command {
    let cmd = Command::new("encode")
        .about("Encode a JSON value")
        .override_usage(
            "\
  sbs encode <SCHEMA>... -t <MODULE.NAME> -j <JSON>
  sbs encode <SCHEMA>... -t <MODULE.NAME> -i <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  sbs encode shapes.sbs -t Shapes.Point -j '{"x": 1, "y": 2}' --hex
  sbs encode shapes.sbs -t Shapes.Point -i point.json > point.bin
  echo '[1, 2]' | sbs encode -s 'module M L = Array(Integer)' -t M.L --hex"#,
        )
        .arg(type_name_arg())
        .arg(json_text_arg())
        .arg(input_arg())
        .arg(hex_output_arg());

    with_common_args(cmd)
}

/// Bytes in, JSON value out.
pub fn decode_command() -> Command {
    let cmd = Command::new("decode")
        .about("Decode bytes to a JSON value")
        .override_usage(
            "\
  sbs decode <SCHEMA>... -t <MODULE.NAME> -x <HEX>
  sbs decode <SCHEMA>... -t <MODULE.NAME> -i <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  sbs decode shapes.sbs -t Shapes.Point -x 8182
  sbs decode shapes.sbs -t Shapes.Point -i point.bin --pretty"#,
        )
        .arg(type_name_arg())
        .arg(input_arg())
        .arg(hex_input_arg())
        .arg(pretty_arg());

    with_common_args(cmd)
}

/// Print the portable schema form.
pub fn export_command() -> Command {
    let cmd = Command::new("export")
        .about("Print schemas in portable JSON form")
        .override_usage("  sbs export <SCHEMA>... [--pretty]")
        .arg(pretty_arg());

    with_common_args(cmd)
}
