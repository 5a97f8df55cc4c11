//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema files or directories (positional, repeatable).
pub fn schema_paths_arg() -> Arg {
    Arg::new("schema_paths")
        .value_name("SCHEMA")
        .num_args(1..)
        .value_parser(value_parser!(PathBuf))
        .help("Schema files (.sbs) or directories searched for them")
}

/// Inline schema text (-s/--schema).
pub fn schema_text_arg() -> Arg {
    Arg::new("schema_text")
        .short('s')
        .long("schema")
        .value_name("TEXT")
        .action(ArgAction::Append)
        .help("Inline schema module text")
}

/// Type to encode or decode (-t/--type).
pub fn type_name_arg() -> Arg {
    Arg::new("type_name")
        .short('t')
        .long("type")
        .value_name("MODULE.NAME")
        .required(true)
        .help("Type name in dotted form, e.g. `Shapes.Point`")
}

/// Inline JSON value (-j/--json).
pub fn json_text_arg() -> Arg {
    Arg::new("json_text")
        .short('j')
        .long("json")
        .value_name("JSON")
        .conflicts_with("input")
        .help("Inline JSON value")
}

/// Input file (-i/--input).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read input from file ('-' for stdin, the default)")
}

/// Inline hex input (-x/--hex-input).
pub fn hex_input_arg() -> Arg {
    Arg::new("hex_input")
        .short('x')
        .long("hex-input")
        .value_name("HEX")
        .conflicts_with("input")
        .help("Encoded bytes as hex, e.g. `0x8182`")
}

/// Write hex instead of raw bytes (--hex).
pub fn hex_output_arg() -> Arg {
    Arg::new("hex")
        .long("hex")
        .action(ArgAction::SetTrue)
        .help("Print encoded bytes as hex")
}

/// Pretty-print JSON output (--pretty).
pub fn pretty_arg() -> Arg {
    Arg::new("pretty")
        .long("pretty")
        .action(ArgAction::SetTrue)
        .help("Pretty-print JSON output")
}

/// Serializer implementation (--serializer).
pub fn serializer_arg() -> Arg {
    Arg::new("serializer")
        .long("serializer")
        .value_name("NAME")
        .value_parser(["portable", "fast"])
        .help("Serializer implementation (default: fast when compiled in)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log verbosity (-v info, -vv debug, -vvv trace; RUST_LOG overrides)")
}
