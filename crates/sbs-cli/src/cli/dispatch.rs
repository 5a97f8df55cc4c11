//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep clap-level choices
//! (such as [`ColorChoice`]) unresolved, which keeps them easy to test.

use std::path::PathBuf;

use clap::ArgMatches;
use sbs_lib::SerializerKind;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::decode::DecodeArgs;
use crate::commands::encode::EncodeArgs;
use crate::commands::export::ExportArgs;
use crate::commands::schema_loader::SchemaArgs;

/// Schema inputs shared by every command.
#[derive(Debug, PartialEq, Eq)]
pub struct SchemaParams {
    pub paths: Vec<PathBuf>,
    pub texts: Vec<String>,
    pub serializer: Option<SerializerKind>,
}

impl SchemaParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            paths: m
                .get_many::<PathBuf>("schema_paths")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            texts: m
                .get_many::<String>("schema_text")
                .map(|texts| texts.cloned().collect())
                .unwrap_or_default(),
            serializer: m
                .get_one::<String>("serializer")
                .and_then(|name| SerializerKind::from_name(name)),
        }
    }
}

impl From<SchemaParams> for SchemaArgs {
    fn from(p: SchemaParams) -> Self {
        Self {
            paths: p.paths,
            texts: p.texts,
            serializer: p.serializer,
        }
    }
}

pub struct CheckParams {
    pub schema: SchemaParams,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema: SchemaParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            schema: p.schema.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct EncodeParams {
    pub schema: SchemaParams,
    pub type_name: String,
    pub json_text: Option<String>,
    pub input: Option<PathBuf>,
    pub hex: bool,
    pub color: ColorChoice,
}

impl EncodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema: SchemaParams::from_matches(m),
            type_name: type_name(m),
            json_text: m.get_one::<String>("json_text").cloned(),
            input: m.get_one::<PathBuf>("input").cloned(),
            hex: m.get_flag("hex"),
            color: parse_color(m),
        }
    }
}

impl From<EncodeParams> for EncodeArgs {
    fn from(p: EncodeParams) -> Self {
        Self {
            schema: p.schema.into(),
            type_name: p.type_name,
            json_text: p.json_text,
            input: p.input,
            hex: p.hex,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DecodeParams {
    pub schema: SchemaParams,
    pub type_name: String,
    pub input: Option<PathBuf>,
    pub hex_input: Option<String>,
    pub pretty: bool,
    pub color: ColorChoice,
}

impl DecodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema: SchemaParams::from_matches(m),
            type_name: type_name(m),
            input: m.get_one::<PathBuf>("input").cloned(),
            hex_input: m.get_one::<String>("hex_input").cloned(),
            pretty: m.get_flag("pretty"),
            color: parse_color(m),
        }
    }
}

impl From<DecodeParams> for DecodeArgs {
    fn from(p: DecodeParams) -> Self {
        Self {
            schema: p.schema.into(),
            type_name: p.type_name,
            input: p.input,
            hex_input: p.hex_input,
            pretty: p.pretty,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExportParams {
    pub schema: SchemaParams,
    pub pretty: bool,
    pub color: ColorChoice,
}

impl ExportParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema: SchemaParams::from_matches(m),
            pretty: m.get_flag("pretty"),
            color: parse_color(m),
        }
    }
}

impl From<ExportParams> for ExportArgs {
    fn from(p: ExportParams) -> Self {
        Self {
            schema: p.schema.into(),
            pretty: p.pretty,
            color: p.color.should_colorize(),
        }
    }
}

/// `-t` is required by clap for every command that reads it.
fn type_name(m: &ArgMatches) -> String {
    m.get_one::<String>("type_name").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
