use std::path::PathBuf;

use super::schema_loader::{SchemaArgs, load_repository};
use super::{CliError, input};

pub struct DecodeArgs {
    pub schema: SchemaArgs,
    pub type_name: String,
    pub input: Option<PathBuf>,
    pub hex_input: Option<String>,
    pub pretty: bool,
    pub color: bool,
}

pub fn run(args: DecodeArgs) {
    match decode(&args) {
        Ok(json) => println!("{}", json),
        Err(error) => error.exit(args.color),
    }
}

/// Trailing bytes after the value are ignored.
pub fn decode(args: &DecodeArgs) -> Result<String, CliError> {
    let repo = load_repository(&args.schema)?;
    let data = input::read_bytes(args.hex_input.as_deref(), args.input.as_deref())?;
    let value = repo.decode(&args.type_name, data)?;
    let json = repo.value_to_json(&args.type_name, &value)?;

    let text = if args.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}
