use std::io::{self, Write};
use std::path::PathBuf;

use super::schema_loader::{SchemaArgs, load_repository};
use super::{CliError, hex, input};

pub struct EncodeArgs {
    pub schema: SchemaArgs,
    pub type_name: String,
    pub json_text: Option<String>,
    pub input: Option<PathBuf>,
    pub hex: bool,
    pub color: bool,
}

pub fn run(args: EncodeArgs) {
    let result = encode(&args).and_then(|output| {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&output).map_err(CliError::Write)?;
        stdout.flush().map_err(CliError::Write)
    });

    if let Err(error) = result {
        error.exit(args.color);
    }
}

/// Returns exactly what goes to stdout: raw bytes, or a hex line.
pub fn encode(args: &EncodeArgs) -> Result<Vec<u8>, CliError> {
    let repo = load_repository(&args.schema)?;
    let json = input::read_json(args.json_text.as_deref(), args.input.as_deref())?;
    let value = repo.value_from_json(&args.type_name, &json)?;
    let encoded = repo.encode(&args.type_name, &value)?;

    if args.hex {
        let mut line = hex::encode(&encoded);
        line.push('\n');
        return Ok(line.into_bytes());
    }
    Ok(encoded)
}
