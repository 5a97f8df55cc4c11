//! Reading command input from inline text, a file, or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::CliError;
use super::hex;

/// A JSON value from `-j`, `-i FILE`, or stdin (also `-i -`).
pub fn read_json(text: Option<&str>, path: Option<&Path>) -> Result<serde_json::Value, CliError> {
    let value = match text {
        Some(text) => serde_json::from_str(text)?,
        None => serde_json::from_slice(&read_input(path)?)?,
    };
    Ok(value)
}

/// Encoded bytes from `-x HEX`, `-i FILE`, or stdin (also `-i -`).
pub fn read_bytes(hex_text: Option<&str>, path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match hex_text {
        Some(text) => hex::decode(text).ok_or(CliError::Hex),
        None => read_input(path),
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read(path).map_err(|error| CliError::Read {
            path: path.to_path_buf(),
            error,
        }),
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(CliError::Stdin)?;
            Ok(buf)
        }
    }
}
