pub mod check;
pub mod decode;
pub mod encode;
pub mod export;
pub mod hex;
pub mod input;
pub mod schema_loader;


use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Anything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("schema is required: pass a file, a directory, or -s/--schema")]
    MissingSchema,

    #[error(transparent)]
    Lib(#[from] sbs_lib::Error),

    #[error("failed to read {}: {error}", path.display())]
    Read { path: PathBuf, error: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to write output: {0}")]
    Write(io::Error),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid hex input")]
    Hex,
}

impl CliError {
    /// Prints the error to stderr and exits with status 1.
    pub fn exit(self, color: bool) -> ! {
        match self {
            CliError::Lib(sbs_lib::Error::Parse(parse)) => eprint!("{}", parse.render(color)),
            other => eprintln!("error: {}", other),
        }
        std::process::exit(1);
    }
}
