//! Schema sources accepted by the repository.

use std::fs;
use std::path::{Path, PathBuf};

use sbs_core::Module;

use super::Repository;
use crate::analyze::SchemaError;
use crate::parser::{ParseFuel, parse_module};
use crate::{Error, Result};

/// File extension of schema files.
pub const SCHEMA_EXTENSION: &str = "sbs";

/// Origin used in diagnostics for inline schema text.
pub const TEXT_ORIGIN: &str = "<text>";

/// One input to [`RepositoryBuilder`](super::RepositoryBuilder).
#[derive(Debug, Clone)]
pub enum SchemaSource {
    /// Schema language text holding one module.
    Text(String),
    /// A `.sbs` file, or a directory searched recursively for them.
    Path(PathBuf),
    /// Modules of an existing repository, reused without re-parsing.
    Repository(Repository),
    /// Already parsed modules, e.g. from the portable form.
    Modules(Vec<Module>),
}

impl From<&str> for SchemaSource {
    fn from(text: &str) -> Self {
        SchemaSource::Text(text.to_owned())
    }
}

impl From<String> for SchemaSource {
    fn from(text: String) -> Self {
        SchemaSource::Text(text)
    }
}

impl From<PathBuf> for SchemaSource {
    fn from(path: PathBuf) -> Self {
        SchemaSource::Path(path)
    }
}

impl From<&Path> for SchemaSource {
    fn from(path: &Path) -> Self {
        SchemaSource::Path(path.to_path_buf())
    }
}

impl From<Repository> for SchemaSource {
    fn from(repo: Repository) -> Self {
        SchemaSource::Repository(repo)
    }
}

impl From<&Repository> for SchemaSource {
    fn from(repo: &Repository) -> Self {
        SchemaSource::Repository(repo.clone())
    }
}

impl From<Vec<Module>> for SchemaSource {
    fn from(modules: Vec<Module>) -> Self {
        SchemaSource::Modules(modules)
    }
}

impl SchemaSource {
    /// Appends this source's modules in load order.
    pub(crate) fn load_into(self, fuel: ParseFuel, modules: &mut Vec<Module>) -> Result<()> {
        match self {
            SchemaSource::Text(text) => modules.push(parse_module(TEXT_ORIGIN, &text, fuel)?),
            SchemaSource::Path(path) => load_path(&path, fuel, modules)?,
            SchemaSource::Repository(repo) => modules.extend(repo.modules().iter().cloned()),
            SchemaSource::Modules(parsed) => modules.extend(parsed),
        }
        Ok(())
    }
}

fn load_path(path: &Path, fuel: ParseFuel, modules: &mut Vec<Module>) -> Result<()> {
    if path.is_dir() {
        let mut files = Vec::new();
        collect_schema_files(path, &mut files)?;
        // Sort for deterministic ordering
        files.sort();
        tracing::debug!(dir = %path.display(), files = files.len(), "scanned schema directory");
        for file in files {
            modules.push(load_file(&file, fuel)?);
        }
        return Ok(());
    }

    if is_schema_file(path) {
        modules.push(load_file(path, fuel)?);
        return Ok(());
    }

    Err(SchemaError::UnsupportedSource(path.to_path_buf()).into())
}

fn is_schema_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SCHEMA_EXTENSION)
}

fn collect_schema_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|error| io_error(dir, error))?;
    for entry in entries {
        let entry = entry.map_err(|error| io_error(dir, error))?;
        let path = entry.path();
        // Symlinked directories are not followed; a link back to an ancestor would never end.
        let file_type = entry.file_type().map_err(|error| io_error(&path, error))?;
        if file_type.is_dir() {
            collect_schema_files(&path, out)?;
        } else if is_schema_file(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn load_file(path: &Path, fuel: ParseFuel) -> Result<Module> {
    let text = fs::read_to_string(path).map_err(|error| io_error(path, error))?;
    parse_module(&path.to_string_lossy(), &text, fuel)
}

pub(crate) fn io_error(path: &Path, error: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        error,
    }
}
