use std::path::PathBuf;

use sbs_lib::{Repository, SchemaSource, SerializerKind};

use super::CliError;

/// Where schemas come from and which serializer the repository uses.
#[derive(Debug, Default)]
pub struct SchemaArgs {
    pub paths: Vec<PathBuf>,
    pub texts: Vec<String>,
    pub serializer: Option<SerializerKind>,
}

/// Paths load before inline texts, each group in command-line order.
pub fn load_repository(args: &SchemaArgs) -> Result<Repository, CliError> {
    if args.paths.is_empty() && args.texts.is_empty() {
        return Err(CliError::MissingSchema);
    }

    let sources = args
        .paths
        .iter()
        .cloned()
        .map(SchemaSource::from)
        .chain(args.texts.iter().cloned().map(SchemaSource::from));

    let mut builder = Repository::builder().sources(sources);
    if let Some(kind) = args.serializer {
        builder = builder.serializer(kind);
    }

    let repo = builder.build()?;
    tracing::info!(
        modules = repo.modules().len(),
        serializer = repo.serializer().name(),
        "loaded schemas"
    );
    Ok(repo)
}
