use super::CliError;
use super::schema_loader::{SchemaArgs, load_repository};

pub struct ExportArgs {
    pub schema: SchemaArgs,
    pub pretty: bool,
    pub color: bool,
}

pub fn run(args: ExportArgs) {
    match export(&args) {
        Ok(json) => println!("{}", json),
        Err(error) => error.exit(args.color),
    }
}

pub fn export(args: &ExportArgs) -> Result<String, CliError> {
    let repo = load_repository(&args.schema)?;
    let portable = repo.to_portable()?;

    let text = if args.pretty {
        serde_json::to_string_pretty(&portable)?
    } else {
        serde_json::to_string(&portable)?
    };
    Ok(text)
}
