use super::CliError;
use super::schema_loader::{SchemaArgs, load_repository};

pub struct CheckArgs {
    pub schema: SchemaArgs,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    if let Err(error) = check(&args) {
        error.exit(args.color);
    }

    // Silent on success (like cargo check)
}

pub fn check(args: &CheckArgs) -> Result<(), CliError> {
    load_repository(&args.schema)?;
    Ok(())
}
