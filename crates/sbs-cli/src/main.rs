mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{CheckParams, DecodeParams, EncodeParams, ExportParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            init_tracing(m.get_count("verbose"));
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("encode", m)) => {
            init_tracing(m.get_count("verbose"));
            let params = EncodeParams::from_matches(m);
            commands::encode::run(params.into());
        }
        Some(("decode", m)) => {
            init_tracing(m.get_count("verbose"));
            let params = DecodeParams::from_matches(m);
            commands::decode::run(params.into());
        }
        Some(("export", m)) => {
            init_tracing(m.get_count("verbose"));
            let params = ExportParams::from_matches(m);
            commands::export::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
