mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{BatchParams, CheckParams, DumpParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    // Batch runs report progress per grammar; single-grammar commands stay quiet.
    let default_level = match matches.subcommand_name() {
        Some("batch") => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("batch", m)) => {
            let params = BatchParams::from_matches(m);
            commands::batch::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
