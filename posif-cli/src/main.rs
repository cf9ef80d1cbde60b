mod run;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "posif";
    pub const BIN_NAME: &str = "posif";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Detect small RNA candidate regions from per-base read coverage and annotate them against a genome feature table.")
        .subcommand_required(true)
        .subcommand(run::cli::create_run_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // RUN
        //
        Some((run::cli::RUN_CMD, matches)) => {
            run::handlers::run_posif(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
