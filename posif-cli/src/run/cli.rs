use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgGroup, Command, arg, value_parser};

use posif_core::models::Organism;

pub const RUN_CMD: &str = "run";

pub fn create_run_cli() -> Command {
    Command::new(RUN_CMD)
        .about("Detect sRNA candidate regions in per-base coverage and annotate them against a gene table.")
        .arg(
            arg!(--organism <ORGANISM>)
                .required(false)
                .value_parser(Organism::ALL.map(|o| o.name()))
                .help("Organism whose bundled annotation table to use"),
        )
        .arg(
            Arg::new("annotations-dir")
                .long("annotations-dir")
                .required(false)
                .default_value("annotations")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the bundled `<organism>.gff` tables"),
        )
        .arg(
            arg!(--gff <GFF>)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a GFF annotation table (instead of --organism)"),
        )
        .group(
            ArgGroup::new("annotation")
                .args(["organism", "gff"])
                .required(true)
                .multiple(false),
        )
        .arg(
            Arg::new("strand-type")
                .long("strand-type")
                .required(true)
                .value_parser(["strand_spec", "non_strand_spec"])
                .help("Whether coverage was collected per strand"),
        )
        .arg(
            arg!(--fwd <FWD>)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("Forward strand per-base coverage (strand_spec)"),
        )
        .arg(
            arg!(--rev <REV>)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("Reverse strand per-base coverage (strand_spec)"),
        )
        .arg(
            arg!(--perbase <PERBASE>)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("Per-base coverage (non_strand_spec)"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory for the output CSV files"),
        )
        .arg(
            arg!(--contamination <CONTAMINATION>)
                .required(false)
                .value_parser(value_parser!(f64))
                .help("Expected fraction of outlier positions, in (0, 1) [default: 0.05]"),
        )
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with a [detector] table"),
        )
        .arg(
            Arg::new("scores")
                .long("scores")
                .action(ArgAction::SetTrue)
                .help("Also write per-position anomaly scores"),
        )
}
